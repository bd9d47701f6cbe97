use crate::dependency_graph::domain::{DependencyEdge, DependencyGraph, PackageName};
use crate::shared::GraphResult;
use std::collections::BTreeSet;

/// Answer to one reverse-dependency query
///
/// A target that is not part of the graph keeps its `NotFound` error so the
/// caller decides how to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseDependencies {
    pub target: String,
    pub dependents: GraphResult<BTreeSet<PackageName>>,
}

/// GraphResponse - Response DTO from the graph building use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// The resolved graph
    pub graph: DependencyGraph,
    /// Cycle-closing edges in discovery order
    pub cycles: Vec<DependencyEdge>,
    /// One entry per requested target, in request order
    pub reverse_dependencies: Vec<ReverseDependencies>,
}

impl GraphResponse {
    pub fn new(
        graph: DependencyGraph,
        cycles: Vec<DependencyEdge>,
        reverse_dependencies: Vec<ReverseDependencies>,
    ) -> Self {
        Self {
            graph,
            cycles,
            reverse_dependencies,
        }
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}
