use crate::dependency_graph::domain::{DependencyEdge, DependencyGraph};

/// GraphRenderer port for projecting a resolved graph into text
///
/// Renderers are pure: the output depends only on the graph (which carries
/// its root) and the cycle edges, and no renderer performs I/O.
pub trait GraphRenderer {
    /// Renders the graph as a single text block
    ///
    /// # Arguments
    /// * `graph` - The completed dependency graph
    /// * `cycles` - Cycle-closing edges as reported by the cycle detector
    fn render(&self, graph: &DependencyGraph, cycles: &[DependencyEdge]) -> String;
}
