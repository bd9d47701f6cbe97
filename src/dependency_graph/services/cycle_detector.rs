use crate::dependency_graph::domain::{DependencyEdge, DependencyGraph, PackageName};
use std::collections::HashSet;

/// CycleDetector service for finding the edges that close a cycle
///
/// Walks the graph depth-first from its root with an explicit stack. An edge
/// `(u, v)` is reported when `v` is on the current path while `u` is being
/// expanded. Edges into packages that are already finished are cross or
/// forward edges and are skipped.
///
/// The result is not a minimal cycle basis: one underlying cycle may be
/// reported through several entry edges.
pub struct CycleDetector;

impl CycleDetector {
    /// Returns cycle-closing edges in depth-first discovery order
    pub fn find_cycles(graph: &DependencyGraph) -> Vec<DependencyEdge> {
        let mut cycles = Vec::new();
        let mut on_path: HashSet<&PackageName> = HashSet::new();
        let mut finished: HashSet<&PackageName> = HashSet::new();
        // (package, index of the next dependency to examine)
        let mut stack: Vec<(&PackageName, usize)> = Vec::new();

        let root = graph.root();
        on_path.insert(root);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let package = frame.0;
            // Names that were never visited are leaves
            let dependencies = graph
                .direct_dependencies(package.as_str())
                .unwrap_or_default();

            match dependencies.get(frame.1) {
                Some(dependency) => {
                    frame.1 += 1;
                    if on_path.contains(dependency) {
                        cycles.push(DependencyEdge::new(package.clone(), dependency.clone()));
                    } else if !finished.contains(dependency) {
                        on_path.insert(dependency);
                        stack.push((dependency, 0));
                    }
                }
                None => {
                    stack.pop();
                    on_path.remove(package);
                    finished.insert(package);
                }
            }
        }

        cycles
    }
}
