use crate::dependency_graph::domain::{DependencyEdge, DependencyGraph, Package, PackageName};
use crate::ports::outbound::GraphRenderer;
use std::collections::BTreeSet;

/// Marker printed for a package without immediate dependencies
const NO_DEPENDENCIES: &str = "(no dependencies)";

/// SummaryRenderer adapter producing the plain edge-list report
///
/// One line per package in first-visited order, followed by the cycle report.
pub struct SummaryRenderer;

impl SummaryRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Answer to one reverse-dependency query, dependents in sorted order
    pub fn render_reverse(&self, target: &str, dependents: &BTreeSet<PackageName>) -> String {
        let listed = if dependents.is_empty() {
            "(none)".to_string()
        } else {
            dependents
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("Packages depending on {}: {}\n", target, listed)
    }

    /// Requirement strings declared by the root, as published by the index
    pub fn render_direct_requirements(&self, root: &Package, requirements: &[String]) -> String {
        let mut output = format!("Direct dependencies of {}:\n", root);
        if requirements.is_empty() {
            output.push_str("  (no direct dependencies)\n");
        }
        for requirement in requirements {
            output.push_str(&format!("  - {}\n", requirement));
        }
        output
    }
}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for SummaryRenderer {
    fn render(&self, graph: &DependencyGraph, cycles: &[DependencyEdge]) -> String {
        let mut output = String::new();

        output.push_str("Dependency graph (edge A -> B means 'A depends on B').\n");
        output.push_str(&format!("Root package: {}\n\n", graph.root()));

        for (package, dependencies) in graph.adjacency() {
            let listed = if dependencies.is_empty() {
                NO_DEPENDENCIES.to_string()
            } else {
                dependencies
                    .iter()
                    .map(|d| d.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output.push_str(&format!("  {} -> {}\n", package, listed));
        }

        output.push('\n');
        if cycles.is_empty() {
            output.push_str("No cyclic dependencies detected.\n");
        } else {
            output.push_str("Cyclic dependencies detected (edge U -> V closes a cycle):\n");
            for cycle in cycles {
                output.push_str(&format!("  {}\n", cycle));
            }
        }

        output
    }
}
