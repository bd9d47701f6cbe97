use crate::dependency_graph::domain::{DependencyEdge, DependencyGraph};
use crate::ports::outbound::GraphRenderer;
use std::collections::HashSet;

/// Attribute list attached to edges that close a cycle
const CYCLE_EDGE_ATTRIBUTES: &str = " [color=red, penwidth=2.0]";

/// DotRenderer adapter producing a Graphviz `digraph`
///
/// Node and edge statements follow the graph's first-visited order. Package
/// names are restricted to `[A-Za-z0-9._-]`, so quoting them is sufficient.
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &DependencyGraph, cycles: &[DependencyEdge]) -> String {
        let cycle_edges: HashSet<&DependencyEdge> = cycles.iter().collect();
        let mut output = String::new();

        output.push_str("digraph dependencies {\n");
        output.push_str(&format!("  label=\"Dependencies of {}\";\n", graph.root()));
        output.push_str("  labelloc=\"t\";\n");
        output.push_str("  node [shape=box, fontname=\"monospace\"];\n\n");

        for package in graph.packages() {
            output.push_str(&format!("  \"{}\";\n", package));
        }

        if graph.edge_count() > 0 {
            output.push('\n');
        }

        for edge in graph.edges() {
            let attributes = if cycle_edges.contains(&edge) {
                CYCLE_EDGE_ATTRIBUTES
            } else {
                ""
            };
            output.push_str(&format!(
                "  \"{}\" -> \"{}\"{};\n",
                edge.from, edge.to, attributes
            ));
        }

        output.push_str("}\n");
        output
    }
}
