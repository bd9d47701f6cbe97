use crate::dependency_graph::domain::{DependencyEdge, DependencyGraph, PackageName};
use crate::ports::outbound::GraphRenderer;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";

/// AsciiTreeRenderer adapter drawing the graph as an indented box-drawing tree
///
/// Shared dependencies are expanded under every parent. A child that is
/// already an ancestor on the path being drawn is printed once with a
/// `(cycle)` marker and not expanded further.
///
/// The output is one line per root-to-leaf path prefix, so it grows
/// exponentially with the number of stacked diamonds (`A -> {B, C} -> D`
/// repeated). The walk keeps its own frame stack, so depth is bounded by
/// memory rather than by the call stack.
pub struct AsciiTreeRenderer;

/// One package being expanded: its children and the next one to draw
struct Frame<'g> {
    children: &'g [PackageName],
    next: usize,
    prefix: String,
}

impl<'g> Frame<'g> {
    fn new(graph: &'g DependencyGraph, package: &PackageName, prefix: String) -> Self {
        Self {
            children: graph
                .direct_dependencies(package.as_str())
                .unwrap_or_default(),
            next: 0,
            prefix,
        }
    }
}

impl AsciiTreeRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_descendants(graph: &DependencyGraph, output: &mut String) {
        let root = graph.root();
        let mut ancestors: Vec<&PackageName> = vec![root];
        let mut stack = vec![Frame::new(graph, root, String::new())];

        while let Some(frame) = stack.last_mut() {
            let children = frame.children;
            let Some(child) = children.get(frame.next) else {
                stack.pop();
                ancestors.pop();
                continue;
            };
            frame.next += 1;

            let is_last = frame.next == children.len();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            if ancestors.contains(&child) {
                output.push_str(&format!("{}{}{} (cycle)\n", frame.prefix, connector, child));
                continue;
            }

            output.push_str(&format!("{}{}{}\n", frame.prefix, connector, child));

            let child_prefix = format!(
                "{}{}",
                frame.prefix,
                if is_last { BLANK } else { CONTINUATION }
            );
            ancestors.push(child);
            stack.push(Frame::new(graph, child, child_prefix));
        }
    }
}

impl Default for AsciiTreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for AsciiTreeRenderer {
    // Cycle markers come from this walk's own ancestor path, not from `_cycles`
    fn render(&self, graph: &DependencyGraph, _cycles: &[DependencyEdge]) -> String {
        let mut output = format!("{}\n", graph.root());
        Self::render_descendants(graph, &mut output);
        output
    }
}
