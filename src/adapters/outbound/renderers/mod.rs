/// Renderer adapters for the textual projections of a dependency graph
mod ascii_tree_renderer;
mod dot_renderer;
mod summary_renderer;

pub use ascii_tree_renderer::AsciiTreeRenderer;
pub use dot_renderer::DotRenderer;
pub use summary_renderer::SummaryRenderer;
