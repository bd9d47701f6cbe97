use crate::adapters::outbound::renderers::{AsciiTreeRenderer, DotRenderer, SummaryRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphRenderer;

/// Factory for creating graph renderers
///
/// This factory encapsulates the selection of renderer implementations.
/// It belongs in the application layer as it picks infrastructure adapters
/// based on application needs.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depgraph_viz::application::dto::OutputFormat;
    /// use depgraph_viz::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Dot);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphRenderer> {
        match format {
            OutputFormat::Summary => Box::new(SummaryRenderer::new()),
            OutputFormat::Dot => Box::new(DotRenderer::new()),
            OutputFormat::Tree => Box::new(AsciiTreeRenderer::new()),
        }
    }

    /// Formats rendered in order when the user did not pick one
    ///
    /// The ASCII tree is only included when it is enabled in the configuration.
    pub fn default_formats(ascii_tree: bool) -> Vec<OutputFormat> {
        let mut formats = vec![OutputFormat::Summary, OutputFormat::Dot];
        if ascii_tree {
            formats.push(OutputFormat::Tree);
        }
        formats
    }

    /// Heading printed above a rendering when several formats are combined
    pub fn section_title(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Summary => "Dependency summary",
            OutputFormat::Dot => "Graphviz (DOT)",
            OutputFormat::Tree => "ASCII tree",
        }
    }
}
