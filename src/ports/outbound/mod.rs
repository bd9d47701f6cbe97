/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console, etc.).
pub mod dependency_source;
pub mod graph_renderer;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_source::DependencySource;
pub use graph_renderer::GraphRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
