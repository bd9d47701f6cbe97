/// Filesystem adapters for file I/O operations
mod file_writer;
mod fixture_source;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use fixture_source::FixtureDependencySource;
