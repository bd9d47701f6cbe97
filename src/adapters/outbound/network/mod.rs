/// Network adapters for the package index
mod caching_dependency_source;
mod pypi_dependency_source;

pub use caching_dependency_source::CachingDependencySource;
pub use pypi_dependency_source::PyPiDependencySource;
