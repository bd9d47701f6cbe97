use crate::dependency_graph::domain::PackageName;
use crate::shared::Result;
use async_trait::async_trait;

/// DependencySource port for looking up a package's immediate dependencies
///
/// This port abstracts where dependency data comes from: the PyPI JSON API
/// or a static test repository file.
///
/// Implementations must be deterministic per call: the same name yields the
/// same ordered sequence. A package without declared dependencies yields an
/// empty vector, never an error.
#[async_trait]
pub trait DependencySource: Send + Sync {
    /// Returns the immediate dependency names of `package`, in declared order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package is unknown to the source
    /// - The network request fails or returns a non-success status
    /// - The source data for the package is malformed
    async fn immediate_dependencies(&self, package: &PackageName) -> Result<Vec<PackageName>>;
}

