use crate::dependency_graph::domain::PackageName;
use crate::ports::outbound::DependencySource;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingDependencySource wraps a DependencySource and adds in-memory caching.
///
/// Decorator over any DependencySource: each package is fetched from the
/// inner source at most once for the lifetime of this value. Failures are
/// not cached. Nothing is persisted to disk.
pub struct CachingDependencySource<S: DependencySource> {
    inner: S,
    cache: Arc<DashMap<PackageName, Vec<PackageName>>>,
}

impl<S: DependencySource> CachingDependencySource<S> {
    /// Creates a new caching source wrapping the given inner source
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// The wrapped source
    #[cfg(test)]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<S: DependencySource> DependencySource for CachingDependencySource<S> {
    async fn immediate_dependencies(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        if let Some(cached) = self.cache.get(package) {
            return Ok(cached.clone());
        }

        let dependencies = self.inner.immediate_dependencies(package).await?;
        self.cache.insert(package.clone(), dependencies.clone());

        Ok(dependencies)
    }
}
