use crate::dependency_graph::domain::{DependencyGraph, PackageName};
use crate::ports::outbound::DependencySource;
use crate::shared::{DepgraphError, GraphResult};
use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};

/// GraphBuilder service for materializing the transitive dependency graph
///
/// Starting from the root, every distinct package is looked up exactly once
/// and its immediate dependencies are recorded as reported by the source.
/// Termination relies only on the visited set, so cyclic data is fine.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the dependency graph reachable from `root`
    ///
    /// # Arguments
    /// * `root` - Name of the root package
    /// * `source` - Where immediate dependencies are looked up
    ///
    /// # Returns
    /// A DependencyGraph whose keys are exactly the packages reachable from
    /// `root`, in breadth-first visiting order
    ///
    /// # Errors
    /// - `EmptyRoot` if `root` is blank
    /// - `InvalidPackageName` if `root` is not a valid package name
    /// - `SourceLookupFailure` for the first package the source cannot
    ///   resolve; no partial graph is returned
    pub async fn build<S>(root: &str, source: &S) -> GraphResult<DependencyGraph>
    where
        S: DependencySource + ?Sized,
    {
        if root.trim().is_empty() {
            return Err(DepgraphError::EmptyRoot);
        }
        let root = PackageName::new(root)?;

        let mut adjacency: IndexMap<PackageName, Vec<PackageName>> = IndexMap::new();
        let mut queued: HashSet<PackageName> = HashSet::from([root.clone()]);
        let mut pending: VecDeque<PackageName> = VecDeque::from([root.clone()]);

        // `queued` guarantees each name enters `pending` at most once
        while let Some(package) = pending.pop_front() {
            let dependencies = source
                .immediate_dependencies(&package)
                .await
                .map_err(|e| DepgraphError::SourceLookupFailure {
                    package: package.to_string(),
                    details: format!("{:#}", e),
                })?;

            for dependency in &dependencies {
                if queued.insert(dependency.clone()) {
                    pending.push_back(dependency.clone());
                }
            }

            adjacency.insert(package, dependencies);
        }

        Ok(DependencyGraph::new(root, adjacency))
    }
}
