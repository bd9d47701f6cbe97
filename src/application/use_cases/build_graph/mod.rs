use crate::application::dto::{GraphRequest, GraphResponse, ReverseDependencies};
use crate::dependency_graph::domain::{DependencyEdge, DependencyGraph, PackageName};
use crate::dependency_graph::services::{CycleDetector, GraphBuilder};
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};


/// BuildGraphUseCase - Core use case for dependency graph resolution
///
/// Builds the graph from the requested root, detects cycles and answers
/// reverse-dependency queries. Infrastructure is injected through generics.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildGraphUseCase<S, PR> {
    dependency_source: S,
    progress_reporter: PR,
}

impl<S, PR> BuildGraphUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new BuildGraphUseCase with injected dependencies
    pub fn new(dependency_source: S, progress_reporter: PR) -> Self {
        Self {
            dependency_source,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails when the root is blank or invalid, or when any package reachable
    /// from it cannot be resolved. Unknown reverse targets do not fail the
    /// call; their `NotFound` is carried in the response.
    pub async fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Resolve the graph
        let graph = self.resolve_graph(&request.root).await?;

        // Step 2: Find cycle-closing edges
        let cycles = self.detect_cycles(&graph);

        // Step 3: Answer reverse queries
        let reverse_dependencies = request
            .reverse_targets
            .iter()
            .map(|target| ReverseDependencies {
                target: target.clone(),
                dependents: graph.reverse_dependencies(target),
            })
            .collect();

        Ok(GraphResponse::new(graph, cycles, reverse_dependencies))
    }

    async fn resolve_graph(&self, root: &str) -> Result<DependencyGraph> {
        self.progress_reporter
            .report(&format!("🔍 Resolving dependencies of {}...", root.trim()));

        let source = ReportingSource::new(&self.dependency_source, &self.progress_reporter);
        match GraphBuilder::build(root, &source).await {
            Ok(graph) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Resolved {} package(s) with {} edge(s)",
                    graph.package_count(),
                    graph.edge_count()
                ));
                Ok(graph)
            }
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Dependency resolution aborted");
                Err(e.into())
            }
        }
    }

    fn detect_cycles(&self, graph: &DependencyGraph) -> Vec<DependencyEdge> {
        let cycles = CycleDetector::find_cycles(graph);
        if !cycles.is_empty() {
            self.progress_reporter.report(&format!(
                "🔁 Detected {} cycle-closing edge(s)",
                cycles.len()
            ));
        }
        cycles
    }
}

/// Forwards lookups to the wrapped source and reports each one as progress
struct ReportingSource<'a, S, PR> {
    inner: &'a S,
    reporter: &'a PR,
    resolved: AtomicUsize,
}

impl<'a, S, PR> ReportingSource<'a, S, PR> {
    fn new(inner: &'a S, reporter: &'a PR) -> Self {
        Self {
            inner,
            reporter,
            resolved: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl<'a, S, PR> DependencySource for ReportingSource<'a, S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    async fn immediate_dependencies(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        let dependencies = self.inner.immediate_dependencies(package).await?;
        let resolved = self.resolved.fetch_add(1, Ordering::SeqCst) + 1;
        self.reporter
            .report_progress(resolved, Some(package.as_str()));
        Ok(dependencies)
    }
}
