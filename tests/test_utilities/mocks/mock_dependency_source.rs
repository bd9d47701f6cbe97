use async_trait::async_trait;
use depgraph_viz::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DependencySource backed by an in-memory adjacency map
///
/// Records every lookup so tests can check the visited-once discipline.
#[derive(Default, Clone)]
pub struct MockDependencySource {
    entries: HashMap<String, Vec<String>>,
    failing: Vec<String>,
    pub lookups: Arc<Mutex<Vec<String>>>,
}

impl MockDependencySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.entries.insert(
            name.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    /// Makes lookups of `name` fail as if the index were unreachable
    #[allow(dead_code)]
    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    pub fn get_lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl DependencySource for MockDependencySource {
    async fn immediate_dependencies(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        self.lookups.lock().unwrap().push(package.to_string());

        if self.failing.iter().any(|f| f == package.as_str()) {
            anyhow::bail!("connection refused while fetching {}", package);
        }

        let dependencies = self
            .entries
            .get(package.as_str())
            .ok_or_else(|| anyhow::anyhow!("package '{}' not found", package))?;

        let mut names = Vec::with_capacity(dependencies.len());
        for dependency in dependencies {
            names.push(PackageName::new(dependency.as_str())?);
        }
        Ok(names)
    }
}
