use crate::dependency_graph::domain::{Package, PackageName};
use crate::ports::outbound::DependencySource;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct PyPiPackageInfo {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    /// PEP 508 requirement strings; `null` when nothing is declared
    #[serde(default)]
    requires_dist: Option<Vec<serde_json::Value>>,
}

impl PyPiInfo {
    /// Requirement strings with environment markers stripped, in declared order
    fn raw_requirements(&self) -> Vec<String> {
        self.requires_dist
            .iter()
            .flatten()
            .filter_map(|item| item.as_str())
            .map(|item| item.split(';').next().unwrap_or_default().trim())
            .filter(|requirement| !requirement.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Extracts the distribution name from a requirement string
///
/// `"urllib3 (<3,>=1.21.1)"`, `"ruff>=0.6.2"` and `"socks [extra] (<1.0)"`
/// yield `urllib3`, `ruff` and `socks`.
fn requirement_name(requirement: &str) -> Option<&str> {
    let requirement = requirement.split(';').next()?.trim();
    let end = requirement
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'))
        .unwrap_or(requirement.len());
    let name = &requirement[..end];
    (!name.is_empty()).then_some(name)
}

/// PyPiDependencySource adapter resolving dependencies through the PyPI JSON API
///
/// The root package is looked up at its configured version
/// (`<base>/<name>/<version>/json`); every other package resolves to its
/// latest release (`<base>/<name>/json`). Dependencies are the names found in
/// `info.requires_dist`.
pub struct PyPiDependencySource {
    client: reqwest::Client,
    base_url: String,
    root: Package,
    max_retries: u32,
}

impl PyPiDependencySource {
    /// Creates a new source talking to the index at `base_url`
    pub fn new(base_url: &str, root: Package) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depgraph-viz/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            root,
            max_retries: 3,
        })
    }

    /// Metadata URL for `package`, pinned to the configured version for the root
    fn metadata_url(&self, package: &PackageName) -> String {
        let encoded_package = urlencoding::encode(package.as_str());
        if package == self.root.name() {
            format!(
                "{}/{}/{}/json",
                self.base_url,
                encoded_package,
                urlencoding::encode(self.root.version().as_str())
            )
        } else {
            format!("{}/{}/json", self.base_url, encoded_package)
        }
    }

    /// Fetches package metadata with retry logic
    async fn fetch_with_retry(&self, url: &str) -> Result<PyPiPackageInfo> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_metadata(url).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No request was attempted for {}", url)))
    }

    async fn fetch_metadata(&self, url: &str) -> Result<PyPiPackageInfo> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Network error while requesting {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Package index returned status code {} for {}",
                response.status(),
                url
            );
        }

        let package_info: PyPiPackageInfo = response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;
        Ok(package_info)
    }

    /// Requirement strings declared by the root package, markers stripped
    ///
    /// Used for the "direct dependencies" listing; unlike
    /// `immediate_dependencies` the version specifiers are kept.
    pub async fn fetch_raw_requirements(&self) -> Result<Vec<String>> {
        let url = self.metadata_url(self.root.name());
        let package_info = self.fetch_with_retry(&url).await?;
        Ok(package_info.info.raw_requirements())
    }
}

#[async_trait]
impl DependencySource for PyPiDependencySource {
    async fn immediate_dependencies(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        let url = self.metadata_url(package);
        let package_info = self.fetch_with_retry(&url).await?;

        let mut dependencies = Vec::new();
        for requirement in package_info.info.raw_requirements() {
            if let Some(name) = requirement_name(&requirement) {
                // The same name may be listed once per environment marker
                let name = PackageName::new(name)?;
                if !dependencies.contains(&name) {
                    dependencies.push(name);
                }
            }
        }
        Ok(dependencies)
    }
}
