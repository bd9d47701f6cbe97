use crate::dependency_graph::domain::PackageName;
use crate::ports::outbound::DependencySource;
use crate::shared::{DepgraphError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maximum file size for security (10 MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// FixtureDependencySource adapter backed by a static test repository file
///
/// The file lists one package per line:
///
/// ```text
/// # comment
/// A: B C
/// B: C, D
/// C:
/// ```
///
/// Package names are upper-case Latin letters. A later line for the same
/// package replaces an earlier one, and packages that only appear on the
/// right-hand side resolve to an empty dependency list.
#[derive(Debug, Clone)]
pub struct FixtureDependencySource {
    entries: HashMap<PackageName, Vec<PackageName>>,
}

impl FixtureDependencySource {
    /// Loads a test repository from `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read safely or a line is malformed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = Self::safe_read_file(path)?;
        Ok(Self::parse(&content, path)?)
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read test repository {}: {}",
                path.display(),
                e
            )
        })?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        if metadata.len() > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read test repository {}: {}",
                path.display(),
                e
            )
        })
    }

    /// Parses test repository content; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> std::result::Result<Self, DepgraphError> {
        let malformed = |line: usize, details: String| DepgraphError::FixtureParseError {
            path: path.to_path_buf(),
            line,
            details,
        };

        let mut entries: HashMap<PackageName, Vec<PackageName>> = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let stripped = line.trim();
            if stripped.is_empty() || stripped.starts_with('#') {
                continue;
            }

            let (name_part, deps_part) = stripped.split_once(':').ok_or_else(|| {
                malformed(line_number, "expected 'A: B C'".to_string())
            })?;

            let name = Self::fixture_name(name_part.trim())
                .ok_or_else(|| {
                    malformed(
                        line_number,
                        format!(
                            "invalid package name '{}', expected upper-case Latin letters",
                            name_part.trim()
                        ),
                    )
                })?;

            let mut dependencies = Vec::new();
            for raw in deps_part.split(|c: char| c == ',' || c.is_whitespace()) {
                if raw.is_empty() {
                    continue;
                }
                let dependency = Self::fixture_name(raw).ok_or_else(|| {
                    malformed(
                        line_number,
                        format!(
                            "invalid dependency name '{}', expected upper-case Latin letters",
                            raw
                        ),
                    )
                })?;
                if !dependencies.contains(&dependency) {
                    dependencies.push(dependency);
                }
            }

            entries.insert(name, dependencies);
        }

        let referenced: Vec<PackageName> = entries.values().flatten().cloned().collect();
        for dependency in referenced {
            entries.entry(dependency).or_default();
        }

        Ok(Self { entries })
    }

    fn fixture_name(raw: &str) -> Option<PackageName> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_uppercase()) {
            return None;
        }
        PackageName::new(raw).ok()
    }

    #[cfg(test)]
    pub fn contains(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    #[cfg(test)]
    pub fn package_count(&self) -> usize {
        self.entries.len()
    }
}

#[async_trait]
impl DependencySource for FixtureDependencySource {
    async fn immediate_dependencies(&self, package: &PackageName) -> Result<Vec<PackageName>> {
        self.entries.get(package).cloned().ok_or_else(|| {
            anyhow::anyhow!("package '{}' is not present in the test repository", package)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(content: &str) -> std::result::Result<FixtureDependencySource, DepgraphError> {
        FixtureDependencySource::parse(content, Path::new("repo.txt"))
    }

    fn name(value: &str) -> PackageName {
        PackageName::new(value).unwrap()
    }

    async fn deps(source: &FixtureDependencySource, package: &str) -> Vec<String> {
        source
            .immediate_dependencies(&name(package))
            .await
            .unwrap()
            .iter()
            .map(|d| d.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_parse_readme_example() {
        let source = parse("B: C D\nC:\nD: B\n").unwrap();
        assert_eq!(deps(&source, "B").await, vec!["C", "D"]);
        assert!(deps(&source, "C").await.is_empty());
        assert_eq!(deps(&source, "D").await, vec!["B"]);
    }

    #[tokio::test]
    async fn test_parse_commas_comments_and_blank_lines() {
        let source = parse("# test repository\n\nA: B, C,D\n  B :C  \n").unwrap();
        assert_eq!(deps(&source, "A").await, vec!["B", "C", "D"]);
        assert_eq!(deps(&source, "B").await, vec!["C"]);
    }

    #[tokio::test]
    async fn test_referenced_only_packages_have_no_dependencies() {
        let source = parse("A: B\n").unwrap();
        assert!(source.contains("B"));
        assert!(deps(&source, "B").await.is_empty());
        assert_eq!(source.package_count(), 2);
    }

    #[tokio::test]
    async fn test_repeated_dependency_is_kept_once() {
        let source = parse("A: B B\nC: D, A, D, A\n").unwrap();
        assert_eq!(deps(&source, "A").await, vec!["B"]);
        assert_eq!(deps(&source, "C").await, vec!["D", "A"]);
    }

    #[tokio::test]
    async fn test_later_line_replaces_earlier_one() {
        let source = parse("A: B\nA: C\n").unwrap();
        assert_eq!(deps(&source, "A").await, vec!["C"]);
    }

    #[tokio::test]
    async fn test_unknown_package_is_an_error() {
        let source = parse("A: B\n").unwrap();
        let result = source.immediate_dependencies(&name("Q")).await;
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("'Q' is not present"));
    }

    #[test]
    fn test_missing_separator() {
        let result = parse("A: B\nC D\n");
        assert_eq!(
            result.unwrap_err(),
            DepgraphError::FixtureParseError {
                path: PathBuf::from("repo.txt"),
                line: 2,
                details: "expected 'A: B C'".to_string(),
            }
        );
    }

    #[test]
    fn test_lowercase_names_are_rejected() {
        let result = parse("a: B\n");
        assert!(matches!(
            result,
            Err(DepgraphError::FixtureParseError { line: 1, .. })
        ));

        let result = parse("A: b\n");
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("invalid dependency name 'b'"));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repo.txt");
        fs::write(&path, "X: X\n").unwrap();

        let source = FixtureDependencySource::from_file(&path).unwrap();
        assert!(source.contains("X"));
    }

    #[test]
    fn test_from_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FixtureDependencySource::from_file(&temp_dir.path().join("missing.txt"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read test repository"));
    }

    #[test]
    fn test_from_file_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = FixtureDependencySource::from_file(temp_dir.path());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("is not a regular file"));
    }

    #[test]
    fn test_from_file_parse_error_keeps_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repo.txt");
        fs::write(&path, "not a fixture line\n").unwrap();

        let err = FixtureDependencySource::from_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepgraphError>(),
            Some(DepgraphError::FixtureParseError { line: 1, .. })
        ));
    }
}
