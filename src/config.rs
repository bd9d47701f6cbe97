//! Configuration file support for depgraph-viz.
//!
//! The configuration is a TOML file holding a single `[app]` table of
//! `key = value` pairs. Values may be written as TOML strings, booleans or
//! integers; everything is normalized to text before validation.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::dependency_graph::domain::{Package, PackageName, Version};
use crate::shared::error::DepgraphError;
use crate::shared::Result;

pub const DEFAULT_CONFIG_FILENAME: &str = "depgraph.toml";

const KNOWN_KEYS: [&str; 6] = [
    "package_name",
    "version",
    "mode",
    "repo_url",
    "test_repo_path",
    "ascii_tree",
];

const TRUE_VALUES: [&str; 4] = ["1", "true", "yes", "on"];
const FALSE_VALUES: [&str; 4] = ["0", "false", "no", "off"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    app: Option<BTreeMap<String, toml::Value>>,
}

/// Where dependency data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// Live package index reachable at `repo_url`
    Real { repo_url: String },
    /// Static test repository file
    Test { test_repo_path: PathBuf },
}

impl SourceMode {
    pub fn name(&self) -> &'static str {
        match self {
            SourceMode::Real { .. } => "real",
            SourceMode::Test { .. } => "test",
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub package_name: String,
    pub version: String,
    pub mode: SourceMode,
    pub ascii_tree: bool,
}

impl AppConfig {
    /// The configured root as a domain value
    pub fn root_package(&self) -> Result<Package> {
        Ok(Package::new(
            PackageName::new(self.package_name.as_str())?,
            Version::new(self.version.clone())?,
        ))
    }

    /// Every setting as a `key = value` line; unused keys print empty
    pub fn display_lines(&self) -> Vec<String> {
        let (repo_url, test_repo_path) = match &self.mode {
            SourceMode::Real { repo_url } => (repo_url.clone(), String::new()),
            SourceMode::Test { test_repo_path } => {
                (String::new(), test_repo_path.display().to_string())
            }
        };

        vec![
            format!("package_name = {}", self.package_name),
            format!("version = {}", self.version),
            format!("mode = {}", self.mode),
            format!("repo_url = {}", repo_url),
            format!("test_repo_path = {}", test_repo_path),
            format!("ascii_tree = {}", self.ascii_tree),
        ]
    }
}

/// Load and validate the config at `path`.
pub fn load_config_from_path(path: &Path) -> Result<AppConfig> {
    if !path.is_file() {
        return Err(DepgraphError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| DepgraphError::ConfigParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_config(&content, path, base_dir)
}

/// Parse and validate config text; relative fixture paths resolve against `base_dir`.
fn parse_config(content: &str, path: &Path, base_dir: &Path) -> Result<AppConfig> {
    let file: ConfigFile = toml::from_str(content).map_err(|e| DepgraphError::ConfigParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let section = file.app.ok_or_else(|| {
        DepgraphError::invalid_config("the [app] table is missing from the configuration file")
    })?;

    let mut values = BTreeMap::new();
    for (key, value) in &section {
        values.insert(key.as_str(), value_to_text(key, value)?);
    }
    warn_unknown_fields(values.keys().copied());

    validate(&values, base_dir)
}

fn value_to_text(key: &str, value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.trim().to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        other => Err(DepgraphError::invalid_config(format!(
            "'{}' must be a string, boolean or integer, found {}",
            key,
            other.type_str()
        ))
        .into()),
    }
}

fn validate(values: &BTreeMap<&str, String>, base_dir: &Path) -> Result<AppConfig> {
    let get = |key: &str| values.get(key).map(String::as_str).unwrap_or("");

    let package_name = get("package_name");
    if package_name.is_empty() {
        return Err(DepgraphError::invalid_config(
            "'package_name' is required and must not be empty",
        )
        .into());
    }
    PackageName::new(package_name)?;

    let version = get("version");
    if version.is_empty() {
        return Err(
            DepgraphError::invalid_config("'version' is required and must not be empty").into(),
        );
    }
    Version::new(version.to_string()).map_err(|e| DepgraphError::invalid_config(e.to_string()))?;

    let mode = match get("mode").to_lowercase().as_str() {
        "real" => {
            let repo_url = get("repo_url");
            if repo_url.is_empty() {
                return Err(DepgraphError::invalid_config(
                    "mode 'real' requires a non-empty 'repo_url'",
                )
                .into());
            }
            if !(repo_url.starts_with("http://") || repo_url.starts_with("https://")) {
                return Err(DepgraphError::invalid_config(format!(
                    "'repo_url' must start with 'http://' or 'https://', got '{}'",
                    repo_url
                ))
                .into());
            }
            SourceMode::Real {
                repo_url: repo_url.to_string(),
            }
        }
        "test" => {
            let raw_path = get("test_repo_path");
            if raw_path.is_empty() {
                return Err(DepgraphError::invalid_config(
                    "mode 'test' requires a non-empty 'test_repo_path'",
                )
                .into());
            }
            let test_repo_path = base_dir.join(raw_path);
            if !test_repo_path.exists() {
                return Err(DepgraphError::invalid_config(format!(
                    "test repository file not found: {}",
                    test_repo_path.display()
                ))
                .into());
            }
            SourceMode::Test { test_repo_path }
        }
        other => {
            return Err(DepgraphError::invalid_config(format!(
                "'mode' must be 'real' or 'test', got '{}'",
                other
            ))
            .into())
        }
    };

    let ascii_tree = match values.get("ascii_tree") {
        Some(raw) => parse_bool(raw)?,
        None => false,
    };

    Ok(AppConfig {
        package_name: package_name.to_string(),
        version: version.to_string(),
        mode,
        ascii_tree,
    })
}

/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively.
fn parse_bool(raw: &str) -> Result<bool> {
    let value = raw.trim().to_lowercase();
    if TRUE_VALUES.contains(&value.as_str()) {
        Ok(true)
    } else if FALSE_VALUES.contains(&value.as_str()) {
        Ok(false)
    } else {
        Err(DepgraphError::invalid_config(format!(
            "'ascii_tree' must be one of {}, {}; got '{}'",
            TRUE_VALUES.join("/"),
            FALSE_VALUES.join("/"),
            raw
        ))
        .into())
    }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields<'a>(keys: impl Iterator<Item = &'a str>) {
    for key in keys.filter(|key| !KNOWN_KEYS.contains(key)) {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn invalid_config_message(err: anyhow::Error) -> String {
        match err.downcast_ref::<DepgraphError>() {
            Some(DepgraphError::InvalidConfig { message }) => message.clone(),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    fn parse(content: &str) -> Result<AppConfig> {
        parse_config(content, Path::new("depgraph.toml"), Path::new(""))
    }

    #[test]
    fn test_load_real_mode_config() {
        let config = parse(
            r#"
[app]
package_name = "requests"
version = "2.31.0"
mode = "REAL"
repo_url = "https://pypi.org/pypi"
ascii_tree = "yes"
"#,
        )
        .unwrap();

        assert_eq!(config.package_name, "requests");
        assert_eq!(config.version, "2.31.0");
        assert_eq!(
            config.mode,
            SourceMode::Real {
                repo_url: "https://pypi.org/pypi".to_string()
            }
        );
        assert!(config.ascii_tree);
    }

    #[test]
    fn test_load_test_mode_resolves_relative_to_config_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("repo.txt"), "A: B\n").unwrap();
        let config_path = dir.path().join("depgraph.toml");
        fs::write(
            &config_path,
            r#"
[app]
package_name = "A"
version = "1.0"
mode = "test"
test_repo_path = "repo.txt"
ascii_tree = true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.mode,
            SourceMode::Test {
                test_repo_path: dir.path().join("repo.txt")
            }
        );
        assert!(config.ascii_tree);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_config_from_path(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DepgraphError>(),
            Some(&DepgraphError::ConfigNotFound { path })
        );
    }

    #[test]
    fn test_load_config_parse_error() {
        let err = parse("[app\npackage_name = ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepgraphError>(),
            Some(DepgraphError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_missing_app_table() {
        let err = parse("[other]\nkey = \"value\"\n").unwrap_err();
        assert!(invalid_config_message(err).contains("[app] table is missing"));
    }

    #[test]
    fn test_required_fields() {
        let err = parse("[app]\nversion = \"1.0\"\nmode = \"test\"\n").unwrap_err();
        assert!(invalid_config_message(err).contains("'package_name' is required"));

        let err = parse("[app]\npackage_name = \"A\"\nmode = \"test\"\n").unwrap_err();
        assert!(invalid_config_message(err).contains("'version' is required"));
    }

    #[test]
    fn test_invalid_version() {
        let err = parse("[app]\npackage_name = \"A\"\nversion = \"1\"\nmode = \"test\"\n")
            .unwrap_err();
        assert!(invalid_config_message(err).contains("Invalid package version"));

        let err = parse("[app]\npackage_name = \"A\"\nversion = \"1.x\"\nmode = \"test\"\n")
            .unwrap_err();
        assert!(invalid_config_message(err).contains("Invalid package version"));
    }

    #[test]
    fn test_invalid_mode() {
        let err = parse("[app]\npackage_name = \"A\"\nversion = \"1.0\"\nmode = \"mirror\"\n")
            .unwrap_err();
        assert!(invalid_config_message(err).contains("'mode' must be 'real' or 'test'"));
    }

    #[test]
    fn test_real_mode_requires_http_url() {
        let base = "[app]\npackage_name = \"requests\"\nversion = \"2.31.0\"\nmode = \"real\"\n";

        let err = parse(base).unwrap_err();
        assert!(invalid_config_message(err).contains("requires a non-empty 'repo_url'"));

        let err = parse(&format!("{}repo_url = \"ftp://mirror\"\n", base)).unwrap_err();
        assert!(invalid_config_message(err).contains("must start with 'http://'"));
    }

    #[test]
    fn test_test_mode_requires_existing_file() {
        let base = "[app]\npackage_name = \"A\"\nversion = \"1.0\"\nmode = \"test\"\n";

        let err = parse(base).unwrap_err();
        assert!(invalid_config_message(err).contains("requires a non-empty 'test_repo_path'"));

        let err = parse(&format!("{}test_repo_path = \"/nonexistent/repo.txt\"\n", base))
            .unwrap_err();
        assert!(invalid_config_message(err).contains("test repository file not found"));
    }

    #[test]
    fn test_parse_bool() {
        for raw in ["1", "true", "YES", "On", " true "] {
            assert!(parse_bool(raw).unwrap(), "{}", raw);
        }
        for raw in ["0", "false", "No", "OFF"] {
            assert!(!parse_bool(raw).unwrap(), "{}", raw);
        }
        let err = parse_bool("maybe").unwrap_err();
        assert!(invalid_config_message(err).contains("got 'maybe'"));
    }

    #[test]
    fn test_ascii_tree_defaults_to_false() {
        let config = parse(
            "[app]\npackage_name = \"requests\"\nversion = \"2.31\"\nmode = \"real\"\nrepo_url = \"http://localhost\"\n",
        )
        .unwrap();
        assert!(!config.ascii_tree);
    }

    #[test]
    fn test_unsupported_value_type() {
        let err = parse("[app]\npackage_name = [\"A\"]\n").unwrap_err();
        assert!(invalid_config_message(err).contains("found array"));
    }

    #[test]
    fn test_display_lines() {
        let config = AppConfig {
            package_name: "requests".to_string(),
            version: "2.31.0".to_string(),
            mode: SourceMode::Real {
                repo_url: "https://pypi.org/pypi".to_string(),
            },
            ascii_tree: false,
        };

        assert_eq!(
            config.display_lines(),
            vec![
                "package_name = requests",
                "version = 2.31.0",
                "mode = real",
                "repo_url = https://pypi.org/pypi",
                "test_repo_path = ",
                "ascii_tree = false",
            ]
        );
    }

    #[test]
    fn test_root_package() {
        let config = AppConfig {
            package_name: "requests".to_string(),
            version: "2.31.0".to_string(),
            mode: SourceMode::Real {
                repo_url: "https://pypi.org/pypi".to_string(),
            },
            ascii_tree: false,
        };
        assert_eq!(config.root_package().unwrap().to_string(), "requests==2.31.0");
    }
}
