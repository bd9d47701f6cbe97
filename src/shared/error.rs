use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph resolved and rendered
    Success = 0,
    /// Application error (configuration, lookup, network, file I/O, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while resolving, querying and presenting dependency graphs.
///
/// The first group (`EmptyRoot`, `SourceLookupFailure`, `NotFound`,
/// `InvalidPackageName`) is produced by the graph core and carries only the
/// kind and the offending name. The remaining variants belong to the
/// configuration and I/O layers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DepgraphError {
    #[error("Root package name is empty")]
    EmptyRoot,

    #[error("Failed to resolve dependencies of package '{package}'\nDetails: {details}")]
    SourceLookupFailure { package: String, details: String },

    #[error("Package '{package}' is not part of the dependency graph")]
    NotFound { package: String },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Configuration file not found: {path}\n\n💡 Hint: Pass the path explicitly with --config")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse configuration file: {path}\nDetails: {details}\n\n💡 Hint: The file must contain an [app] table with key = value pairs")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Malformed test repository {path}, line {line}: {details}\n\n💡 Hint: Each line must look like 'A: B C'")]
    FixtureParseError {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl DepgraphError {
    pub fn not_found(package: impl Into<String>) -> Self {
        DepgraphError::NotFound {
            package: package.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        DepgraphError::InvalidConfig {
            message: message.into(),
        }
    }
}
