use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::config::DEFAULT_CONFIG_FILENAME;

/// Resolve and visualize the dependency graph of a Python package
#[derive(Parser, Debug)]
#[command(name = "depgraph-viz")]
#[command(version)]
#[command(about = "Resolve and visualize the dependency graph of a Python package", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Render only this format: summary, dot or tree
    /// (default: summary and dot, plus tree when ascii_tree is enabled)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// List the packages that directly depend on PACKAGE.
    /// Can be specified multiple times: -r idna -r urllib3.
    /// Answers go to stderr when --format is given
    #[arg(short, long = "reverse", value_name = "PACKAGE")]
    pub reverse: Vec<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not print the loaded configuration
    #[arg(long)]
    pub no_config_print: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
