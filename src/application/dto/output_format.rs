/// Output format enumeration for graph rendering
///
/// Each variant selects one textual projection of the dependency graph.
/// It lives in the application layer because both the CLI (which parses it)
/// and the renderer factory (which acts on it) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Edge-list summary with the cycle report
    Summary,
    /// Graphviz DOT description
    Dot,
    /// Box-drawing ASCII tree
    Tree,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" | "text" => Ok(OutputFormat::Summary),
            "dot" | "graphviz" => Ok(OutputFormat::Dot),
            "tree" | "ascii" => Ok(OutputFormat::Tree),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'summary', 'dot' or 'tree'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Summary => write!(f, "summary"),
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}
