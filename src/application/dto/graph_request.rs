/// GraphRequest - Internal request DTO for the graph building use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    /// Name of the package the traversal starts from
    pub root: String,
    /// Packages whose reverse dependencies should be reported, in request order
    pub reverse_targets: Vec<String>,
}

impl GraphRequest {
    pub fn new(root: impl Into<String>, reverse_targets: Vec<String>) -> Self {
        Self {
            root: root.into(),
            reverse_targets,
        }
    }
}
