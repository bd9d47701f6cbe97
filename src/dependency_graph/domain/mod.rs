pub mod dependency_graph;
pub mod package;

pub use dependency_graph::{DependencyEdge, DependencyGraph};
pub use package::{Package, PackageName, Version};
