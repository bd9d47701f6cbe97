//! depgraph-viz - dependency graph resolution and visualization
//!
//! This library resolves the transitive dependency graph of a Python package,
//! either from the PyPI JSON API or from a static test repository file, and
//! renders it as an edge-list summary, Graphviz DOT or an ASCII tree. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): Graph model, builder and cycle detector
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error and result types
//!
//! # Example
//!
//! ```no_run
//! use depgraph_viz::prelude::*;
//! use std::path::Path;
//!
//! # async fn example() -> Result<()> {
//! let source = FixtureDependencySource::from_file(Path::new("repo.txt"))?;
//! let use_case = BuildGraphUseCase::new(source, StderrProgressReporter::new());
//!
//! let response = use_case.execute(GraphRequest::new("A", vec![])).await?;
//!
//! let renderer = DotRenderer::new();
//! println!("{}", renderer.render(&response.graph, &response.cycles));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, FixtureDependencySource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{CachingDependencySource, PyPiDependencySource};
    pub use crate::adapters::outbound::renderers::{
        AsciiTreeRenderer, DotRenderer, SummaryRenderer,
    };
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputFormat};
    pub use crate::application::use_cases::BuildGraphUseCase;
    pub use crate::dependency_graph::domain::{
        DependencyEdge, DependencyGraph, Package, PackageName, Version,
    };
    pub use crate::dependency_graph::services::{CycleDetector, GraphBuilder};
    pub use crate::ports::outbound::{
        DependencySource, GraphRenderer, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::{DepgraphError, GraphResult, Result};
}
