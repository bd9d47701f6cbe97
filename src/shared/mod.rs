/// Shared kernel - error types and result alias used across all layers
pub mod error;
mod result;

pub use error::DepgraphError;
pub use result::{GraphResult, Result};
