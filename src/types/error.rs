use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for graph construction and traversal
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GraphError {
    /// Start or end is unset, or names a value that is not a vertex
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The configured expansion budget ran out before the traversal concluded
    #[error("Expansion limit of {0} reached")]
    ExpansionLimit(usize),

    #[error("Parse: {0}")]
    Parse(String),

    // Catch-all for other errors like anyhow
    #[error("Other: {0}")]
    Other(String),
}

impl From<anyhow::Error> for GraphError {
    fn from(err: anyhow::Error) -> Self {
        GraphError::Other(err.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Parse(err.to_string())
    }
}
