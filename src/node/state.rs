use serde::{Deserialize, Serialize};

/// Visitation status of a node during one traversal.
///
/// Within a traversal a node only moves forward:
/// `NotFound -> Open -> Closed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Not yet discovered
    #[default]
    NotFound,
    /// Discovered and on the frontier
    Open,
    /// Fully expanded
    Closed,
}
