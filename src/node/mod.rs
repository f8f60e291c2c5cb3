mod core;
mod state;
mod tests;
mod visit;

pub use self::core::{Node, NodeId};
pub use state::NodeState;
pub use visit::{Visit, Visits};
