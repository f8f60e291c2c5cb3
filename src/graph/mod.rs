mod core;
mod display;
mod edges;

pub use self::core::Graph;
pub use display::PathReport;
pub use edges::{Edge, EdgeList};
