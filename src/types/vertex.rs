use std::fmt::Debug;

/// Values usable as vertex identities.
///
/// Vertices are compared by total order for lookup and adjacency sorting,
/// cloned once into the graph's index, and debug-formatted in diagnostics.
pub trait Vertex: Ord + Clone + Debug {}

impl<T> Vertex for T where T: Ord + Clone + Debug {}
