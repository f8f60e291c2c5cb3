use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

/// Index of a node inside its graph's arena.
///
/// Adjacency entries and parent links are `NodeId`s, so they never own or
/// outlive the nodes they point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex and its sorted, deduplicated adjacency
#[derive(Debug, Clone)]
pub struct Node<T> {
    content: T,
    adjacency: Vec<NodeId>,
}

impl<T> Node<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            adjacency: Vec::new(),
        }
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    /// Neighbor ids, ordered by neighbor content
    pub fn adjacency(&self) -> &[NodeId] {
        &self.adjacency
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Binary-search the adjacency for `content`.
    ///
    /// `content_of` resolves a neighbor id to its content; it is supplied by
    /// the owning arena. Returns `Ok` with the index of an existing entry, or
    /// `Err` with the insertion point that keeps the adjacency sorted.
    pub fn neighbor_position<'a, F>(
        &self,
        content: &T,
        content_of: F,
    ) -> std::result::Result<usize, usize>
    where
        T: Ord + 'a,
        F: Fn(NodeId) -> &'a T,
    {
        self.adjacency.binary_search_by(|&id| content_of(id).cmp(content))
    }

    /// Insert `neighbor` at the position found by [`Node::neighbor_position`].
    ///
    /// An `Ok` position means the neighbor is already present and nothing
    /// changes. Returns whether the adjacency grew.
    pub fn add_neighbor(
        &mut self,
        position: std::result::Result<usize, usize>,
        neighbor: NodeId,
    ) -> bool {
        match position {
            Ok(_) => false,
            Err(index) => {
                self.adjacency.insert(index, neighbor);
                true
            }
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.content.partial_cmp(&other.content)
    }
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.content.cmp(&other.content)
    }
}
