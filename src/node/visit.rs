use super::core::NodeId;
use super::state::NodeState;

/// Per-node traversal record: state, parent link and adjacency cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visit {
    state: NodeState,
    parent: Option<NodeId>,
    cursor: usize,
}

impl Visit {
    pub(crate) fn state(&self) -> NodeState {
        self.state
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn open(&mut self) {
        self.state = NodeState::Open;
    }

    pub(crate) fn close(&mut self) {
        self.state = NodeState::Closed;
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }
}

/// Side table of [`Visit`] records, indexed by [`NodeId`].
///
/// Kept apart from the nodes so the arena stays purely structural. Every
/// traversal must start with [`Visits::reset_all`].
#[derive(Debug, Clone, Default)]
pub struct Visits {
    visits: Vec<Visit>,
}

impl Visits {
    pub fn with_len(len: usize) -> Self {
        Self {
            visits: vec![Visit::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Grow the table so that `id` has a record
    pub fn ensure(&mut self, id: NodeId) {
        if id.0 >= self.visits.len() {
            self.visits.resize(id.0 + 1, Visit::default());
        }
    }

    pub fn reset_all(&mut self) {
        self.visits.iter_mut().for_each(Visit::reset);
    }

    /// Record for `id`, or `None` when the id belongs to a larger graph
    pub fn visit(&self, id: NodeId) -> Option<&Visit> {
        self.visits.get(id.0)
    }

    pub(crate) fn get(&self, id: NodeId) -> &Visit {
        &self.visits[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Visit {
        &mut self.visits[id.0]
    }

    pub(crate) fn state(&self, id: NodeId) -> NodeState {
        self.get(id).state()
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent()
    }

    pub(crate) fn open(&mut self, id: NodeId) {
        self.get_mut(id).open();
    }

    pub(crate) fn close(&mut self, id: NodeId) {
        self.get_mut(id).close();
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.get_mut(id).set_parent(parent);
    }

    /// Yield the next undiscovered neighbor of `id`.
    ///
    /// Scans `adjacency` from the node's cursor, skipping neighbors that are
    /// no longer `NotFound`. The cursor ends just past the returned neighbor,
    /// or at the end of the adjacency when `None` is returned, so repeated
    /// calls on the same node resume where the previous one stopped.
    pub(crate) fn next(&mut self, id: NodeId, adjacency: &[NodeId]) -> Option<NodeId> {
        let mut cursor = self.get(id).cursor;
        while let Some(&neighbor) = adjacency.get(cursor) {
            cursor += 1;
            if self.state(neighbor) == NodeState::NotFound {
                self.get_mut(id).cursor = cursor;
                return Some(neighbor);
            }
        }
        self.get_mut(id).cursor = cursor;
        None
    }
}
