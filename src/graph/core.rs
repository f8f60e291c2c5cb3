use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::debug;

use super::display::PathReport;
use super::edges::{Edge, EdgeList};
use crate::node::{Node, NodeId, NodeState, Visits};
use crate::types::{GraphError, GraphResult, Vertex};

/// An undirected graph built once from an edge list, plus the traversal
/// bookkeeping shared by every search strategy.
///
/// Nodes live in an arena addressed by [`NodeId`]; a content-ordered index
/// gives logarithmic lookup and sorted iteration. Visitation state is kept in
/// a separate [`Visits`] table that each traversal resets before it starts.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,
    index: BTreeMap<T, NodeId>,
    visits: Visits,
    edge_count: usize,
    start: Option<T>,
    end: Option<T>,
    result: Vec<NodeId>,
}

impl<T: Vertex> Graph<T> {
    /// Build a graph from undirected edges.
    ///
    /// Self-loops are dropped and repeated edges collapse into one.
    pub fn new<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<T>>,
    {
        let mut graph = Self {
            nodes: Vec::new(),
            index: BTreeMap::new(),
            visits: Visits::default(),
            edge_count: 0,
            start: None,
            end: None,
            result: Vec::new(),
        };
        for (a, b) in edges {
            if a != b {
                graph.add_edge(a, b);
            }
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Graph constructed"
        );
        graph
    }

    /// Decode a JSON edge list such as `[[0, 1], [1, 2]]` and build a graph
    pub fn from_json(json: &str) -> GraphResult<Self>
    where
        T: DeserializeOwned,
    {
        Ok(Self::new(EdgeList::from_json(json)?))
    }

    fn add_edge(&mut self, a: T, b: T) {
        let from = self.add_node(a);
        let to = self.add_node(b);
        let grew = self.link(from, to);
        self.link(to, from);
        if grew {
            self.edge_count += 1;
        }
    }

    /// Insert `content` unless a node with equal content already exists
    fn add_node(&mut self, content: T) -> NodeId {
        if let Some(&id) = self.index.get(&content) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.index.insert(content.clone(), id);
        self.nodes.push(Node::new(content));
        self.visits.ensure(id);
        id
    }

    fn link(&mut self, from: NodeId, to: NodeId) -> bool {
        let position = {
            let nodes = &self.nodes;
            nodes[from.0].neighbor_position(nodes[to.0].content(), |id| nodes[id.0].content())
        };
        self.nodes[from.0].add_neighbor(position, to)
    }

    pub fn set_start(&mut self, content: T) {
        self.start = Some(content);
    }

    pub fn set_end(&mut self, content: T) {
        self.end = Some(content);
    }

    pub fn start(&self) -> Option<&T> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&T> {
        self.end.as_ref()
    }

    pub fn find_node(&self, content: &T) -> Option<NodeId> {
        self.index.get(content).copied()
    }

    pub fn contains(&self, content: &T) -> bool {
        self.index.contains_key(content)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Nodes in ascending content order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.index.values().map(move |id| &self.nodes[id.0])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbor contents of `content` in ascending order
    pub fn neighbors(&self, content: &T) -> Option<Vec<&T>> {
        let id = self.find_node(content)?;
        Some(
            self.nodes[id.0]
                .adjacency()
                .iter()
                .map(|&n| self.content(n))
                .collect(),
        )
    }

    /// Visitation state left behind by the last traversal
    pub fn state_of(&self, content: &T) -> Option<NodeState> {
        self.find_node(content).map(|id| self.visits.state(id))
    }

    /// Parent assigned to `content` by the last traversal
    pub fn parent_of(&self, content: &T) -> Option<&T> {
        let id = self.find_node(content)?;
        self.visits.parent(id).map(|parent| self.content(parent))
    }

    /// The last successfully found path, start to end inclusive
    pub fn result(&self) -> Vec<&T> {
        self.result.iter().map(|&id| self.content(id)).collect()
    }

    pub fn result_ids(&self) -> &[NodeId] {
        &self.result
    }

    pub fn clear_result(&mut self) {
        self.result.clear();
    }

    pub fn report(&self) -> PathReport<'_, T> {
        PathReport::new(self.result())
    }

    pub(crate) fn content(&self, id: NodeId) -> &T {
        self.nodes[id.0].content()
    }

    /// Resolve the configured start and end to node ids
    pub(crate) fn endpoints(&self) -> GraphResult<(NodeId, NodeId)> {
        let start = self.resolve("start", self.start.as_ref())?;
        let end = self.resolve("end", self.end.as_ref())?;
        Ok((start, end))
    }

    fn resolve(&self, role: &str, content: Option<&T>) -> GraphResult<NodeId> {
        let content = content
            .ok_or_else(|| GraphError::InvalidEndpoint(format!("{} is not set", role)))?;
        self.find_node(content).ok_or_else(|| {
            GraphError::InvalidEndpoint(format!("{} {:?} is not a vertex", role, content))
        })
    }

    pub(crate) fn reset_visits(&mut self) {
        self.visits.reset_all();
    }

    pub(crate) fn visits(&self) -> &Visits {
        &self.visits
    }

    pub(crate) fn visits_mut(&mut self) -> &mut Visits {
        &mut self.visits
    }

    /// Next undiscovered neighbor of `id`, advancing its cursor
    pub(crate) fn next_neighbor(&mut self, id: NodeId) -> Option<NodeId> {
        self.visits.next(id, self.nodes[id.0].adjacency())
    }

    /// Rebuild the result by walking parent links back from `end`.
    ///
    /// Only meaningful right after a traversal that reached `end`.
    pub(crate) fn reconstruct_path(&mut self, end: NodeId) {
        self.result.clear();
        let mut current = Some(end);
        while let Some(id) = current {
            self.result.push(id);
            current = self.visits.parent(id);
        }
        self.result.reverse();
    }
}

impl<T: Vertex> FromIterator<Edge<T>> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = Edge<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
