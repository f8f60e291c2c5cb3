use tracing::{debug, trace};

use super::config::{ExpansionBudget, SearchConfig};
use super::core::PathSearch;
use crate::graph::{Edge, Graph};
use crate::types::{GraphResult, Vertex};

/// Depth-first path search.
///
/// Iterative, without a stack container: the parent links written while
/// descending double as the stack, and each node's adjacency cursor records
/// how far its children have been explored. Lower-valued neighbors are
/// tried first. The path found is not necessarily the shortest.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch<T> {
    graph: Graph<T>,
    config: SearchConfig,
}

impl<T: Vertex> DepthFirstSearch<T> {
    pub fn new<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<T>>,
    {
        Self::from_graph(Graph::new(edges))
    }

    pub fn from_graph(graph: Graph<T>) -> Self {
        Self {
            graph,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn into_graph(self) -> Graph<T> {
        self.graph
    }
}

impl<T: Vertex> PathSearch<T> for DepthFirstSearch<T> {
    #[tracing::instrument(skip_all, fields(strategy = "depth_first"))]
    fn process(&mut self) -> GraphResult<bool> {
        let (start, end) = self.graph.endpoints()?;
        self.graph.reset_visits();
        debug!(
            start = ?self.graph.content(start),
            end = ?self.graph.content(end),
            "Searching"
        );

        let mut budget = ExpansionBudget::new(&self.config);
        let mut current = start;

        loop {
            if current == end {
                self.graph.reconstruct_path(end);
                debug!(
                    expansions = budget.spent(),
                    length = self.graph.result_ids().len(),
                    "Path found"
                );
                return Ok(true);
            }

            budget.spend()?;
            match self.graph.next_neighbor(current) {
                Some(child) => {
                    trace!(
                        from = ?self.graph.content(current),
                        to = ?self.graph.content(child),
                        "Descending"
                    );
                    let visits = self.graph.visits_mut();
                    visits.set_parent(child, current);
                    visits.open(current);
                    current = child;
                }
                None => match self.graph.visits().parent(current) {
                    Some(parent) => {
                        trace!(node = ?self.graph.content(current), "Backtracking");
                        self.graph.visits_mut().close(current);
                        current = parent;
                    }
                    // Root exhausted
                    None => break,
                },
            }
        }

        debug!(expansions = budget.spent(), "No path");
        if self.config.clear_on_failure {
            self.graph.clear_result();
        }
        Ok(false)
    }

    fn name(&self) -> &str {
        "depth_first"
    }

    fn graph(&self) -> &Graph<T> {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut Graph<T> {
        &mut self.graph
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }
}
