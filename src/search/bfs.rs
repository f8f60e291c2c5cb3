use std::collections::VecDeque;
use tracing::{debug, trace};

use super::config::{ExpansionBudget, SearchConfig};
use super::core::PathSearch;
use crate::graph::{Edge, Graph};
use crate::types::{GraphResult, Vertex};

/// Breadth-first path search.
///
/// Expands nodes in FIFO order, so the first time the end is dequeued its
/// parent chain is a shortest path by edge count.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch<T> {
    graph: Graph<T>,
    config: SearchConfig,
}

impl<T: Vertex> BreadthFirstSearch<T> {
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

impl<T: Vertex> PathSearch<T> for BreadthFirstSearch<T> {
    #[tracing::instrument(skip_all, fields(strategy = "breadth_first"))]
    fn process(&mut self) -> GraphResult<bool> {
        let (start, end) = self.graph.endpoints()?;
        self.graph.reset_visits();
        debug!(
            start = ?self.graph.content(start),
            end = ?self.graph.content(end),
            "Searching"
        );

        let mut budget = ExpansionBudget::new(&self.config);
        let mut frontier = VecDeque::new();
        self.graph.visits_mut().open(start);
        frontier.push_back(start);

        while let Some(current) = frontier.pop_front() {
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
            trace!(node = ?self.graph.content(current), "Expanding");
            while let Some(child) = self.graph.next_neighbor(current) {
                let visits = self.graph.visits_mut();
                visits.open(child);
                visits.set_parent(child, current);
                frontier.push_back(child);
            }
            self.graph.visits_mut().close(current);
        }

        debug!(expansions = budget.spent(), "No path");
        if self.config.clear_on_failure {
            self.graph.clear_result();
        }
        Ok(false)
    }

    fn name(&self) -> &str {
        "breadth_first"
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
