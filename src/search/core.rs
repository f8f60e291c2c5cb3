use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use super::bfs::BreadthFirstSearch;
use super::config::SearchConfig;
use super::dfs::DepthFirstSearch;
use crate::graph::{Graph, PathReport};
use crate::types::{GraphError, GraphResult, Vertex};

/// Common contract of the traversal strategies.
///
/// A strategy owns its [`Graph`]; the endpoint setters and result accessors
/// are shared through the default methods, and each strategy supplies only
/// [`PathSearch::process`].
pub trait PathSearch<T: Vertex>: Debug {
    /// Run one traversal from the graph's start toward its end.
    ///
    /// Returns `Ok(true)` when the end was reached, in which case the result
    /// path has been rebuilt. `Ok(false)` means no path exists; the previous
    /// result is kept unless the config asks for it to be cleared.
    fn process(&mut self) -> GraphResult<bool>;

    /// Get the name of this strategy
    fn name(&self) -> &str;

    fn graph(&self) -> &Graph<T>;

    fn graph_mut(&mut self) -> &mut Graph<T>;

    fn config(&self) -> &SearchConfig;

    fn set_start(&mut self, content: T) {
        self.graph_mut().set_start(content);
    }

    fn set_end(&mut self, content: T) {
        self.graph_mut().set_end(content);
    }

    fn result(&self) -> Vec<&T> {
        self.graph().result()
    }

    fn clear_result(&mut self) {
        self.graph_mut().clear_result();
    }

    fn report(&self) -> PathReport<'_, T> {
        self.graph().report()
    }
}

/// Selects a traversal strategy at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    BreadthFirst,
    DepthFirst,
}

impl SearchKind {
    pub const ALL: [SearchKind; 2] = [SearchKind::BreadthFirst, SearchKind::DepthFirst];

    pub fn name(self) -> &'static str {
        match self {
            SearchKind::BreadthFirst => "breadth_first",
            SearchKind::DepthFirst => "depth_first",
        }
    }

    /// Wrap `graph` in the strategy this kind names
    pub fn build<T>(self, graph: Graph<T>, config: SearchConfig) -> Box<dyn PathSearch<T>>
    where
        T: Vertex + 'static,
    {
        match self {
            SearchKind::BreadthFirst => {
                Box::new(BreadthFirstSearch::from_graph(graph).with_config(config))
            }
            SearchKind::DepthFirst => {
                Box::new(DepthFirstSearch::from_graph(graph).with_config(config))
            }
        }
    }
}

impl Display for SearchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" | "breadth_first" => Ok(SearchKind::BreadthFirst),
            "dfs" | "depth_first" => Ok(SearchKind::DepthFirst),
            other => Err(GraphError::Parse(format!("Unknown search kind: {}", other))),
        }
    }
}
