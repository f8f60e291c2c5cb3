//! graphwalk finds paths between two vertices of an undirected graph using
//! breadth-first or depth-first search.
//!
//! ```
//! use graphwalk::prelude::*;
//!
//! let mut search = BreadthFirstSearch::new(vec![(0, 1), (1, 2), (2, 3), (0, 3)]);
//! search.set_start(0);
//! search.set_end(3);
//! assert!(search.process()?);
//! assert_eq!(search.result(), vec![&0, &3]);
//! # Ok::<(), graphwalk::GraphError>(())
//! ```

pub mod graph;
pub mod node;
pub mod search;
pub mod types;

pub mod prelude {
    //! Convenient re-exports of commonly used types
    pub use crate::graph::{Edge, EdgeList, Graph, PathReport};
    pub use crate::node::{Node, NodeId, NodeState};
    pub use crate::search::{
        BreadthFirstSearch, DepthFirstSearch, PathSearch, SearchConfig, SearchConfigBuilder,
        SearchKind,
    };
    pub use crate::types::{GraphError, GraphResult, Vertex};
}

// Re-export main types
pub use prelude::*;
