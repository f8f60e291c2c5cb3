mod bfs;
mod config;
mod core;
mod dfs;

pub use bfs::BreadthFirstSearch;
pub use config::{SearchConfig, SearchConfigBuilder};
pub use self::core::{PathSearch, SearchKind};
pub use dfs::DepthFirstSearch;
