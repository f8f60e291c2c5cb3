use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

/// Configuration for a search strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Clear the previous result when a traversal finds no path
    pub clear_on_failure: bool,
    /// Maximum node expansions per traversal, unbounded when `None`
    pub max_expansions: Option<usize>,
}

/// Builder for search configuration
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn clear_on_failure(mut self, clear: bool) -> Self {
        self.config.clear_on_failure = clear;
        self
    }

    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.config.max_expansions = Some(limit);
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

/// Counts expansions against [`SearchConfig::max_expansions`]
#[derive(Debug)]
pub(crate) struct ExpansionBudget {
    limit: Option<usize>,
    spent: usize,
}

impl ExpansionBudget {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Self {
            limit: config.max_expansions,
            spent: 0,
        }
    }

    pub(crate) fn spend(&mut self) -> GraphResult<()> {
        match self.limit {
            Some(limit) if self.spent >= limit => Err(GraphError::ExpansionLimit(limit)),
            _ => {
                self.spent += 1;
                Ok(())
            }
        }
    }

    pub(crate) fn spent(&self) -> usize {
        self.spent
    }
}
