use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::GraphResult;

/// An undirected edge between two vertex values
pub type Edge<T> = (T, T);

/// An owned list of edges, serialized as a JSON array of pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeList<T> {
    edges: Vec<Edge<T>>,
}

impl<T> EdgeList<T> {
    pub fn new(edges: Vec<Edge<T>>) -> Self {
        Self { edges }
    }

    pub fn from_json(json: &str) -> GraphResult<Self>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<T>> {
        self.edges.iter()
    }
}

impl<T> From<Vec<Edge<T>>> for EdgeList<T> {
    fn from(edges: Vec<Edge<T>>) -> Self {
        Self::new(edges)
    }
}

impl<T> FromIterator<Edge<T>> for EdgeList<T> {
    fn from_iter<I: IntoIterator<Item = Edge<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for EdgeList<T> {
    type Item = Edge<T>;
    type IntoIter = std::vec::IntoIter<Edge<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}
