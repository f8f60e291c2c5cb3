use std::fmt::{Display, Formatter, Result};

use super::core::Graph;
use crate::types::Vertex;

/// Printable summary of a found path.
///
/// Renders `Path length: N` (vertex count), then `Path: v1 v2 ... vk` when
/// the path is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport<'a, T> {
    path: Vec<&'a T>,
}

impl<'a, T> PathReport<'a, T> {
    pub fn new(path: Vec<&'a T>) -> Self {
        Self { path }
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn path(&self) -> &[&'a T] {
        &self.path
    }
}

impl<T: Display> Display for PathReport<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Path length: {}", self.path.len())?;
        if let Some((first, rest)) = self.path.split_first() {
            write!(f, "Path: {}", first)?;
            for vertex in rest {
                write!(f, " {}", vertex)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Adjacency dump: one `Node:` line per vertex, one `To:` line per neighbor
impl<T: Vertex + Display> Display for Graph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for node in self.nodes() {
            writeln!(f, "Node: {}", node.content())?;
            for &neighbor in node.adjacency() {
                writeln!(f, "    To: {}", self.content(neighbor))?;
            }
        }
        Ok(())
    }
}
