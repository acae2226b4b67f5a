use num_traits::Float;
use std::fmt::Debug;

use crate::cs::error::{Error, Result};

/// Weighted edge between two dense vertex indices.
///
/// Bellman–Ford reads it as the arc `from -> to`; Kruskal treats it as
/// undirected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub cost: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, cost: W) -> Self {
        Self { from, to, cost }
    }
}

/// Checks that every endpoint is below `vertices` and every cost is finite.
pub(crate) fn validate_edges<W: Float + Debug>(vertices: usize, edges: &[Edge<W>]) -> Result<()> {
    for edge in edges {
        Error::check_vertex(edge.from, vertices)?;
        Error::check_vertex(edge.to, vertices)?;
        if !edge.cost.is_finite() {
            return Err(Error::invalid_input(format!(
                "edge {} -> {} has non-finite cost {:?}",
                edge.from, edge.to, edge.cost
            )));
        }
    }
    Ok(())
}
