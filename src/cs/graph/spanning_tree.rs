use num_traits::Float;
use std::fmt::{self, Display};

/// A minimum spanning tree: its total cost and the edges chosen, in the
/// order the algorithm picked them.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimumSpanningTree<V, W> {
    pub cost: W,
    /// `(from, to, weight)` triples.
    pub edges: Vec<(V, V, W)>,
}

impl<V, W: Float> MinimumSpanningTree<V, W> {
    pub(crate) fn new() -> Self {
        Self {
            cost: W::zero(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, from: V, to: V, weight: W) {
        self.cost = self.cost + weight;
        self.edges.push((from, to, weight));
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<V: Display, W: Display> Display for MinimumSpanningTree<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MST cost: {}", self.cost)?;
        for (from, to, weight) in &self.edges {
            write!(f, "\n({}, {}) -> {}", from, to, weight)?;
        }
        Ok(())
    }
}
