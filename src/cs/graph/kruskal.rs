use log::debug;
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::cs::error::Result;
use crate::cs::graph::edge::{validate_edges, Edge};
use crate::cs::graph::spanning_tree::MinimumSpanningTree;

/// Disjoint-set (union-find) over the elements `0..n`.
///
/// Unions attach the smaller set under the larger one and `find` compresses
/// the path it walks, so both run in amortized near-constant time.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Initializes a union-find for `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets left.
    pub fn num_components(&self) -> usize {
        self.components
    }

    /// Finds the representative (root) of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut at = x;
        while at != root {
            let next = self.parent[at];
            self.parent[at] = root;
            at = next;
        }
        root
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the set containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Unites the sets containing `x` and `y`.
    /// Returns `true` if a union actually occurred (i.e., they were disjoint).
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        let (small, large) = if self.size[rx] < self.size[ry] {
            (rx, ry)
        } else {
            (ry, rx)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.components -= 1;
        true
    }
}

/// Kruskal's algorithm: minimum spanning tree of an undirected, weighted
/// edge list.
///
/// Edges are taken cheapest first (ties keep their input order) and skipped
/// when both endpoints are already connected.
///
/// # Arguments
/// * `vertices` - Number of vertices; vertices are `0..vertices`
/// * `edges` - Undirected edges; parallel edges and negative costs are fine
///
/// # Returns
/// * `Ok(Some(tree))` - The minimum spanning tree
/// * `Ok(None)` - If the graph is disconnected
/// * `Err(Error)` - If an endpoint is out of range or a cost is not finite
///
/// # Examples
/// ```
/// use algos_paths::cs::graph::{kruskal, Edge};
///
/// let edges = [Edge::new(0, 1, 4.0), Edge::new(1, 2, 1.0), Edge::new(0, 2, 2.0)];
/// let tree = kruskal(3, &edges).unwrap().unwrap();
/// assert_eq!(tree.cost, 3.0);
/// ```
///
/// # Complexity
/// * Time: O(E log E)
/// * Space: O(V + E)
pub fn kruskal<W>(vertices: usize, edges: &[Edge<W>]) -> Result<Option<MinimumSpanningTree<usize, W>>>
where
    W: Float + Debug,
{
    validate_edges(vertices, edges)?;
    debug!("kruskal: {} vertices, {} edges", vertices, edges.len());

    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));

    let mut components = UnionFind::new(vertices);
    let mut tree = MinimumSpanningTree::new();
    for edge in &sorted {
        if components.num_components() <= 1 {
            break;
        }
        if components.union(edge.from, edge.to) {
            tree.push(edge.from, edge.to, edge.cost);
        }
    }

    if components.num_components() > 1 {
        debug!(
            "kruskal: graph is disconnected ({} components)",
            components.num_components()
        );
        return Ok(None);
    }
    Ok(Some(tree))
}
