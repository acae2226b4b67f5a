use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::cs::error::{Error, Result};
use crate::cs::graph::kruskal::UnionFind;

/// Weighted graph stored as adjacency lists.
///
/// Vertices can be any `Hash + Eq + Copy` type and are kept in insertion
/// order, so iteration over [`Graph::vertices`] is deterministic. A directed
/// graph stores one arc per [`Graph::add_edge`]; an undirected graph stores
/// the arc in both directions. Adding an edge that already exists replaces
/// its weight.
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    directed: bool,
    index: HashMap<V, usize>,
    vertices: Vec<V>,
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<V, W> Default for Graph<V, W>
where
    V: Hash + Eq + Copy + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W>
where
    V: Hash + Eq + Copy + Debug,
    W: Float + Debug,
{
    /// Creates an empty directed graph.
    pub fn new() -> Self {
        Self {
            directed: true,
            index: HashMap::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates an empty undirected graph.
    pub fn new_undirected() -> Self {
        Self {
            directed: false,
            ..Self::new()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds `vertex` if it is not present yet and returns its dense index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex, idx);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Adds the edge `from -> to` (and `to -> from` when undirected),
    /// creating missing endpoints.
    ///
    /// # Errors
    /// * `InvalidInput` if `weight` is NaN or infinite; the graph is left
    ///   unchanged
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if !weight.is_finite() {
            return Err(Error::invalid_input(format!(
                "edge {:?} -> {:?} has non-finite weight {:?}",
                from, to, weight
            )));
        }
        let u = self.add_vertex(from);
        let v = self.add_vertex(to);
        Self::upsert_arc(&mut self.adjacency[u], v, weight);
        if !self.directed && u != v {
            Self::upsert_arc(&mut self.adjacency[v], u, weight);
        }
        Ok(())
    }

    fn upsert_arc(arcs: &mut Vec<(usize, W)>, to: usize, weight: W) {
        match arcs.iter_mut().find(|(target, _)| *target == to) {
            Some(arc) => arc.1 = weight,
            None => arcs.push((to, weight)),
        }
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Weight of the arc `from -> to`, if present.
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        let u = *self.index.get(from)?;
        let v = *self.index.get(to)?;
        self.adjacency[u]
            .iter()
            .find(|(target, _)| *target == v)
            .map(|&(_, w)| w)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Outgoing arcs of `vertex` as `(neighbor, weight)` pairs.
    pub fn neighbors(&self, vertex: &V) -> Result<impl Iterator<Item = (&V, W)>> {
        let u = *self.index.get(vertex).ok_or(Error::VertexNotFound)?;
        Ok(self.adjacency[u]
            .iter()
            .map(move |&(v, w)| (&self.vertices[v], w)))
    }

    /// All edges as `(from, to, weight)`. Undirected edges are yielded once.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> {
        let directed = self.directed;
        self.adjacency.iter().enumerate().flat_map(move |(u, arcs)| {
            arcs.iter()
                .filter(move |&&(v, _)| directed || u <= v)
                .map(move |&(v, w)| (&self.vertices[u], &self.vertices[v], w))
        })
    }

    /// Returns `true` when every vertex is connected to every other one,
    /// ignoring arc directions. The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let mut components = UnionFind::new(self.vertices.len());
        for (u, arcs) in self.adjacency.iter().enumerate() {
            for &(v, _) in arcs {
                components.union(u, v);
            }
        }
        components.num_components() <= 1
    }
}
