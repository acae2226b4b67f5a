use log::{debug, trace};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::cs::error::{Error, Result};
use crate::cs::graph::adjacency_list::Graph;
use crate::cs::graph::shortest_path::{Distance, ShortestPathTree};

/// Entry in the priority queue: a tentative cost for a vertex.
#[derive(Copy, Clone, Debug)]
struct State<V, W> {
    cost: W,
    vertex: V,
}

impl<V, W: PartialOrd> PartialEq for State<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<V, W: PartialOrd> Eq for State<V, W> {}

impl<V, W: PartialOrd> PartialOrd for State<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: PartialOrd> Ord for State<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

/// Computes single-source shortest paths with Dijkstra's algorithm.
///
/// The heap does not support decrease-key, so an improved cost is pushed as
/// a new entry and the stale one is skipped when popped.
///
/// # Arguments
/// * `graph` - A graph with non-negative weights (directed or undirected)
/// * `source` - The start vertex
///
/// # Returns
/// * `Ok(tree)` - Distances and parents from `source`
/// * `Err(Error)` - If `source` is missing or a weight is negative
///
/// # Examples
/// ```
/// use algos_paths::cs::graph::{dijkstra, Distance, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge(0, 1, 4.0).unwrap();
/// graph.add_edge(0, 2, 1.0).unwrap();
/// graph.add_edge(2, 1, 2.0).unwrap();
///
/// let tree = dijkstra(&graph, &0).unwrap();
/// assert_eq!(tree.distance(&1).unwrap(), Distance::Finite(3.0));
/// assert_eq!(tree.path_to(&1).unwrap(), Some(vec![0, 2, 1]));
/// ```
///
/// # Complexity
/// * Time: O((V + E) log V)
/// * Space: O(V + E)
pub fn dijkstra<V, W>(graph: &Graph<V, W>, source: &V) -> Result<ShortestPathTree<V, W>>
where
    V: Hash + Eq + Copy + Debug,
    W: Float + Debug,
{
    if !graph.has_vertex(source) {
        return Err(Error::VertexNotFound);
    }
    if let Some((u, v, w)) = graph.edges().find(|&(_, _, w)| w < W::zero()) {
        return Err(Error::invalid_input(format!(
            "Dijkstra's algorithm requires non-negative weights, edge {:?} -> {:?} has {:?}",
            u, v, w
        )));
    }
    debug!(
        "dijkstra: {} vertices, source {:?}",
        graph.vertex_count(),
        source
    );

    let mut dist: HashMap<V, W> = HashMap::from([(*source, W::zero())]);
    let mut parents: HashMap<V, V> = HashMap::new();
    let mut settled = HashSet::new();
    let mut heap = BinaryHeap::new();
    heap.push(State {
        cost: W::zero(),
        vertex: *source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if dist.get(&vertex).is_some_and(|&best| cost > best) || !settled.insert(vertex) {
            continue;
        }
        for (neighbor, weight) in graph.neighbors(&vertex)? {
            if settled.contains(neighbor) {
                continue;
            }
            let candidate = cost + weight;
            if dist.get(neighbor).map_or(true, |&best| candidate < best) {
                trace!("dijkstra: relax {:?} -> {:?}", vertex, neighbor);
                dist.insert(*neighbor, candidate);
                parents.insert(*neighbor, vertex);
                heap.push(State {
                    cost: candidate,
                    vertex: *neighbor,
                });
            }
        }
    }

    let distances = dist
        .into_iter()
        .map(|(v, d)| (v, Distance::Finite(d)))
        .collect();
    Ok(ShortestPathTree::from_parts(
        *source,
        graph.vertices().copied().collect(),
        distances,
        parents,
    ))
}
