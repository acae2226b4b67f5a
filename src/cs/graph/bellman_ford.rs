use log::{debug, trace};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::cs::error::{Error, Result};
use crate::cs::graph::edge::{validate_edges, Edge};
use crate::cs::graph::shortest_path::{Distance, ShortestPathTree};

/// Computes single-source shortest paths over an edge list with the
/// Bellman–Ford algorithm.
///
/// Edge costs may be negative. Every vertex that can be reached through a
/// negative cycle (including the vertices on the cycle) gets
/// [`Distance::NegativeCycle`] and no parent.
///
/// # Arguments
/// * `vertices` - Number of vertices; vertices are `0..vertices`
/// * `edges` - Directed edges `from -> to`
/// * `source` - The start vertex
///
/// # Returns
/// * `Ok(tree)` - Distances and parents from `source`
/// * `Err(Error)` - If `source` or an edge endpoint is out of range, or a
///   cost is not finite
///
/// # Examples
/// ```
/// use algos_paths::cs::graph::{bellman_ford, Distance, Edge};
///
/// let edges = [Edge::new(0, 1, 4.0), Edge::new(1, 2, -2.0), Edge::new(0, 2, 3.0)];
/// let tree = bellman_ford(3, &edges, 0).unwrap();
/// assert_eq!(tree.distance(&2).unwrap(), Distance::Finite(2.0));
/// assert_eq!(tree.path_to(&2).unwrap(), Some(vec![0, 1, 2]));
/// ```
///
/// # Complexity
/// * Time: O(VE)
/// * Space: O(V)
pub fn bellman_ford<W>(
    vertices: usize,
    edges: &[Edge<W>],
    source: usize,
) -> Result<ShortestPathTree<usize, W>>
where
    W: Float + Debug,
{
    Error::check_vertex(source, vertices)?;
    validate_edges(vertices, edges)?;
    debug!(
        "bellman_ford: {} vertices, {} edges, source {}",
        vertices,
        edges.len(),
        source
    );

    let mut dist = vec![Distance::Unreachable; vertices];
    let mut parent: Vec<Option<usize>> = vec![None; vertices];
    dist[source] = Distance::Finite(W::zero());

    // At most V-1 rounds; a round that relaxes nothing means we are done.
    let mut relaxed = true;
    let mut round = 0;
    while relaxed && round + 1 < vertices {
        relaxed = false;
        for edge in edges {
            if let Some(candidate) = improves(&dist, edge) {
                trace!("bellman_ford: relax {} -> {}", edge.from, edge.to);
                dist[edge.to] = Distance::Finite(candidate);
                parent[edge.to] = Some(edge.from);
                relaxed = true;
            }
        }
        round += 1;
    }

    // Anything still relaxable sits on or behind a negative cycle. Repeat so
    // the marking reaches every vertex downstream of the cycle.
    let mut round = 0;
    while relaxed && round < vertices {
        relaxed = false;
        for edge in edges {
            let poisoned_source = dist[edge.from] == Distance::NegativeCycle
                && dist[edge.to] != Distance::NegativeCycle;
            if poisoned_source || improves(&dist, edge).is_some() {
                trace!("bellman_ford: {} behind a negative cycle", edge.to);
                dist[edge.to] = Distance::NegativeCycle;
                parent[edge.to] = None;
                relaxed = true;
            }
        }
        round += 1;
    }

    if dist.contains(&Distance::NegativeCycle) {
        debug!("bellman_ford: negative cycle reachable from {}", source);
    }

    let distances: HashMap<usize, Distance<W>> = dist.into_iter().enumerate().collect();
    let parents: HashMap<usize, usize> = parent
        .into_iter()
        .enumerate()
        .filter_map(|(v, p)| p.map(|p| (v, p)))
        .collect();
    Ok(ShortestPathTree::from_parts(
        source,
        (0..vertices).collect(),
        distances,
        parents,
    ))
}

/// New cost for `edge.to` if going through `edge` beats what we have.
fn improves<W: Float>(dist: &[Distance<W>], edge: &Edge<W>) -> Option<W> {
    let Distance::Finite(from) = dist[edge.from] else {
        return None;
    };
    let candidate = from + edge.cost;
    match dist[edge.to] {
        Distance::Unreachable => Some(candidate),
        Distance::Finite(current) if candidate < current => Some(candidate),
        _ => None,
    }
}
