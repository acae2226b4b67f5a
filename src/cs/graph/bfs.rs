use log::debug;
use num_traits::Float;
use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::cs::error::{Error, Result};
use crate::cs::graph::adjacency_list::Graph;
use crate::cs::graph::shortest_path::{Distance, ShortestPathTree};

/// Breadth-first search from `source`, ignoring edge weights.
///
/// Distances are hop counts. Neighbors are visited in insertion order, so
/// the parent of each vertex is the first one that discovered it.
///
/// # Errors
/// * `VertexNotFound` if `source` is not in the graph
pub fn bfs<V, W>(graph: &Graph<V, W>, source: &V) -> Result<ShortestPathTree<V, usize>>
where
    V: Hash + Eq + Copy + Debug,
    W: Float + Debug,
{
    if !graph.has_vertex(source) {
        return Err(Error::VertexNotFound);
    }

    let mut hops: HashMap<V, Distance<usize>> = HashMap::from([(*source, Distance::Finite(0))]);
    let mut parents = HashMap::new();
    let mut queue = VecDeque::from([(*source, 0)]);

    while let Some((vertex, depth)) = queue.pop_front() {
        for (neighbor, _) in graph.neighbors(&vertex)? {
            if hops.contains_key(neighbor) {
                continue;
            }
            hops.insert(*neighbor, Distance::Finite(depth + 1));
            parents.insert(*neighbor, vertex);
            queue.push_back((*neighbor, depth + 1));
        }
    }

    debug!(
        "bfs: reached {} of {} vertices from {:?}",
        hops.len(),
        graph.vertex_count(),
        source
    );
    Ok(ShortestPathTree::from_parts(
        *source,
        graph.vertices().copied().collect(),
        hops,
        parents,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_counts_and_paths() {
        let mut graph: Graph<usize, f64> = Graph::new();
        for v in 0..12 {
            graph.add_vertex(v);
        }
        for &(u, v) in &[
            (0, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 5),
            (3, 5),
            (4, 3),
            (4, 4),
            (4, 6),
            (5, 2),
            (5, 6),
            (5, 7),
            (6, 9),
            (7, 8),
            (7, 10),
            (8, 6),
            (9, 8),
        ] {
            graph.add_edge(u, v, 1.0).unwrap();
        }

        let tree = bfs(&graph, &1).unwrap();
        let expected = [
            None,
            Some(0),
            Some(1),
            Some(1),
            Some(1),
            Some(2),
            Some(2),
            Some(3),
            Some(4),
            Some(3),
            Some(4),
            None,
        ];
        for (v, hops) in expected.iter().enumerate() {
            let want = hops.map_or(Distance::Unreachable, Distance::Finite);
            assert_eq!(tree.distance(&v).unwrap(), want, "vertex {}", v);
        }
        assert_eq!(tree.path_to(&8).unwrap(), Some(vec![1, 2, 5, 7, 8]));
        assert_eq!(tree.path_to(&10).unwrap(), Some(vec![1, 2, 5, 7, 10]));
        assert_eq!(tree.path_to(&0).unwrap(), None);
        assert_eq!(
            tree.report(&9).unwrap().to_string(),
            "From 1 to 9: [   3] [1 -> 4 -> 6 -> 9]"
        );
    }

    #[test]
    fn test_weights_are_ignored() {
        let mut graph = Graph::new_undirected();
        graph.add_edge('a', 'b', 100.0).unwrap();
        graph.add_edge('a', 'c', 1.0).unwrap();
        graph.add_edge('c', 'b', 1.0).unwrap();
        let tree = bfs(&graph, &'a').unwrap();
        assert_eq!(tree.distance(&'b').unwrap(), Distance::Finite(1));
        assert_eq!(tree.path_to(&'b').unwrap(), Some(vec!['a', 'b']));
    }

    #[test]
    fn test_missing_source() {
        let graph: Graph<i32, f64> = Graph::new();
        assert!(matches!(bfs(&graph, &0), Err(Error::VertexNotFound)));
    }
}
