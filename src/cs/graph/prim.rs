use log::debug;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::cs::error::{Error, Result};
use crate::cs::graph::adjacency_list::Graph;
use crate::cs::graph::spanning_tree::MinimumSpanningTree;

/// Entry in the priority queue for Prim's algorithm
#[derive(Copy, Clone, Debug)]
struct Crossing<V, W> {
    vertex: V,
    cost: W,
    parent: V,
}

impl<V: Eq, W: PartialOrd> Eq for Crossing<V, W> {}

impl<V: Eq, W: PartialOrd> PartialEq for Crossing<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.cost == other.cost
    }
}

impl<V: Eq, W: PartialOrd> PartialOrd for Crossing<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Eq, W: PartialOrd> Ord for Crossing<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

/// Computes the minimum spanning tree (MST) of an undirected graph using
/// Prim's algorithm with a lazy priority queue of crossing edges.
///
/// # Arguments
/// * `graph` - The undirected graph to find the MST in
/// * `start` - The vertex the tree grows from
///
/// # Returns
/// * `Ok(Some(tree))` - The MST, edges listed in the order they were added
/// * `Ok(None)` - If some vertex cannot be reached from `start`
/// * `Err(Error)` - If the graph is directed or `start` is not found
///
/// # Examples
/// ```
/// use algos_paths::cs::graph::{prim, Graph};
///
/// let mut graph = Graph::new_undirected();
/// graph.add_edge(0, 1, 4.0).unwrap();
/// graph.add_edge(0, 2, 2.0).unwrap();
/// graph.add_edge(1, 2, 1.0).unwrap();
///
/// let tree = prim(&graph, &0).unwrap().unwrap();
/// assert_eq!(tree.cost, 3.0);
/// assert_eq!(tree.edges, vec![(0, 2, 2.0), (2, 1, 1.0)]);
/// ```
///
/// # Complexity
/// * Time: O(E log E)
/// * Space: O(V + E)
pub fn prim<V, W>(graph: &Graph<V, W>, start: &V) -> Result<Option<MinimumSpanningTree<V, W>>>
where
    V: Hash + Eq + Copy + Debug,
    W: Float + Debug,
{
    if graph.is_directed() {
        return Err(Error::invalid_input(
            "Prim's algorithm requires an undirected graph",
        ));
    }
    if !graph.has_vertex(start) {
        return Err(Error::VertexNotFound);
    }
    debug!(
        "prim: {} vertices, {} edges, start {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        start
    );

    let target = graph.vertex_count() - 1;
    let mut tree = MinimumSpanningTree::new();
    let mut visited = HashSet::from([*start]);
    let mut heap = BinaryHeap::new();
    for (neighbor, weight) in graph.neighbors(start)? {
        heap.push(Crossing {
            vertex: *neighbor,
            cost: weight,
            parent: *start,
        });
    }

    while tree.len() < target {
        let Some(Crossing {
            vertex,
            cost,
            parent,
        }) = heap.pop()
        else {
            break;
        };
        if !visited.insert(vertex) {
            continue;
        }
        tree.push(parent, vertex, cost);

        for (neighbor, weight) in graph.neighbors(&vertex)? {
            if !visited.contains(neighbor) {
                heap.push(Crossing {
                    vertex: *neighbor,
                    cost: weight,
                    parent: vertex,
                });
            }
        }
    }

    if tree.len() < target {
        debug!(
            "prim: only {} of {} vertices reachable from {:?}",
            visited.len(),
            graph.vertex_count(),
            start
        );
        return Ok(None);
    }
    Ok(Some(tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(edges: &[(usize, usize, f64)]) -> Graph<usize, f64> {
        let mut graph = Graph::new_undirected();
        for &(u, v, w) in edges {
            graph.add_edge(u, v, w).unwrap();
        }
        graph
    }

    #[test]
    fn test_prim_simple_mst() {
        let graph = undirected(&[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
        let tree = prim(&graph, &0).unwrap().unwrap();
        assert_eq!(tree.cost, 3.0);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_prim_eight_vertex_graph() {
        // resources/graph_weighted_1
        let graph = undirected(&[
            (0, 1, 10.0),
            (0, 2, 1.0),
            (0, 3, 4.0),
            (1, 2, 3.0),
            (1, 4, 0.0),
            (2, 3, 2.0),
            (2, 5, 8.0),
            (3, 5, 2.0),
            (3, 6, 7.0),
            (4, 5, 1.0),
            (4, 7, 8.0),
            (5, 6, 6.0),
            (5, 7, 9.0),
            (6, 7, 12.0),
        ]);
        let tree = prim(&graph, &0).unwrap().unwrap();
        assert_eq!(tree.cost, 20.0);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.edges[0], (0, 2, 1.0));
    }

    #[test]
    fn test_prim_matches_kruskal_cost() {
        // resources/graph_weighted_2
        let graph = undirected(&[
            (0, 1, 5.0),
            (1, 2, 4.0),
            (2, 9, 2.0),
            (0, 4, 1.0),
            (0, 3, 4.0),
            (1, 3, 2.0),
            (2, 7, 4.0),
            (2, 8, 1.0),
            (9, 8, 0.0),
            (4, 5, 1.0),
            (5, 6, 7.0),
            (6, 8, 4.0),
            (4, 3, 2.0),
            (5, 3, 5.0),
            (3, 6, 11.0),
            (6, 7, 1.0),
            (3, 7, 2.0),
            (7, 8, 6.0),
        ]);
        let tree = prim(&graph, &0).unwrap().unwrap();
        assert_eq!(tree.cost, 14.0);
        assert_eq!(tree.len(), 9);
    }

    #[test]
    fn test_prim_directed_graph() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1.0).unwrap();

        assert!(matches!(
            prim(&graph, &0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_prim_disconnected_graph() {
        let mut graph = undirected(&[(0, 1, 1.0)]);
        graph.add_vertex(2);
        assert_eq!(prim(&graph, &0).unwrap(), None);
    }

    #[test]
    fn test_prim_negative_weights() {
        let graph = undirected(&[(0, 1, -1.0), (1, 2, 3.0), (0, 2, 2.0)]);
        let tree = prim(&graph, &0).unwrap().unwrap();
        assert_eq!(tree.cost, 1.0);
    }

    #[test]
    fn test_prim_non_finite_weight_rejected() {
        let mut graph = undirected(&[(1, 2, 1.0)]);
        assert!(matches!(
            graph.add_edge(0, 1, f64::NAN),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            graph.add_edge(0, 1, f64::NEG_INFINITY),
            Err(Error::InvalidInput(_))
        ));
        // 0 was never added, so the tree only spans 1 and 2
        let tree = prim(&graph, &1).unwrap().unwrap();
        assert_eq!(tree.cost, 1.0);
        assert_eq!(tree.edges, vec![(1, 2, 1.0)]);
    }

    #[test]
    fn test_prim_vertex_not_found() {
        let graph: Graph<i32, f64> = Graph::new_undirected();
        assert!(matches!(prim(&graph, &0), Err(Error::VertexNotFound)));
    }

    #[test]
    fn test_prim_single_vertex() {
        let mut graph: Graph<i32, f64> = Graph::new_undirected();
        graph.add_vertex(4);
        let tree = prim(&graph, &4).unwrap().unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_prim_large_graph() {
        let mut graph = Graph::new_undirected();
        // Create a circular graph with 1000 vertices
        for i in 0..999 {
            graph.add_edge(i, i + 1, 1.0).unwrap();
        }
        graph.add_edge(999, 0, 1.0).unwrap();

        let tree = prim(&graph, &0).unwrap().unwrap();
        assert_eq!(tree.cost, 999.0);
        assert_eq!(tree.len(), 999);
    }
}
