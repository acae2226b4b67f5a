//! Single-source shortest paths on the sample twelve-vertex digraph, with
//! and without negative cycles.

use algos_paths::graph::{bellman_ford, bfs, dijkstra, Edge, Graph, ShortestPathTree};
use algos_paths::Result;
use std::fmt::{Debug, Display};

const SOURCE: usize = 1;

const NO_NEGATIVE_CYCLES: [(usize, usize, f64); 17] = [
    (0, 1, 1.0),
    (1, 2, 8.0),
    (1, 3, 4.0),
    (1, 4, 1.0),
    (2, 5, 2.0),
    (3, 5, 2.0),
    (4, 3, 2.0),
    (4, 4, 3.0),
    (4, 6, 6.0),
    (5, 2, 1.0),
    (5, 6, 1.0),
    (5, 7, 2.0),
    (6, 9, 1.0),
    (7, 8, 1.0),
    (7, 10, 1.0),
    (8, 6, 3.0),
    (9, 8, 2.0),
];

fn with_negative_cycles() -> Vec<Edge<f64>> {
    let mut edges: Vec<Edge<f64>> = NO_NEGATIVE_CYCLES
        .iter()
        .map(|&(u, v, w)| Edge::new(u, v, w))
        .collect();
    // 6 -> 9 -> 8 -> 6 now costs -2
    if let Some(e) = edges.iter_mut().find(|e| e.from == 9 && e.to == 8) {
        e.cost = -6.0;
    }
    edges.push(Edge::new(10, 10, -1.0));
    edges
}

fn print_tree<W: Copy + Debug + Display>(title: &str, tree: &ShortestPathTree<usize, W>) -> Result<()> {
    println!("{}", title);
    for report in tree.reports()? {
        println!("{}", report);
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut graph = Graph::new();
    for v in 0..12 {
        graph.add_vertex(v);
    }
    for &(u, v, w) in &NO_NEGATIVE_CYCLES {
        graph.add_edge(u, v, w)?;
    }

    print_tree("Dijkstra", &dijkstra(&graph, &SOURCE)?)?;
    print_tree("Breadth-first search (hops)", &bfs(&graph, &SOURCE)?)?;
    print_tree(
        "Bellman-Ford with negative cycles",
        &bellman_ford(12, &with_negative_cycles(), SOURCE)?,
    )?;
    Ok(())
}
