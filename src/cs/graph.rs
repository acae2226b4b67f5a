pub mod adjacency_list;
pub mod bellman_ford;
pub mod bfs;
pub mod dijkstra;
pub mod edge;
pub mod floyd_warshall;
pub mod grid_regions;
pub mod kruskal;
pub mod prim;
pub mod shortest_path;
pub mod spanning_tree;

// Re-export graph types and algorithms
pub use adjacency_list::Graph;
pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use edge::Edge;
pub use floyd_warshall::{floyd_warshall, AdjacencyMatrix, AllPairsShortestPaths};
pub use grid_regions::largest_region;
pub use kruskal::{kruskal, UnionFind};
pub use prim::prim;
pub use shortest_path::{Distance, PathReport, ShortestPathTree};
pub use spanning_tree::MinimumSpanningTree;
