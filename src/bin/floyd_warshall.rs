//! Prints every shortest path from one source for a few sample graphs.

use algos_paths::graph::{floyd_warshall, AdjacencyMatrix};
use algos_paths::Result;

struct Example {
    vertices: usize,
    source: usize,
    edges: &'static [(usize, usize, f64)],
}

const EXAMPLES: [Example; 5] = [
    // https://www.youtube.com/watch?v=pSqmAO-m7Lk, graph example 2
    Example {
        vertices: 6,
        source: 0,
        edges: &[
            (0, 1, 5.0),
            (0, 2, 1.0),
            (1, 2, 2.0),
            (1, 3, 3.0),
            (1, 4, 20.0),
            (2, 1, 3.0),
            (2, 4, 12.0),
            (3, 2, 3.0),
            (3, 4, 2.0),
            (3, 5, 6.0),
            (4, 5, 1.0),
        ],
    },
    // https://www.youtube.com/watch?v=lyw4FaxrwHg, graph example 1
    Example {
        vertices: 7,
        source: 0,
        edges: &[
            (0, 1, 4.0),
            (0, 6, 2.0),
            (1, 1, -1.0),
            (1, 2, 3.0),
            (2, 3, 3.0),
            (2, 4, 1.0),
            (3, 5, -2.0),
            (4, 5, 2.0),
            (6, 4, 2.0),
        ],
    },
    // same video, graph example 2
    Example {
        vertices: 10,
        source: 0,
        edges: &[
            (0, 1, 5.0),
            (1, 2, 20.0),
            (1, 5, 30.0),
            (1, 6, 60.0),
            (2, 3, 10.0),
            (2, 4, 75.0),
            (3, 2, -15.0),
            (4, 9, 100.0),
            (5, 4, 25.0),
            (5, 6, 5.0),
            (5, 8, 50.0),
            (6, 7, -50.0),
            (7, 8, -10.0),
        ],
    },
    // same video, graph example 3
    Example {
        vertices: 9,
        source: 0,
        edges: &[
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 4, 1.0),
            (4, 3, -3.0),
            (3, 2, 1.0),
            (1, 5, 4.0),
            (1, 6, 4.0),
            (5, 6, 5.0),
            (6, 7, 4.0),
            (5, 7, 3.0),
        ],
    },
    // two negative cycles: 6 -> 9 -> 8 -> 6 and the self-loop on 10
    Example {
        vertices: 12,
        source: 1,
        edges: &[
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
            (9, 8, -6.0),
            (10, 10, -1.0),
        ],
    },
];

fn main() -> Result<()> {
    for (n, example) in EXAMPLES.iter().enumerate() {
        println!("Example {}", n + 1);
        let matrix = AdjacencyMatrix::from_edges(example.vertices, example.edges)?;
        let result = floyd_warshall(&matrix);
        for report in result.reports_from(example.source)? {
            println!("{}", report);
        }
    }
    Ok(())
}
