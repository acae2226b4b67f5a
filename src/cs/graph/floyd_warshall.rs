//! # Floyd–Warshall all-pairs shortest paths
//!
//! Computes the shortest distance between every ordered pair of vertices of a
//! dense, directed, weighted graph, together with a parent matrix for path
//! reconstruction. Negative edge weights are allowed. Pairs whose cost can be
//! driven arbitrarily low by a negative cycle are reported as
//! [`Distance::NegativeCycle`] instead of a (meaningless) number.
//!
//! The solver runs in three phases:
//!
//! 1. copy the weight matrix and point `parent[i][j]` at `i` for every edge,
//! 2. relax every pair through every intermediate vertex `k` (O(V³)),
//! 3. for every `k` with a negative self-distance, poison every pair `(i, j)`
//!    with `i -> k` and `k -> j` reachable (O(V³)).
//!
//! If only the presence of a negative cycle matters, phase 2 alone is enough:
//! look for a negative value on the diagonal
//! ([`AllPairsShortestPaths::negative_cycle_vertices`]).
//!
//! ## Example
//!
//! ```
//! use algos_paths::cs::graph::{floyd_warshall, AdjacencyMatrix, Distance};
//!
//! let mut m = AdjacencyMatrix::new(3);
//! m.set_edge(0, 1, 4.0).unwrap();
//! m.set_edge(1, 2, -1.0).unwrap();
//! m.set_edge(0, 2, 5.0).unwrap();
//!
//! let result = floyd_warshall(&m);
//! assert_eq!(result.distance(0, 2).unwrap(), Distance::Finite(3.0));
//! assert_eq!(result.path(0, 2).unwrap(), Some(vec![0, 1, 2]));
//! assert_eq!(result.distance(2, 0).unwrap(), Distance::Unreachable);
//! ```

use log::{debug, trace};
use ndarray::{Array1, Array2, ArrayViewMut1, Zip};
use num_traits::Float;
use std::fmt::Debug;

use crate::cs::error::{Error, Result};
use crate::cs::graph::shortest_path::{Distance, PathReport};

/// Dense V×V weight matrix. `weight(i, j)` is the cost of edge `i -> j`,
/// `None` when there is no such edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W> {
    weights: Array2<Option<W>>,
}

impl<W> AdjacencyMatrix<W>
where
    W: Float + Debug,
{
    /// A graph of `vertices` vertices without edges; each vertex reaches
    /// itself at cost 0.
    pub fn new(vertices: usize) -> Self {
        let weights = Array2::from_shape_fn((vertices, vertices), |(i, j)| {
            if i == j {
                Some(W::zero())
            } else {
                None
            }
        });
        Self { weights }
    }

    /// Builds a matrix from rows, `None` meaning "no edge".
    ///
    /// Fails on ragged or non-square input and on non-finite weights.
    pub fn from_rows(rows: &[Vec<Option<W>>]) -> Result<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::invalid_input(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }
        let mut matrix = Self {
            weights: Array2::from_elem((n, n), None),
        };
        for (i, row) in rows.iter().enumerate() {
            for (j, weight) in row.iter().enumerate() {
                if let Some(w) = *weight {
                    matrix.set_edge(i, j, w)?;
                }
            }
        }
        Ok(matrix)
    }

    /// Builds a matrix of `vertices` vertices from `(from, to, weight)` triples.
    /// Later duplicates overwrite earlier ones.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut matrix = Self::new(vertices);
        for &(from, to, weight) in edges {
            matrix.set_edge(from, to, weight)?;
        }
        Ok(matrix)
    }

    /// Sets the weight of edge `from -> to`. A self-loop overrides the
    /// default diagonal 0.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let n = self.vertex_count();
        Error::check_vertex(from, n)?;
        Error::check_vertex(to, n)?;
        if !weight.is_finite() {
            return Err(Error::invalid_input(format!(
                "edge {} -> {} has non-finite weight {:?}",
                from, to, weight
            )));
        }
        self.weights[[from, to]] = Some(weight);
        Ok(())
    }

    /// Removes edge `from -> to`, if present.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let n = self.vertex_count();
        Error::check_vertex(from, n)?;
        Error::check_vertex(to, n)?;
        self.weights[[from, to]] = None;
        Ok(())
    }

    pub fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.weights.get((from, to)).copied().flatten()
    }

    pub fn vertex_count(&self) -> usize {
        self.weights.nrows()
    }
}

/// Output of [`floyd_warshall`]: a distance and a parent for every ordered
/// pair of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsShortestPaths<W> {
    distances: Array2<Distance<W>>,
    /// `parents[[i, j]]` is the vertex preceding `j` on the best `i -> j` path.
    parents: Array2<Option<usize>>,
}

impl<W> AllPairsShortestPaths<W>
where
    W: Float + Debug,
{
    pub fn vertex_count(&self) -> usize {
        self.distances.nrows()
    }

    pub fn distances(&self) -> &Array2<Distance<W>> {
        &self.distances
    }

    pub fn parents(&self) -> &Array2<Option<usize>> {
        &self.parents
    }

    pub fn distance(&self, source: usize, target: usize) -> Result<Distance<W>> {
        self.check_pair(source, target)?;
        Ok(self.distances[[source, target]])
    }

    pub fn parent(&self, source: usize, target: usize) -> Result<Option<usize>> {
        self.check_pair(source, target)?;
        Ok(self.parents[[source, target]])
    }

    /// Vertices that can get back to themselves through a negative cycle.
    pub fn negative_cycle_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| self.distances[[v, v]] == Distance::NegativeCycle)
            .collect()
    }

    pub fn has_negative_cycle(&self) -> bool {
        !self.negative_cycle_vertices().is_empty()
    }

    /// Shortest path `source -> ... -> target`, rebuilt by walking the parent
    /// matrix backward from `target`. `None` unless the distance is finite.
    pub fn path(&self, source: usize, target: usize) -> Result<Option<Vec<usize>>> {
        if !self.distance(source, target)?.is_finite() {
            return Ok(None);
        }
        let mut path = vec![target];
        let mut at = target;
        while at != source {
            if path.len() > self.vertex_count() {
                return Err(Error::NegativeCycle);
            }
            at = self.parents[[source, at]].ok_or(Error::NegativeCycle)?;
            path.push(at);
        }
        path.reverse();
        Ok(Some(path))
    }

    pub fn report(&self, source: usize, target: usize) -> Result<PathReport<usize, W>> {
        Ok(PathReport {
            source,
            target,
            distance: self.distance(source, target)?,
            path: self.path(source, target)?,
        })
    }

    /// One report per destination vertex, in index order.
    pub fn reports_from(&self, source: usize) -> Result<Vec<PathReport<usize, W>>> {
        Error::check_vertex(source, self.vertex_count())?;
        (0..self.vertex_count())
            .map(|target| self.report(source, target))
            .collect()
    }

    fn check_pair(&self, source: usize, target: usize) -> Result<()> {
        let n = self.vertex_count();
        Error::check_vertex(source, n)?;
        Error::check_vertex(target, n)
    }
}

/// Computes all-pairs shortest paths with the Floyd–Warshall algorithm.
///
/// # Arguments
/// * `matrix` - The directed weight matrix; weights may be negative
///
/// # Returns
/// Distances and parents for every ordered pair. Unreachable pairs and pairs
/// affected by a negative cycle are marked in the distances, not reported as
/// errors.
///
/// # Complexity
/// * Time: O(V³)
/// * Space: O(V²)
pub fn floyd_warshall<W>(matrix: &AdjacencyMatrix<W>) -> AllPairsShortestPaths<W>
where
    W: Float + Debug + Send + Sync,
{
    let n = matrix.vertex_count();
    debug!("floyd_warshall: {} vertices", n);

    let mut dist = matrix.weights.clone();
    let mut parents = Array2::from_shape_fn((n, n), |(i, j)| dist[[i, j]].map(|_| i));
    for v in 0..n {
        // a positive self-loop never beats staying put
        dist[[v, v]] = Some(match dist[[v, v]] {
            Some(w) if w < W::zero() => w,
            _ => W::zero(),
        });
        parents[[v, v]] = Some(v);
    }

    for k in 0..n {
        relax_through(k, &mut dist, &mut parents);
    }

    let distances = propagate_negative_cycles(&dist, &mut parents);
    AllPairsShortestPaths { distances, parents }
}

/// One k-iteration: try to improve every pair `(i, j)` by routing through `k`.
///
/// Row `k` is snapshotted first so rows can be relaxed independently; with the
/// `parallel` feature they are relaxed on the rayon pool.
fn relax_through<W>(k: usize, dist: &mut Array2<Option<W>>, parents: &mut Array2<Option<usize>>)
where
    W: Float + Debug + Send + Sync,
{
    let dist_k: Array1<Option<W>> = dist.row(k).to_owned();
    let parents_k: Array1<Option<usize>> = parents.row(k).to_owned();

    let relax_row = |mut dist_i: ArrayViewMut1<Option<W>>, mut parents_i: ArrayViewMut1<Option<usize>>| {
        let Some(d_ik) = dist_i[k] else {
            return;
        };
        for (j, d_kj) in dist_k.iter().enumerate() {
            let Some(d_kj) = *d_kj else {
                continue;
            };
            let through_k = d_ik + d_kj;
            if dist_i[j].map_or(true, |d_ij| through_k < d_ij) {
                dist_i[j] = Some(through_k);
                parents_i[j] = parents_k[j];
            }
        }
    };

    let rows = Zip::from(dist.rows_mut()).and(parents.rows_mut());
    #[cfg(feature = "parallel")]
    rows.par_for_each(relax_row);
    #[cfg(not(feature = "parallel"))]
    rows.for_each(relax_row);
}

/// Turns the relaxed matrix into [`Distance`] values, poisoning every pair
/// that can route through a vertex with a negative self-distance.
fn propagate_negative_cycles<W>(
    dist: &Array2<Option<W>>,
    parents: &mut Array2<Option<usize>>,
) -> Array2<Distance<W>>
where
    W: Float + Debug,
{
    let n = dist.nrows();
    let mut distances = dist.mapv(|d| d.map_or(Distance::Unreachable, Distance::Finite));

    for k in 0..n {
        if !dist[[k, k]].is_some_and(|d| d < W::zero()) {
            continue;
        }
        debug!("floyd_warshall: vertex {} lies on a negative cycle", k);
        for i in (0..n).filter(|&i| dist[[i, k]].is_some()) {
            for j in (0..n).filter(|&j| dist[[k, j]].is_some()) {
                trace!("floyd_warshall: {} -> {} poisoned through {}", i, j, k);
                distances[[i, j]] = Distance::NegativeCycle;
                parents[[i, j]] = None;
            }
        }
    }

    distances
}
