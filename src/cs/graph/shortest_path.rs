//! Result vocabulary shared by the shortest-path algorithms.
//!
//! Distances are a sum type instead of float infinities: a vertex is either
//! reached with a finite cost, not reachable at all, or reachable only
//! through a negative cycle (cost unbounded below).

use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::cs::error::{Error, Result};

/// Shortest known distance between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
    /// The path can be made arbitrarily cheap by looping a negative cycle.
    NegativeCycle,
}

impl<W: Copy> Distance<W> {
    /// The finite cost, if any.
    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(w) => Some(w),
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// `true` for every distance except [`Distance::Unreachable`].
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Distance::Unreachable)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so that width/alignment flags apply to every variant
        match self {
            Distance::Finite(w) => f.pad(&w.to_string()),
            Distance::Unreachable => f.pad("inf"),
            Distance::NegativeCycle => f.pad("-inf"),
        }
    }
}

/// One line of shortest-path output: distance and reconstructed path
/// between a source and a target.
///
/// Renders as `From <src> to <dst>: [<dist>] [<path>]`, where the path is
/// `a -> b -> c`, `unreachable`, or `negative cycle`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathReport<V, W> {
    pub source: V,
    pub target: V,
    pub distance: Distance<W>,
    /// Present exactly when `distance` is finite.
    pub path: Option<Vec<V>>,
}

impl<V: Display, W: Display> Display for PathReport<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From {} to {}: [{:>4}] ",
            self.source, self.target, self.distance
        )?;
        match (&self.distance, &self.path) {
            (Distance::Unreachable, _) => write!(f, "[unreachable]"),
            (Distance::NegativeCycle, _) => write!(f, "[negative cycle]"),
            (Distance::Finite(_), Some(path)) => {
                write!(f, "[")?;
                for (i, v) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            (Distance::Finite(_), None) => write!(f, "[]"),
        }
    }
}

/// Single-source shortest paths: a distance and a predecessor per vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, W> {
    source: V,
    order: Vec<V>,
    distances: HashMap<V, Distance<W>>,
    parents: HashMap<V, V>,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: Hash + Eq + Copy + Debug,
    W: Copy + Debug,
{
    /// `order` fixes the vertex set and the order used by
    /// [`ShortestPathTree::reports`]. Vertices missing from `distances` are
    /// treated as unreachable; entries for vertices outside `order` are
    /// dropped.
    pub(crate) fn from_parts(
        source: V,
        order: Vec<V>,
        distances: HashMap<V, Distance<W>>,
        parents: HashMap<V, V>,
    ) -> Self {
        let distances = order
            .iter()
            .map(|v| {
                let d = distances.get(v).copied().unwrap_or(Distance::Unreachable);
                (*v, d)
            })
            .collect();
        Self {
            source,
            order,
            distances,
            parents,
        }
    }

    pub fn source(&self) -> V {
        self.source
    }

    /// Vertices in report order.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    pub fn distance(&self, target: &V) -> Result<Distance<W>> {
        self.distances
            .get(target)
            .copied()
            .ok_or(Error::VertexNotFound)
    }

    /// Immediate predecessor of `target` on its shortest path, if any.
    pub fn parent(&self, target: &V) -> Option<V> {
        self.parents.get(target).copied()
    }

    /// Rebuilds the path `source -> ... -> target` by walking parents
    /// backward. `None` unless the distance is finite.
    pub fn path_to(&self, target: &V) -> Result<Option<Vec<V>>> {
        if !self.distance(target)?.is_finite() {
            return Ok(None);
        }
        let mut path = vec![*target];
        let mut at = *target;
        while at != self.source {
            // a finite distance always has an acyclic parent chain
            if path.len() > self.order.len() {
                return Err(Error::NegativeCycle);
            }
            at = *self.parents.get(&at).ok_or(Error::VertexNotFound)?;
            path.push(at);
        }
        path.reverse();
        Ok(Some(path))
    }

    pub fn report(&self, target: &V) -> Result<PathReport<V, W>> {
        Ok(PathReport {
            source: self.source,
            target: *target,
            distance: self.distance(target)?,
            path: self.path_to(target)?,
        })
    }

    /// Reports for every vertex, in vertex order.
    pub fn reports(&self) -> Result<Vec<PathReport<V, W>>> {
        self.order.iter().map(|v| self.report(v)).collect()
    }
}
