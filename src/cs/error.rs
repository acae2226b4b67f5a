
/// Errors reported by the graph, dynamic programming and string routines.
///
/// Unreachable vertices and negative cycles found while solving are *values*
/// in the results (see [`Distance`](crate::cs::graph::Distance)), not errors.
/// The variants here describe malformed input or queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input violates a precondition (ragged matrix, non-finite weight, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A vertex was looked up in a graph that does not contain it.
    #[error("vertex not found in graph")]
    VertexNotFound,

    /// A dense vertex index is outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// The operation has no meaningful answer because of a negative cycle.
    #[error("graph contains a negative cycle")]
    NegativeCycle,
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count,
            })
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
