use thiserror::Error;

use crate::{Node, NumNodes};

/// The error type of every fallible operation in this crate.
///
/// All failures are reported as one of these variants; no operation silently falls back to
/// a partial or degenerate result.
///
/// # Error Categories
///
/// ## Construction
/// - [`GraphError::InvalidEdge`] - an edge endpoint lies outside `0..n`
/// - [`GraphError::SelfLoop`] - a self-loop was given although the builder rejects them
/// - [`GraphError::DimensionMismatch`] - a matrix does not have its declared shape
/// - [`GraphError::AsymmetricMatrix`] - an undirected adjacency matrix disagrees with itself
/// - [`GraphError::MalformedIncidenceColumn`] - an incidence column does not describe one edge
/// - [`GraphError::UnknownEncoding`] - an input encoding name could not be parsed
///
/// ## Analysis
/// - [`GraphError::InvalidVertex`] - a start vertex lies outside `0..n`
/// - [`GraphError::NotUndirected`] / [`GraphError::NotDirected`] - wrong kind of graph
/// - [`GraphError::Disconnected`] - a spanning tree was requested on a disconnected graph
/// - [`GraphError::CyclicGraph`] - a DAG-only operation was requested on a cyclic graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a vertex outside of `0..n`.
    #[error("Edge ({u},{v}) has an endpoint outside of 0..{n}")]
    InvalidEdge { u: Node, v: Node, n: NumNodes },

    /// A vertex argument lies outside of `0..n`.
    #[error("Vertex {vertex} is outside of 0..{n}")]
    InvalidVertex { vertex: Node, n: NumNodes },

    /// A self-loop was supplied to a builder configured to reject them.
    #[error("Self-loop at vertex {vertex} is not permitted")]
    SelfLoop { vertex: Node },

    /// A matrix has a different number of rows or columns than declared.
    ///
    /// * `what` - which dimension was checked (e.g. `"rows"`)
    /// * `expected` - the declared size
    /// * `found` - the size actually supplied
    #[error("Dimension mismatch in {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Entries `(row, col)` and `(col, row)` of an undirected adjacency matrix are both
    /// nonzero but differ.
    #[error("Undirected adjacency matrix is asymmetric at ({row},{col})")]
    AsymmetricMatrix { row: usize, col: usize },

    /// An incidence-matrix column does not describe exactly one edge.
    #[error("Incidence column {column} does not describe a single edge")]
    MalformedIncidenceColumn { column: usize },

    /// The operation is only defined for undirected graphs.
    #[error("Operation requires an undirected graph")]
    NotUndirected,

    /// The operation is only defined for directed graphs.
    #[error("Operation requires a directed graph")]
    NotDirected,

    /// The graph consists of more than one connected component.
    #[error("Graph is not connected")]
    Disconnected,

    /// The graph contains a directed cycle.
    #[error("Graph contains a cycle")]
    CyclicGraph,

    /// The name of an input encoding was not recognized.
    #[error("Unknown graph encoding: {0}")]
    UnknownEncoding(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;
