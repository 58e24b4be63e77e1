//! # Incidence Matrix
//!
//! Row `u` of the matrix has one entry per edge: nonzero iff `u` is an endpoint of that edge.
//!
//! - Directed: a column holds `-1` at the tail and `+1` at the head.
//! - Undirected: a column holds `1` at both endpoints, or a single `2` for a self-loop.
//!
//! All edges receive [`DEFAULT_WEIGHT`].

use super::*;

/// Builds a graph from an `n × m` incidence matrix.
///
/// Fails with
/// - [`GraphError::DimensionMismatch`] if the matrix is not `n × m`,
/// - [`GraphError::MalformedIncidenceColumn`] if a column does not describe exactly one edge.
///
/// # Examples
/// ```
/// use graphcheck::{prelude::*, io::*};
///
/// // edges (0, 1) and (2, 1)
/// let rows = vec![vec![-1, 0], vec![1, 1], vec![0, -1]];
/// let g = from_incidence_matrix(3, 2, true, &rows).unwrap();
///
/// assert_eq!(g.in_degree_of(1), 2);
/// ```
pub fn from_incidence_matrix<R>(n: NumNodes, m: usize, directed: bool, rows: &[R]) -> Result<Graph>
where
    R: AsRef<[i32]>,
{
    let rows = rows.iter().map(AsRef::as_ref).collect::<Vec<_>>();
    check_dimensions!(rows, n as usize, m);

    let mut builder = GraphBuilder::new(n).directed(directed);
    for column in 0..m {
        let mut entries = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row[column] != 0)
            .map(|(u, row)| (u as Node, row[column]));

        let edge = match (entries.next(), entries.next(), entries.next()) {
            (Some((u, a)), Some((v, b)), None) if directed => match (a, b) {
                (-1, 1) => Some(Edge(u, v)),
                (1, -1) => Some(Edge(v, u)),
                _ => None,
            },
            (Some((u, 1)), Some((v, 1)), None) if !directed => Some(Edge(u, v)),
            (Some((u, 2)), None, None) if !directed => Some(Edge(u, u)),
            _ => None,
        };

        match edge {
            Some(e) => builder.add_edge(e),
            None => return Err(GraphError::MalformedIncidenceColumn { column }),
        }
    }

    builder.build()
}
