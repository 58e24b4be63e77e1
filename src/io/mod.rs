/*!
# Input Adapters

Converts already tokenised graph data into a [`Graph`].

## Encodings

- **Adjacency**: an `n × n` matrix of weights, where `0` means *no edge*,
  see [`from_adjacency_matrix`].
- **Incidence**: an `n × m` matrix with one column per edge, see [`from_incidence_matrix`].
- **Successors**: a list of `(vertex, successors)` pairs, see [`from_successor_list`].

All encodings are normalised into the same [`Graph`]; no algorithm ever sees the encoding a
graph was read from. Reading and tokenising raw text is left to the caller.

[`Encoding`] can be parsed from the names `adjacency`, `incidence`, `dictionary` or
`successors`; [`GraphInput`] bundles an encoding with its data.
*/

mod adjacency;
mod incidence;
mod successors;

use std::{fmt::Display, str::FromStr};

use crate::prelude::*;

pub use adjacency::*;
pub use incidence::*;
pub use successors::*;

/// Identifier for an input encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Weighted `n × n` adjacency matrix
    Adjacency,
    /// `n × m` vertex-edge incidence matrix
    Incidence,
    /// Successor list per vertex
    Successors,
}

impl FromStr for Encoding {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "adjacency" => Ok(Encoding::Adjacency),
            "incidence" => Ok(Encoding::Incidence),
            "dictionary" | "successors" => Ok(Encoding::Successors),
            _ => Err(GraphError::UnknownEncoding(s.to_string())),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Encoding::Adjacency => "adjacency",
            Encoding::Incidence => "incidence",
            Encoding::Successors => "successors",
        };
        write!(f, "{name}")
    }
}

/// Tokenised graph data in one of the supported encodings
#[derive(Debug, Clone, PartialEq)]
pub enum GraphData {
    /// Rows of an adjacency matrix
    Adjacency(Vec<Vec<Weight>>),
    /// Rows of an incidence matrix with `m` columns
    Incidence { m: usize, rows: Vec<Vec<i32>> },
    /// `(vertex, successors)` pairs
    Successors(Vec<(Node, Vec<Node>)>),
}

impl GraphData {
    /// The encoding of the data
    pub fn encoding(&self) -> Encoding {
        match self {
            GraphData::Adjacency(_) => Encoding::Adjacency,
            GraphData::Incidence { .. } => Encoding::Incidence,
            GraphData::Successors(_) => Encoding::Successors,
        }
    }
}

/// Everything an input collaborator supplies to construct a graph.
///
/// # Examples
/// ```
/// use graphcheck::{prelude::*, io::*};
///
/// let encoding: Encoding = "Dictionary".parse().unwrap();
/// assert_eq!(encoding, Encoding::Successors);
///
/// let input = GraphInput {
///     n: 3,
///     directed: true,
///     data: GraphData::Successors(vec![(0, vec![1, 2]), (2, vec![0])]),
/// };
///
/// let g = input.build().unwrap();
/// assert_eq!(g.number_of_edges(), 3);
/// assert!(g.has_edge(2, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphInput {
    pub n: NumNodes,
    pub directed: bool,
    pub data: GraphData,
}

impl GraphInput {
    /// The encoding of the contained data
    pub fn encoding(&self) -> Encoding {
        self.data.encoding()
    }

    /// Validates the data and builds the graph
    pub fn build(&self) -> Result<Graph> {
        match &self.data {
            GraphData::Adjacency(rows) => from_adjacency_matrix(self.n, self.directed, rows),
            GraphData::Incidence { m, rows } => {
                from_incidence_matrix(self.n, *m, self.directed, rows)
            }
            GraphData::Successors(entries) => {
                from_successor_list(self.n, self.directed, entries.iter().cloned())
            }
        }
    }
}

impl TryFrom<&GraphInput> for Graph {
    type Error = GraphError;

    fn try_from(input: &GraphInput) -> Result<Self> {
        input.build()
    }
}

/// Returns `DimensionMismatch` early unless a matrix has `expected` rows of `expected_cols`
/// columns each
macro_rules! check_dimensions {
    ($rows : expr, $expected : expr, $expected_cols : expr) => {
        if $rows.len() != $expected {
            return Err(GraphError::DimensionMismatch {
                what: "rows",
                expected: $expected,
                found: $rows.len(),
            });
        }

        if let Some(row) = $rows.iter().find(|row| row.len() != $expected_cols) {
            return Err(GraphError::DimensionMismatch {
                what: "columns",
                expected: $expected_cols,
                found: row.len(),
            });
        }
    };
}

use check_dimensions;
