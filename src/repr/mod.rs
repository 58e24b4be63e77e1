/*!
# Graph Representations

[`Graph`] is the only owned representation: an immutable adjacency structure that also keeps
edge weights and a bit-matrix for constant-time edge queries.
[`Reversed`] is a borrowed view of any directed adjacency structure with all edges flipped.
*/

mod graph;
mod reversed;

pub use graph::*;
pub use reversed::*;
