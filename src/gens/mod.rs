/*!
# Graph Generators

Builders for random graphs and deterministic substructures.
They provide fixtures for tests and benchmarks of the analyses in [`algo`](crate::algo).

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).directed(true)`).
3. Stream the edges via `stream()` or build a [`Graph`] directly via `generate()`.

Supported models:
- `G(n,p)`: every admissible edge is present with probability `p`, independently,
- paths, cycles and cliques over arbitrary vertex sequences.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Creates a lazy iterator over generated edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;

    /// Collects the result of [`GraphGenerator::stream`]
    fn generate_edges<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }
}
