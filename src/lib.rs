/*!
`graphcheck` is a small graph analysis engine for graphs that are
- **positional** : Vertices are numbered `0` to `n - 1`
- **immutable** : A graph is built once and only queried afterwards
- **simple** : No parallel edges; self-loops are permitted unless disabled

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; a [`WeightedEdge`] additionally
carries an `f64` weight that defaults to `1.0`.

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)`.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are considered distinct.

Both are stored in the same [`Graph`](crate::repr::Graph), which keeps adjacency lists for fast
iteration and an adjacency bit-matrix for `O(1)` edge queries.

# Design

Most functionality is implemented via traits on the graph itself, making it usable without any
setup (`graph.strongly_connected_components()`). Where an algorithm can be configured, it is
provided as a struct that one alters using the *Builder* / *Setter* pattern before running it
on a graph (e.g. [`Kruskal`](crate::algo::Kruskal)).

Every fallible operation returns a [`Result`] with a [`GraphError`]. The crate emits
[`tracing`](https://docs.rs/tracing) events but installs no subscriber.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph type,
- [`algo`] includes connectivity, strongly connected components and condensation, spanning trees, longest paths, isomorphism and Eulerian circuits,
- [`io`] normalises adjacency matrices, incidence matrices and successor lists into a graph,
- [`gens`] includes random `G(n,p)` graphs and deterministic substructures such as paths/cycles/cliques,
- [`utils`] includes helper structures such as [`NodeBitSet`](crate::utils::NodeBitSet).

In most use-cases, `use graphcheck::{prelude::*, algo::*};` suffices for your needs.

```
use graphcheck::{prelude::*, algo::*};

let g = Graph::build(4, true, [(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]).unwrap();
assert_eq!(g.is_strongly_connected(), Ok(false));

let cond = g.condensation().unwrap();
assert_eq!(cond.components(), &[vec![0, 1], vec![2, 3]]);

let paths = cond.longest_paths_from(0).unwrap();
assert_eq!(paths.distance_to(cond.component_of(3)), Some(1.0));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `graphcheck::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph itself.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
