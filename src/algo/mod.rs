/*!
# Graph Algorithms

This module provides the structural analyses of this crate, built on top of the query traits
in [`ops`](crate::ops). All algorithms are re-exported at the top level of this module, so you
can simply do:
```rust
use graphcheck::algo::*;
```
and gain access to traversals, connectivity, spanning trees, longest paths, isomorphism tests
and Eulerian circuits. Most of them are available as methods on the graph itself via
blanket-implemented traits; configurable variants (e.g. [`Kruskal`], [`IsomorphismMatcher`])
are plain structs.

No analysis mutates its input. Derived graphs (spanning trees, condensations, arborescences)
are returned as new [`Graph`]s.
*/

mod connectivity;
mod eulerian;
mod isomorphism;
mod longest_path;
mod spanning_tree;
mod traversal;

use crate::{prelude::*, utils::*};

pub use connectivity::*;
pub use eulerian::*;
pub use isomorphism::*;
pub use longest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
