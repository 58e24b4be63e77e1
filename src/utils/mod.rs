/*!
# Utilities

Provides the helper structures the algorithms build on:
- [`NodeBitSet`](self::bitset::NodeBitSet): a dense set over the nodes of a graph,
- [`UnionFind`](self::union_find::UnionFind): disjoint sets for Kruskal's algorithm.

You probably do not need to interact with this module directly.
*/

pub mod bitset;
pub mod union_find;

pub use bitset::NodeBitSet;
pub use union_find::UnionFind;
