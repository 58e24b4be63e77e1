//! Union-Find (Disjoint Set) data structure.
//!
//! Uses path compression and union by rank for near O(1) amortized operations.
//! Kruskal's algorithm relies on it to reject edges that would close a cycle.

use crate::node::*;

/// Union-Find data structure with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    num_components: NumNodes,
}

impl UnionFind {
    /// Create new Union-Find with n singleton sets.
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_components: n,
        }
    }

    /// Number of disjoint components.
    pub fn num_components(&self) -> NumNodes {
        self.num_components
    }

    /// Find representative of node's component with path compression.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Union two components by rank.
    ///
    /// Returns true if a merge occurred (x and y were in different components).
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let rx = self.rank[root_x as usize];
        let ry = self.rank[root_y as usize];

        if rx < ry {
            self.parent[root_x as usize] = root_y;
        } else if rx > ry {
            self.parent[root_y as usize] = root_x;
        } else {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += 1;
        }

        self.num_components -= 1;
        true
    }

    /// Check if two nodes are in the same component.
    pub fn connected(&mut self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }
}
