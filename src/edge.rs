use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// Whether the edge is directed is decided by the graph storing it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Edge weights. Only spanning trees and longest paths look at them.
pub type Weight = f64;

/// Weight of every edge for which none was given
pub const DEFAULT_WEIGHT: Weight = 1.0;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge { edge: self, weight }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An [`Edge`] together with its weight.
///
/// Every edge of a [`Graph`](crate::repr::Graph) carries a weight; edges constructed without
/// one receive [`DEFAULT_WEIGHT`].
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    pub edge: Edge,
    pub weight: Weight,
}

impl WeightedEdge {
    /// Creates a weighted edge `(u, v)`
    pub fn new(u: Node, v: Node, weight: Weight) -> Self {
        Self {
            edge: Edge(u, v),
            weight,
        }
    }

    /// Source (or first endpoint) of the edge
    pub fn source(&self) -> Node {
        self.edge.0
    }

    /// Target (or second endpoint) of the edge
    pub fn target(&self) -> Node {
        self.edge.1
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.edge.0, self.edge.1, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(edge: Edge) -> Self {
        edge.with_weight(DEFAULT_WEIGHT)
    }
}

impl From<&Edge> for WeightedEdge {
    fn from(edge: &Edge) -> Self {
        edge.with_weight(DEFAULT_WEIGHT)
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        Edge::from(value).into()
    }
}

impl From<&(Node, Node)> for WeightedEdge {
    fn from(value: &(Node, Node)) -> Self {
        Edge::from(value).into()
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_reverse() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(!Edge(3, 1).is_normalized());
        assert_eq!(Edge(3, 1).reverse(), Edge(1, 3));
        assert!(Edge(2, 2).is_loop());
    }

    #[test]
    fn weighted_conversions() {
        let e: WeightedEdge = (0, 1).into();
        assert_eq!(e.weight, DEFAULT_WEIGHT);

        let e: WeightedEdge = (0, 1, 2.5).into();
        assert_eq!(e.edge, Edge(0, 1));
        assert_eq!(e.weight, 2.5);
        assert_eq!(format!("{e}"), "(0,1,2.5)");
    }
}
