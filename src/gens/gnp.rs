use itertools::Itertools;
use tracing::trace;

use super::*;

/// `G(n,p)` graphs contain every admissible edge with probability `p`, independently of each other.
///
/// Admissible edges are
/// - all ordered pairs `(u, v)` for directed graphs,
/// - all pairs `(u, v)` with `u < v` for acyclic directed graphs,
/// - all pairs `(u, v)` with `u <= v` for undirected graphs.
///
/// Self-loops are only generated if enabled via [`Gnp::loops`] (never for acyclic graphs).
/// Edge weights are [`DEFAULT_WEIGHT`] unless a range is set via [`Gnp::weights`].
///
/// # Examples
/// ```
/// use graphcheck::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
/// let g = Gnp::new().nodes(10).prob(0.3).directed(true).acyclic(true).generate(rng);
///
/// assert_eq!(g.number_of_nodes(), 10);
/// assert!(g.edges().iter().all(|e| e.source() < e.target()));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
    directed: bool,
    acyclic: bool,
    loops: bool,
    weights: Option<(Weight, Weight)>,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.0,
            directed: false,
            acyclic: false,
            loops: false,
            weights: None,
        }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "invalid probability {prob}");
        self.p = prob;
        self
    }

    /// Updates `p` such that every vertex has expected out-degree `deg`
    /// ** Panics if `n` is not yet set or `deg > n` **
    pub fn avg_deg(self, deg: f64) -> Self {
        assert!(self.n > 0, "set the number of nodes first");
        self.prob(deg / self.n as f64)
    }

    /// Sets whether the generated graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Restricts directed graphs to edges `(u, v)` with `u < v`, yielding a DAG.
    /// Has no effect on undirected graphs.
    pub fn acyclic(mut self, acyclic: bool) -> Self {
        self.acyclic = acyclic;
        self
    }

    /// Sets whether self-loops are generated
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// Draws every edge weight uniformly from `[low, high)`
    /// ** Panics if `low >= high` **
    pub fn weights(mut self, low: Weight, high: Weight) -> Self {
        assert!(low < high, "empty weight range");
        self.weights = Some((low, high));
        self
    }

    /// Generates a [`Graph`] with the configured parameters
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Graph {
        let edges = self.generate_edges(rng);
        trace!(n = self.n, m = edges.len(), p = self.p, "generated G(n,p) edges");

        let weighted = edges
            .into_iter()
            .map(|e| match self.weights {
                Some((low, high)) => e.with_weight(rng.random_range(low..high)),
                None => e.into(),
            })
            .collect_vec();

        Graph::derived(self.n, self.directed, weighted)
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let Self {
            n,
            p,
            directed,
            acyclic,
            loops,
            ..
        } = *self;

        (0..n)
            .cartesian_product(0..n)
            .map(|(u, v)| Edge(u, v))
            .filter(move |e| {
                if e.is_loop() {
                    loops && !(directed && acyclic)
                } else if directed && !acyclic {
                    true
                } else {
                    e.is_normalized()
                }
            })
            .filter(move |_| rng.random_bool(p))
    }
}
