/*!
Random graph generation.

Edges are placed by rejection sampling: draw an ordered (start, end) pair, reject it if it is a
self-loop or already used, otherwise attach a random weight. Each placement has an attempt
budget so dense requests fail with `GenerationError::DidNotConverge` instead of spinning forever.
*/

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::network::graph::{Graph, GraphError, Weight};

/// Weights drawn when negative weights are disabled.
pub const POSITIVE_WEIGHTS: RangeInclusive<Weight> = 1..=20;
/// Weights drawn when negative weights are enabled.
pub const SIGNED_WEIGHTS: RangeInclusive<Weight> = -20..=20;

/// Attempts per edge are `ATTEMPT_FACTOR * N * N` unless configured otherwise.
const ATTEMPT_FACTOR: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Impossible to generate a simple graph with {node_count} nodes and {edge_count} edges (at most {max_edges})")]
    Infeasible {
        node_count: usize,
        edge_count: usize,
        max_edges: usize,
    },
    #[error("A graph needs at least one node")]
    NoNodes,
    #[error("Edge placement did not converge after {attempts} attempts ({placed} of {requested} edges placed)")]
    DidNotConverge {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parameters for a random graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub node_count: usize,
    /// Logical edges; an undirected edge counts once.
    pub edge_count: usize,
    pub allow_negative_weights: bool,
    pub directed: bool,
    /// Draws allowed for a single edge before giving up. `None` means `64 * N * N`.
    pub max_attempts_per_edge: Option<usize>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_count: 8,
            edge_count: 16,
            allow_negative_weights: false,
            directed: true,
            max_attempts_per_edge: None,
        }
    }
}

impl GraphConfig {
    pub fn new(node_count: usize, edge_count: usize, allow_negative_weights: bool, directed: bool) -> Self {
        Self {
            node_count,
            edge_count,
            allow_negative_weights,
            directed,
            max_attempts_per_edge: None,
        }
    }

    pub fn with_max_attempts_per_edge(mut self, attempts: usize) -> Self {
        self.max_attempts_per_edge = Some(attempts);
        self
    }

    /// Largest edge count a simple graph with this many nodes can hold.
    pub fn max_edges(&self) -> usize {
        let arcs = self.node_count.saturating_mul(self.node_count.saturating_sub(1));
        if self.directed { arcs } else { arcs / 2 }
    }

    pub fn weight_range(&self) -> RangeInclusive<Weight> {
        if self.allow_negative_weights {
            SIGNED_WEIGHTS
        } else {
            POSITIVE_WEIGHTS
        }
    }

    fn attempts_per_edge(&self) -> usize {
        self.max_attempts_per_edge.unwrap_or_else(|| {
            ATTEMPT_FACTOR
                .saturating_mul(self.node_count)
                .saturating_mul(self.node_count)
        })
    }

    fn validate(&self) -> Result<(), GenerationError> {
        if self.node_count == 0 {
            return Err(GenerationError::NoNodes);
        }
        let max_edges = self.max_edges();
        if self.edge_count > max_edges {
            return Err(GenerationError::Infeasible {
                node_count: self.node_count,
                edge_count: self.edge_count,
                max_edges,
            });
        }
        Ok(())
    }
}

/// Generates a random graph using the thread-local RNG.
pub fn generate_graph(config: &GraphConfig) -> Result<Graph, GenerationError> {
    generate_graph_with(config, &mut rand::rng())
}

/// Generates a random graph drawing from `rng`.
pub fn generate_graph_with<R: Rng>(
    config: &GraphConfig,
    rng: &mut R,
) -> Result<Graph, GenerationError> {
    config.validate()?;

    let node_count = config.node_count;
    let weights = config.weight_range();
    let budget = config.attempts_per_edge();
    let mut graph = Graph::new(node_count, config.directed);
    let mut total_attempts = 0usize;

    for placed in 0..config.edge_count {
        let mut attempts = 0usize;
        let (start, end) = loop {
            if attempts == budget {
                warn!(placed, requested = config.edge_count, attempts, "edge placement did not converge");
                return Err(GenerationError::DidNotConverge {
                    placed,
                    requested: config.edge_count,
                    attempts,
                });
            }
            attempts += 1;

            let start = rng.random_range(0..node_count);
            let end = rng.random_range(0..node_count);
            if start != end && !graph.has_edge(start, end) {
                break (start, end);
            }
        };
        total_attempts += attempts;

        let weight = rng.random_range(weights.clone());
        graph.add_edge(start, end, weight)?;
    }

    debug!(
        nodes = node_count,
        edges = graph.edge_count(),
        directed = config.directed,
        attempts = total_attempts,
        "generated random graph"
    );
    Ok(graph)
}
