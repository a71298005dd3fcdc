use std::ops::Index;

use serde::Serialize;
use tracing::debug;

use crate::network::{distance::Distance, graph::Graph};

/// Square matrix of shortest-path lengths, `rows[i][j]` being the distance from `i` to `j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistanceMatrix {
    rows: Vec<Vec<Distance>>,
}

impl DistanceMatrix {
    /// Zero diagonal, infinity everywhere else.
    fn unconnected(node_count: usize) -> Self {
        let rows = (0..node_count)
            .map(|i| {
                let mut row = vec![Distance::Infinite; node_count];
                row[i] = Distance::ZERO;
                row
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, source: usize, target: usize) -> Option<Distance> {
        self.rows.get(source)?.get(target).copied()
    }

    pub fn row(&self, source: usize) -> Option<&[Distance]> {
        self.rows.get(source).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<Distance>] {
        &self.rows
    }

    /// A node that reaches itself with negative length sits on a negative cycle.
    /// Distances through such cycles are meaningless.
    pub fn has_negative_cycle(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .any(|(i, row)| row[i] < Distance::ZERO)
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = Distance;

    fn index(&self, (source, target): (usize, usize)) -> &Self::Output {
        &self.rows[source][target]
    }
}

/// Shortest distances between every ordered pair of nodes.
///
/// Negative edge weights are fine as long as there is no negative cycle; check
/// `DistanceMatrix::has_negative_cycle` when the graph may contain one.
pub fn all_pairs_shortest_paths(graph: &Graph) -> DistanceMatrix {
    let node_count = graph.node_count();
    let mut matrix = DistanceMatrix::unconnected(node_count);

    // No self-loops or parallel edges, so each cell is written at most once
    for (source, target, weight) in graph.edges() {
        matrix.rows[source][target] = Distance::Finite(weight);
    }

    // k must stay outermost: after round k, paths only go through intermediates <= k
    for k in 0..node_count {
        for i in 0..node_count {
            let via_k = matrix.rows[i][k];
            if via_k.is_infinite() {
                continue;
            }
            for j in 0..node_count {
                let candidate = via_k + matrix.rows[k][j];
                if candidate < matrix.rows[i][j] {
                    matrix.rows[i][j] = candidate;
                }
            }
        }
    }

    debug!(nodes = node_count, "all-pairs shortest paths computed");
    matrix
}
