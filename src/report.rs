/*!
Console formatting for graphs and distance tables.
Every function returns a `String` so the driver decides where it goes.
*/

use std::fmt::Display;

use serde::Serialize;

use crate::{
    network::{distance::Distance, graph::Graph},
    pathfinding::DistanceMatrix,
};

fn bracketed<T: Display>(items: &[T]) -> String {
    let inner = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

/// One line per node: `from node 00: [[target, weight], ...]`.
pub fn format_graph(graph: &Graph) -> String {
    (0..graph.node_count())
        .map(|node| {
            let edges = graph.neighbors(node).unwrap_or_default();
            format!("from node {:02}: {}", node, bracketed(edges))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_distances(distances: &[Distance]) -> String {
    bracketed(distances)
}

/// One line per source node: `from node 00: [0, 5, inf]`.
pub fn format_matrix(matrix: &DistanceMatrix) -> String {
    matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(node, row)| format!("from node {:02}: {}", node, bracketed(row)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub graph: &'a Graph,
    pub start_node: usize,
    /// `None` when the single-source run was rejected.
    pub single_source: Option<&'a [Distance]>,
    pub all_pairs: &'a DistanceMatrix,
}

impl JsonReport<'_> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
