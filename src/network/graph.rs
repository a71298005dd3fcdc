use std::fmt::Display;

use petgraph::{
    dot::Dot,
    graph::{DiGraph, NodeIndex, UnGraph},
};
use serde::Serialize;
use thiserror::Error;

/// Edge weights are plain integers; `0` is a legal weight.
pub type Weight = i64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Node {node} out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },
    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(usize),
    #[error("Edge {from} -> {to} already exists")]
    DuplicateEdge { from: usize, to: usize },
}

/// One outgoing entry in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: usize,
    pub weight: Weight,
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.target, self.weight)
    }
}

/// Weighted graph stored as an adjacency list indexed by source node.
///
/// Invariants upheld by `add_edge`:
/// - no self-loops
/// - at most one edge per (source, target)
/// - undirected graphs store every edge in both directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    directed: bool,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize, directed: bool) -> Self {
        Self {
            directed,
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Builds a graph from `(source, target, weight)` triples.
    /// For undirected graphs each triple is mirrored, so list every pair only once.
    pub fn from_edges(
        node_count: usize,
        directed: bool,
        edges: &[(usize, usize, Weight)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(node_count, directed);
        for &(source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of logical edges. An undirected edge counts once even though it is stored twice.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.arc_count()
        } else {
            self.arc_count() / 2
        }
    }

    /// Number of stored adjacency entries.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing (target, weight) pairs of `node`, in insertion order.
    pub fn neighbors(&self, node: usize) -> Result<&[Edge], GraphError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or(GraphError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
    }

    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|edges| edges.iter().any(|edge| edge.target == target))
    }

    /// Adds an edge, and its mirror when the graph is undirected.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: Weight) -> Result<(), GraphError> {
        self.check_node(source)?;
        self.check_node(target)?;
        if source == target {
            return Err(GraphError::SelfLoop(source));
        }
        // Mirrors are inserted together, so checking one direction covers both
        if self.has_edge(source, target) {
            return Err(GraphError::DuplicateEdge { from: source, to: target });
        }

        self.adjacency[source].push(Edge { target, weight });
        if !self.directed {
            self.adjacency[target].push(Edge { target: source, weight });
        }
        Ok(())
    }

    /// Iterates over every stored arc as (source, target, weight).
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(source, edges)| {
            edges.iter().map(move |edge| (source, edge.target, edge.weight))
        })
    }

    pub fn min_weight(&self) -> Option<Weight> {
        self.edges().map(|(_, _, weight)| weight).min()
    }

    pub fn has_negative_weights(&self) -> bool {
        self.min_weight().is_some_and(|weight| weight < 0)
    }

    /// Converts into a petgraph directed graph. Node weights are the node indices,
    /// undirected edges appear as two arcs.
    pub fn to_petgraph(&self) -> DiGraph<usize, Weight> {
        let mut graph = DiGraph::with_capacity(self.node_count(), self.arc_count());
        for node in 0..self.node_count() {
            graph.add_node(node);
        }
        for (source, target, weight) in self.edges() {
            graph.add_edge(NodeIndex::new(source), NodeIndex::new(target), weight);
        }
        graph
    }

    /// Graphviz DOT representation for external renderers.
    pub fn to_dot(&self) -> String {
        if self.directed {
            format!("{}", Dot::new(&self.to_petgraph()))
        } else {
            let mut graph = UnGraph::<usize, Weight>::with_capacity(self.node_count(), self.edge_count());
            for node in 0..self.node_count() {
                graph.add_node(node);
            }
            for (source, target, weight) in self.edges().filter(|(source, target, _)| source < target) {
                graph.add_edge(NodeIndex::new(source), NodeIndex::new(target), weight);
            }
            format!("{}", Dot::new(&graph))
        }
    }

    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }
}
