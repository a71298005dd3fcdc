/*
 * Shortest-path engines over the adjacency-list graph.
 * `dijkstra` answers single-source queries on non-negative graphs,
 * `floyd_warshall` computes the full distance matrix and tolerates negative edges.
 */

pub mod dijkstra;
pub mod floyd_warshall;

use thiserror::Error;

use crate::network::graph::{GraphError, Weight};

pub use dijkstra::single_source_shortest_paths;
pub use floyd_warshall::{DistanceMatrix, all_pairs_shortest_paths};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Start node {start} out of range for a graph with {node_count} nodes")]
    StartOutOfRange { start: usize, node_count: usize },
    #[error("Edge {from} -> {to} has negative weight {weight}, single-source search needs non-negative weights")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: Weight,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[cfg(test)]
mod tests {
    use petgraph::{
        algo::{bellman_ford, dijkstra},
        graph::NodeIndex,
        visit::EdgeRef,
    };
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::network::{
        distance::Distance,
        generator::{GraphConfig, generate_graph_with},
        graph::Graph,
    };

    fn random_graphs(seed: u64, allow_negative_weights: bool) -> Vec<Graph> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graphs = Vec::new();
        for directed in [true, false] {
            for (nodes, edges) in [(1, 0), (4, 3), (8, 16), (10, 12), (15, 60)] {
                let config = GraphConfig::new(nodes, edges, allow_negative_weights, directed);
                graphs.push(generate_graph_with(&config, &mut rng).unwrap());
            }
        }
        graphs
    }

    #[test]
    fn test_engines_agree_on_non_negative_graphs() {
        for graph in random_graphs(1, false) {
            let matrix = all_pairs_shortest_paths(&graph);
            for start in 0..graph.node_count() {
                let distance = single_source_shortest_paths(&graph, start).unwrap();
                assert_eq!(distance.as_slice(), matrix.row(start).unwrap(), "start {}", start);
            }
        }
    }

    #[test]
    fn test_apsp_diagonal_and_triangle_inequality() {
        for graph in random_graphs(2, false) {
            let matrix = all_pairs_shortest_paths(&graph);
            let n = graph.node_count();
            for i in 0..n {
                assert_eq!(matrix[(i, i)], Distance::ZERO);
                for j in 0..n {
                    for k in 0..n {
                        assert!(matrix[(i, j)] <= matrix[(i, k)] + matrix[(k, j)]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unreachable_is_never_a_placeholder() {
        for graph in random_graphs(3, false) {
            let matrix = all_pairs_shortest_paths(&graph);
            for (i, row) in matrix.rows().iter().enumerate() {
                for (j, cell) in row.iter().enumerate() {
                    // Positive weights only, so every finite off-diagonal distance is > 0
                    if i != j {
                        assert!(cell.is_infinite() || *cell > Distance::ZERO);
                    }
                }
            }
        }
    }

    #[test]
    fn test_engines_are_idempotent() {
        for graph in random_graphs(4, false) {
            let first = all_pairs_shortest_paths(&graph);
            let second = all_pairs_shortest_paths(&graph);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
            assert_eq!(
                single_source_shortest_paths(&graph, 0).unwrap(),
                single_source_shortest_paths(&graph, 0).unwrap()
            );
        }
    }

    #[test]
    fn test_dijkstra_matches_petgraph() {
        for graph in random_graphs(5, false) {
            let reference_graph = graph.to_petgraph();
            for start in 0..graph.node_count() {
                let reference = dijkstra(&reference_graph, NodeIndex::new(start), None, |e| *e.weight());
                let distance = single_source_shortest_paths(&graph, start).unwrap();
                for (node, cell) in distance.iter().enumerate() {
                    assert_eq!(cell.finite(), reference.get(&NodeIndex::new(node)).copied());
                }
            }
        }
    }

    #[test]
    fn test_floyd_warshall_matches_bellman_ford_with_negative_weights() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut checked = 0;
        for _ in 0..200 {
            let config = GraphConfig::new(8, 9, true, true);
            let graph = generate_graph_with(&config, &mut rng).unwrap();
            let matrix = all_pairs_shortest_paths(&graph);
            if matrix.has_negative_cycle() {
                continue;
            }
            checked += 1;

            let reference_graph = graph.to_petgraph().map(|_, node| *node, |_, weight| *weight as f64);
            for start in 0..graph.node_count() {
                let paths = bellman_ford(&reference_graph, NodeIndex::new(start)).unwrap();
                for (node, expected) in paths.distances.iter().enumerate() {
                    let cell = matrix[(start, node)];
                    if expected.is_infinite() {
                        assert!(cell.is_infinite());
                    } else {
                        assert_eq!(cell, Distance::Finite(*expected as i64));
                    }
                }
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_dijkstra_rejects_generated_negative_graphs() {
        let mut rng = StdRng::seed_from_u64(8);
        let config = GraphConfig::new(10, 60, true, true);
        let graph = generate_graph_with(&config, &mut rng).unwrap();
        assert!(graph.has_negative_weights());

        match single_source_shortest_paths(&graph, 0) {
            Err(PathError::NegativeWeight { from, to, weight }) => {
                assert!(weight < 0);
                assert!(graph.neighbors(from).unwrap().iter().any(|edge| edge.target == to && edge.weight == weight));
            }
            other => panic!("expected NegativeWeight, got {:?}", other),
        }
    }
}
