use tracing::debug;

use crate::{
    network::{distance::Distance, graph::Graph},
    pathfinding::PathError,
};

/// Shortest distances from `start` to every node, `Distance::Infinite` for unreachable nodes.
///
/// Linear-scan Dijkstra: each round settles the unsettled node with the smallest tentative
/// distance, and on ties the lowest index wins. Runs in O(N^2 + E).
///
/// Graphs with negative weights are rejected with `PathError::NegativeWeight`; greedy settling
/// is only sound for non-negative edges. Use `all_pairs_shortest_paths` for those graphs.
pub fn single_source_shortest_paths(graph: &Graph, start: usize) -> Result<Vec<Distance>, PathError> {
    let node_count = graph.node_count();
    if start >= node_count {
        return Err(PathError::StartOutOfRange { start, node_count });
    }
    if let Some((source, target, weight)) = graph.edges().find(|&(_, _, weight)| weight < 0) {
        return Err(PathError::NegativeWeight { from: source, to: target, weight });
    }

    let mut distance = vec![Distance::Infinite; node_count];
    distance[start] = Distance::ZERO;
    let mut settled = vec![false; node_count];

    while let Some(closest) = closest_unsettled(&distance, &settled) {
        settled[closest] = true;

        for edge in graph.neighbors(closest)? {
            if settled[edge.target] {
                continue;
            }
            let candidate = distance[closest] + edge.weight;
            if candidate < distance[edge.target] {
                distance[edge.target] = candidate;
            }
        }
    }

    debug!(
        start,
        reachable = distance.iter().filter(|d| d.is_finite()).count(),
        "single-source shortest paths computed"
    );
    Ok(distance)
}

/// Scans unsettled nodes in ascending order. Only a strictly smaller distance replaces the
/// current pick, so the lowest index wins ties. `None` once every unsettled node is at infinity.
fn closest_unsettled(distance: &[Distance], settled: &[bool]) -> Option<usize> {
    let mut closest: Option<usize> = None;
    for node in 0..distance.len() {
        if settled[node] || distance[node].is_infinite() {
            continue;
        }
        if closest.is_none_or(|current| distance[node] < distance[current]) {
            closest = Some(node);
        }
    }
    closest
}
