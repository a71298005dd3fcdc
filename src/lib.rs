/*!
Random weighted graphs and two shortest-path engines over them.

- `network`: adjacency-list graph, extended-integer distances, random generation
- `pathfinding`: linear-scan Dijkstra (single source) and Floyd-Warshall (all pairs)
- `config` and `report`: configuration and console output used by the binary
*/

pub mod config;
pub mod network;
pub mod pathfinding;
pub mod report;
