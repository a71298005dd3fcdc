/*!
Driver configuration.

Everything the binary needs is carried in one `AppConfig` value, read from an optional JSON file.
Missing fields fall back to the defaults: 8 nodes, 16 directed edges, positive weights, start node 0.

```json
{
    "graph": { "node_count": 12, "edge_count": 30, "allow_negative_weights": true, "directed": false },
    "start_node": 3,
    "print_dot": true
}
```
*/

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::generator::GraphConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub graph: GraphConfig,
    /// Source node for the single-source run.
    pub start_node: usize,
    /// Print the graph as Graphviz DOT for an external renderer.
    pub print_dot: bool,
    /// Print the graph and both distance tables as JSON instead of plain text.
    pub print_json: bool,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            start_node: 0,
            print_dot: false,
            print_json: false,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the config from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_json(&fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
