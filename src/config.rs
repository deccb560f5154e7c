use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::heuristic::HeuristicKind;

pub const DEFAULT_NODE_COUNT: usize = 20;
pub const DEFAULT_INPUT: &str = "adjacency.txt";

/// Run settings for loading a graph and choosing a heuristic
/// Every field has a default so a config file only needs the values it changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of nodes; the input must hold at least node_count^2 numbers
    pub node_count: usize,

    /// Adjacency matrix file
    pub input: PathBuf,

    pub heuristic: HeuristicKind,

    /// Explicit coordinate file for the Manhattan heuristic.
    /// Without one, nodes are laid out on the default grid
    pub positions: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            input: PathBuf::from(DEFAULT_INPUT),
            heuristic: HeuristicKind::default(),
            positions: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(data: &str, origin: &Path) -> Result<Self> {
        toml::from_str(data).map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&data, path)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config {
            path: PathBuf::new(),
            message: e.to_string(),
        })
    }
}
