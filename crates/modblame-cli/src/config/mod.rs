//! Configuration for modblame with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and a config file.
//! Priority: CLI > Environment (`MODBLAME_*`) > File (`modblame.toml`) > Defaults

mod defaults;
mod loading;
mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use crate::cli::Direction;
pub use defaults::*;
pub use loading::DEFAULT_CONFIG_FILE;

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModblameConfig {
    /// Substring selecting `subgraph_from` seeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Substring selecting `subgraph_to` targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Substring selecting `subgraph_until` stop points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,

    /// Keep only cyclic modules
    #[serde(default)]
    pub cycles_only: bool,

    /// Strip `@version` before grouping
    #[serde(default)]
    pub ignore_versions: bool,

    /// Edge list file, `-` for stdin; `go mod graph` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Diagram destination; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// go executable
    #[serde(default = "default_go")]
    pub go: PathBuf,

    #[serde(default)]
    pub direction: Direction,
}

impl Default for ModblameConfig {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            until: None,
            cycles_only: false,
            ignore_versions: false,
            input: None,
            output: None,
            go: default_go(),
            direction: Direction::default(),
        }
    }
}

impl ModblameConfig {
    /// Whether edges are read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}
