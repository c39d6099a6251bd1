//! Filter passes applied between ingestion and rendering.
//!
//! Passes run in a fixed order: `from`, `to`, `until`, cycle isolation,
//! version stripping. Each one logs what it is about to do and the size of
//! the graph it produced.

use modblame_graph::{Graph, retain_cycles};
use tracing::info;

use crate::config::ModblameConfig;

/// The filter settings of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub from: Option<String>,
    pub to: Option<String>,
    pub until: Option<String>,
    pub cycles_only: bool,
    pub ignore_versions: bool,
}

impl From<&ModblameConfig> for Filters {
    fn from(config: &ModblameConfig) -> Self {
        Self {
            from: config.from.clone(),
            to: config.to.clone(),
            until: config.until.clone(),
            cycles_only: config.cycles_only,
            ignore_versions: config.ignore_versions,
        }
    }
}

/// Run every enabled pass over `graph`.
pub fn apply(mut graph: Graph<String>, filters: &Filters) -> Graph<String> {
    if let Some(from) = &filters.from {
        info!("Filtering to modules depended on by modules matching {from:?}...");
        graph = graph.subgraph_from(|m| m.contains(from.as_str()));
        info!("Graph now contains {}", graph.statistics());
    }

    if let Some(to) = &filters.to {
        info!("Filtering to modules that depend on modules matching {to:?}...");
        graph = graph.subgraph_to(|m| m.contains(to.as_str()));
        info!("Graph now contains {}", graph.statistics());
    }

    if let Some(until) = &filters.until {
        info!("Filtering to dependency chains ending at modules matching {until:?}...");
        graph = graph.subgraph_until(|m| m.contains(until.as_str()));
        info!("Graph now contains {}", graph.statistics());
    }

    if filters.cycles_only {
        info!("Removing modules that are not part of a cycle...");
        retain_cycles(&mut graph);
        info!("Graph now contains {}", graph.statistics());
    }

    if filters.ignore_versions {
        info!("Merging module versions...");
        graph = graph.map(|m| strip_version(m).to_string());
        info!("Graph now contains {}", graph.statistics());
    }

    graph
}

/// Module path without its `@version` suffix.
pub fn strip_version(module: &str) -> &str {
    module.split_once('@').map_or(module, |(path, _)| path)
}
