//! Parsing of line-oriented `<module> <dependency>` edge lists.
//!
//! This is the format produced by `go mod graph`: one edge per line, the
//! depending module first, separated by whitespace.

use std::io::BufRead;

use tracing::debug;

use crate::Graph;

/// Errors raised while reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A non-blank line had no separator between module and dependency.
    #[error("parsing line {line_number}: {line:?} is not of the form \"<module> <dependency>\"")]
    MissingSeparator { line_number: usize, line: String },

    /// The underlying reader failed.
    #[error("reading edge list: {0}")]
    Io(#[from] std::io::Error),
}

/// Split one line into `(module, dependency)`.
///
/// The line is trimmed and split at its first whitespace run. Returns `None`
/// when either side is missing.
pub fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let (module, dependency) = line.trim().split_once(char::is_whitespace)?;
    let dependency = dependency.trim_start();
    if dependency.is_empty() {
        return None;
    }
    Some((module, dependency))
}

/// Read every edge from `reader` into a new graph. Blank lines are skipped.
pub fn read_edges<R: BufRead>(reader: R) -> Result<Graph<String>, IngestError> {
    let mut graph = Graph::new();
    let mut lines = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some((module, dependency)) = parse_edge(&line) else {
            return Err(IngestError::MissingSeparator {
                line_number: index + 1,
                line,
            });
        };
        graph.add(module.to_string(), dependency.to_string());
        lines += 1;
    }

    debug!(
        lines,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "read edge list"
    );
    Ok(graph)
}
