//! modblame CLI - find out who pulls a Go module into your build.
//!
//! This crate wraps the `modblame-graph` engine with everything a command
//! line tool needs: argument parsing, layered configuration, running
//! `go mod graph`, logging and Mermaid output.
//!
//! # Architecture
//!
//! - [`cli`] - clap definitions
//! - [`config`] - figment-based configuration loading and validation
//! - [`source`] - edge sources (`go mod graph`, files, stdin)
//! - [`pipeline`] - filter passes over the graph
//! - [`render`] - Mermaid flowchart writer
//! - [`commands`] - the run itself
//! - [`error`] - error types with actionable messages
//! - [`logger`] - tracing setup (stderr only)
//!
//! # Example
//!
//! ```rust
//! use modblame_cli::pipeline::{Filters, apply};
//! use modblame_cli::render::MermaidRenderer;
//! use modblame_graph::{EmissionOrder, Graph};
//!
//! let graph: Graph<String> = [("app", "lib@v1"), ("lib@v1", "util@v2")]
//!     .into_iter()
//!     .map(|(a, b)| (a.to_string(), b.to_string()))
//!     .collect();
//!
//! let filters = Filters {
//!     ignore_versions: true,
//!     ..Filters::default()
//! };
//! let order = EmissionOrder::from_graph(apply(graph, &filters));
//! let diagram = MermaidRenderer::default().render_to_string(&order);
//! assert!(diagram.contains("[\"util\"]"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod render;
pub mod source;

pub use error::{CliError, ConfigError, Result, ResultExt, SourceError};
