//! Command implementations for the modblame CLI.
//!
//! modblame has no subcommands; [`graph`] implements the single run from
//! configuration to rendered diagram.

pub mod graph;

pub use graph::execute;
