//! Command-line interface definition for modblame.
//!
//! modblame has a single mode of operation: read a module graph, narrow it
//! with the filter flags and print it as a Mermaid flowchart. Filters are
//! applied in a fixed order regardless of flag order on the command line:
//! `--from`, `--to`, `--until`, `--cycles-only`, `--ignore-versions`.

pub mod enums;
mod tests;
mod validation;

use std::path::PathBuf;

use clap::Parser;

pub use enums::*;
pub use validation::parse_filter;

/// modblame - find out who pulls a Go module into your build
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "modblame",
    version,
    about = "Render Go module dependency graphs as Mermaid flowcharts",
    long_about = "modblame reads the output of `go mod graph`, narrows it down to the part\n\
                  you care about and prints it as a Mermaid flowchart.\n\n\
                  Typical questions it answers: who depends on golang.org/x/text (--to),\n\
                  what does my direct dependency drag in (--from), and where are the\n\
                  module cycles (--cycles-only)."
)]
pub struct Cli {
    /// Keep only modules reachable from modules matching this substring
    ///
    /// Every module whose path contains the string and that has dependencies
    /// becomes a starting point; everything they depend on, transitively, is
    /// kept.
    #[arg(long, value_name = "MODULE", value_parser = parse_filter)]
    pub from: Option<String>,

    /// Keep only modules that lead to modules matching this substring
    ///
    /// The answer to "why is this module in my build?": every chain of
    /// dependencies ending in a matching module is kept.
    #[arg(long, value_name = "MODULE", value_parser = parse_filter)]
    pub to: Option<String>,

    /// Walk down from the root modules and stop at modules matching this substring
    ///
    /// Matching modules are kept as endpoints but not expanded further.
    /// Branches that never reach a matching module are dropped.
    #[arg(long, value_name = "MODULE", value_parser = parse_filter)]
    pub until: Option<String>,

    /// Keep only modules that take part in a dependency cycle
    #[arg(long)]
    pub cycles_only: bool,

    /// Merge all versions of a module into a single node
    ///
    /// Strips everything from the first '@' of each module path, so
    /// golang.org/x/text@v0.3.0 and golang.org/x/text@v0.3.7 become one node.
    #[arg(long)]
    pub ignore_versions: bool,

    /// Write the diagram to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read edges from FILE instead of running `go mod graph` ("-" for stdin)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to the go executable
    #[arg(long, value_name = "PATH")]
    pub go: Option<PathBuf>,

    /// Flowchart layout direction
    #[arg(long, value_enum, value_name = "DIR")]
    pub direction: Option<Direction>,

    /// Configuration file (defaults to ./modblame.toml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Shows per-pass details such as how many nodes cycle isolation peeled.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Progress messages are written to stderr; use this when only the
    /// diagram on stdout matters.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
