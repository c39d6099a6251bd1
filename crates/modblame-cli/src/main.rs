//! modblame - render Go module dependency graphs as Mermaid flowcharts.
//!
//! Parses arguments, initializes logging and runs the command. The diagram
//! goes to stdout; logs and errors go to stderr.

use clap::Parser;
use miette::Result;
use modblame_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);

    // Convert CLI errors to miette diagnostics for reporting
    commands::execute(args).map_err(error::cli_error_to_miette)
}
