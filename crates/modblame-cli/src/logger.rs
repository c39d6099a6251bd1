//! Logging infrastructure for the modblame CLI.
//!
//! Progress messages ("Reading dependency graph...", per-filter statistics)
//! are emitted through `tracing` and written to **stderr**, so stdout carries
//! nothing but the rendered diagram and can be piped safely.
//!
//! # Verbosity
//!
//! - `--verbose`: debug level for modblame crates
//! - `--quiet`: errors only
//! - otherwise `RUST_LOG`, falling back to info level
//!
//! # Example
//!
//! ```rust,no_run
//! use modblame_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Reading dependency graph...");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "modblame=debug,modblame_cli=debug,modblame_graph=debug";
const QUIET_FILTER: &str = "modblame=error,modblame_cli=error,modblame_graph=error";
const DEFAULT_FILTER: &str = "modblame=info,modblame_cli=info,modblame_graph=info";

/// Initialize the tracing subscriber.
///
/// Must be called once, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable ANSI colours
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the logger with a custom filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Pick the filter for the given verbosity flags.
///
/// `verbose` wins over `quiet`; without either flag `RUST_LOG` is honoured.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if coloured log output should be enabled.
///
/// `NO_COLOR` disables colours, `FORCE_COLOR` forces them, otherwise the
/// decision follows the capabilities of the stderr terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_filters_parse() {
        let _verbose = EnvFilter::new(VERBOSE_FILTER);
        let _quiet = EnvFilter::new(QUIET_FILTER);
        let _default = EnvFilter::new(DEFAULT_FILTER);
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        let filter = filter_for(true, true).to_string();
        assert!(filter.contains("modblame_graph=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = filter_for(false, true).to_string();
        assert!(filter.contains("modblame_cli=error"));
    }

    #[test]
    #[serial]
    fn test_no_color_disables_colors() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_colors());
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_force_color_enables_colors() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_colors());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
