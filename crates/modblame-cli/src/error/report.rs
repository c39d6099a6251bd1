//! Miette report conversion for CLI errors.

use miette::Report;

use super::{CliError, SourceError};

/// Convert a [`CliError`] into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Ingest(e) => miette::miette!(
            "{}\n\nHint: Input must be the output of `go mod graph`, one \"<module> <dependency>\" pair per line",
            e
        ),
        CliError::Source(SourceError::Failed {
            program,
            status,
            stderr,
        }) if stderr.contains("go.mod") => miette::miette!(
            "`{} mod graph` failed ({}):\n{}\n\nHint: Run modblame from inside a Go module, or pass --input with a saved edge list",
            program.display(),
            status,
            stderr
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_report_has_hint() {
        let err = CliError::Ingest(modblame_graph::IngestError::MissingSeparator {
            line_number: 1,
            line: "oops".to_string(),
        });
        let report = cli_error_to_miette(err).to_string();
        assert!(report.contains("parsing line 1"));
        assert!(report.contains("go mod graph"));
    }

    #[test]
    fn test_other_errors_keep_message() {
        let report = cli_error_to_miette(CliError::Custom("boom".to_string()));
        assert_eq!(report.to_string(), "boom");
    }
}
