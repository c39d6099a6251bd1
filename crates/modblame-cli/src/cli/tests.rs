#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_filter;
    use crate::cli::{Cli, Direction};
    use clap::{CommandFactory, Parser, ValueEnum};
    use std::path::PathBuf;

    #[test]
    fn test_parse_filter_valid() {
        assert_eq!(
            parse_filter("golang.org/x/text"),
            Ok("golang.org/x/text".to_string())
        );
        assert_eq!(parse_filter("x/net@v0.1.0"), Ok("x/net@v0.1.0".to_string()));
        assert_eq!(parse_filter("@"), Ok("@".to_string()));
    }

    #[test]
    fn test_parse_filter_empty() {
        let err = parse_filter("").unwrap_err();
        assert_eq!(err, "Filter cannot be empty");
    }

    #[test]
    fn test_parse_filter_whitespace() {
        assert!(parse_filter(" x/text").is_err());
        assert!(parse_filter("x/text\t").is_err());
    }

    #[test]
    fn test_direction_enum_values() {
        assert_eq!(
            Direction::from_str("lr", false).unwrap(),
            Direction::Lr
        );
        assert_eq!(
            Direction::from_str("td", false).unwrap(),
            Direction::Td
        );
        assert!(Direction::from_str("diagonal", false).is_err());
        assert_eq!(Direction::default(), Direction::Lr);
        assert_eq!(Direction::Bt.as_mermaid(), "BT");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let args = Cli::try_parse_from(["modblame"]).unwrap();

        assert!(args.from.is_none());
        assert!(args.to.is_none());
        assert!(args.until.is_none());
        assert!(!args.cycles_only);
        assert!(!args.ignore_versions);
        assert!(args.output.is_none());
        assert!(args.input.is_none());
        assert!(args.direction.is_none());
    }

    #[test]
    fn test_cli_all_filters() {
        let args = Cli::try_parse_from([
            "modblame",
            "--from",
            "example.com/app",
            "--to",
            "golang.org/x/text",
            "--until",
            "x/net",
            "--cycles-only",
            "--ignore-versions",
            "-o",
            "deps.mmd",
            "--input",
            "-",
            "--direction",
            "td",
        ])
        .unwrap();

        assert_eq!(args.from.as_deref(), Some("example.com/app"));
        assert_eq!(args.to.as_deref(), Some("golang.org/x/text"));
        assert_eq!(args.until.as_deref(), Some("x/net"));
        assert!(args.cycles_only);
        assert!(args.ignore_versions);
        assert_eq!(args.output, Some(PathBuf::from("deps.mmd")));
        assert_eq!(args.input, Some(PathBuf::from("-")));
        assert_eq!(args.direction, Some(Direction::Td));
    }

    #[test]
    fn test_cli_rejects_empty_filter() {
        assert!(Cli::try_parse_from(["modblame", "--to", ""]).is_err());
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["modblame", "golang.org/x/text"]).is_err());
    }

    #[test]
    fn test_cli_verbose_quiet_conflict() {
        let result = Cli::try_parse_from(["modblame", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }
}
