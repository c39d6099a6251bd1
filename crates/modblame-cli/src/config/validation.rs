use crate::config::ModblameConfig;
use crate::error::{ConfigError, Result};

/// Validate a module filter coming from any config source.
///
/// The CLI rejects empty filters at parse time, but the config file and
/// environment bypass clap.
pub fn validate_filter(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(filter) if filter.trim().is_empty() => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: filter.to_string(),
            hint: "An empty filter matches every module; remove the setting instead".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

impl ModblameConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        validate_filter("from", self.from.as_deref())?;
        validate_filter("to", self.to.as_deref())?;
        validate_filter("until", self.until.as_deref())?;

        if self
            .input
            .as_deref()
            .is_some_and(|input| input.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "input".to_string(),
                value: String::new(),
                hint: "Use \"-\" to read from stdin, or leave unset to run `go mod graph`"
                    .to_string(),
            }
            .into());
        }

        if self.go.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "go".to_string(),
                value: String::new(),
                hint: "Set the path to the go executable, or leave unset to use \"go\" from PATH"
                    .to_string(),
            }
            .into());
        }

        if self.output.is_some() && self.output == self.input && !self.reads_stdin() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: self
                    .output
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                hint: "Writing the diagram over the input edge list would destroy it".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
