use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Direction};
use crate::config::ModblameConfig;
use crate::error::{ConfigError, Result};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "modblame.toml";

const ENV_PREFIX: &str = "MODBLAME_";

/// Values given explicitly on the command line.
///
/// Unset options and unset boolean flags are skipped during serialization
/// so they don't shadow lower-priority sources.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    until: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    cycles_only: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    ignore_versions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    go: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
}

impl From<&Cli> for CliOverrides {
    fn from(args: &Cli) -> Self {
        Self {
            from: args.from.clone(),
            to: args.to.clone(),
            until: args.until.clone(),
            cycles_only: args.cycles_only,
            ignore_versions: args.ignore_versions,
            input: args.input.clone(),
            output: args.output.clone(),
            go: args.go.clone(),
            direction: args.direction,
        }
    }
}

impl ModblameConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(args.config.as_deref())? {
            debug!(path = %path.display(), "loading config file");
            figment = if path.extension().is_some_and(|ext| ext == "json") {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        // MODBLAME_CYCLES_ONLY, MODBLAME_GO, ...
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }
}

/// Resolve which config file to read, if any.
///
/// An explicit path must exist; the default file is optional.
fn config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::NotFound(path.to_path_buf()).into()),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            Ok(default_path.is_file().then(|| default_path.to_path_buf()))
        }
    }
}
