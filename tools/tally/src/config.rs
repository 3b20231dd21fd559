//! CLI configuration
//!
//! Layered with figment, later layers win:
//! built-in defaults, then a YAML file, then `TALLY_` environment variables
//! (nested keys split on `__`, e.g. `TALLY_LOGGING__LEVEL=debug`).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tally.yaml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TALLY_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub logging: LoggingConfig,
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    pub level: String,

    /// Also write logs to this file
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_size: usize,
    /// Print the display after every key instead of once per line
    pub trace: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "tally> ".to_string(),
            history_size: 100,
            trace: false,
        }
    }
}

impl TallyConfig {
    /// Load configuration, with `path` taking the place of `tally.yaml`
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let figment = Self::figment(path)?;
        figment
            .extract()
            .context("Failed to load tally configuration")
    }

    fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                figment = figment.merge(Yaml::file(path));
            },
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    figment = figment.merge(Yaml::file(default));
                }
            },
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }
}
