//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/extkit/extkit.toml`
//! 3. Environment variables: `EXTKIT_*` prefix, `__` between sections
//!    (e.g. `EXTKIT_HUMANIZE__ROUNDING=half_to_even`)
//!
//! Nothing in the crate loads settings implicitly; the pure functions take
//! their parameters explicitly and `Settings` only supplies them.

use std::error::Error;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{ExtError, ExtResult};
use crate::hierarchy::join_messages;
use crate::humanize::{to_file_size_with, Rounding};

pub const ENV_PREFIX: &str = "EXTKIT";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HumanizeConfig {
    /// Rounding applied to scaled byte sizes
    pub rounding: Rounding,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessagesConfig {
    /// Joins the messages of an error chain
    pub separator: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub humanize: RawHumanizeConfig,
    pub messages: RawMessagesConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawHumanizeConfig {
    pub rounding: Option<Rounding>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawMessagesConfig {
    pub separator: Option<String>,
}

/// Unified configuration for extkit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub humanize: HumanizeConfig,
    pub messages: MessagesConfig,
}

/// Get the XDG config directory for extkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "extkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("extkit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ExtResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ExtError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ExtError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ExtError {
    ExtError::Config {
        message: e.to_string(),
    }
}

/// Unset keys are `None`; a set value that does not parse is an error.
fn present<T>(result: Result<T, ConfigError>) -> ExtResult<Option<T>> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            humanize: HumanizeConfig {
                rounding: overlay.humanize.rounding.unwrap_or(self.humanize.rounding),
            },
            messages: MessagesConfig {
                separator: overlay
                    .messages
                    .separator
                    .clone()
                    .unwrap_or_else(|| self.messages.separator.clone()),
            },
        }
    }

    /// Load settings from the global config file and `EXTKIT_*` variables.
    pub fn load() -> ExtResult<Self> {
        Self::load_with(global_config_path().as_deref(), ENV_PREFIX)
    }

    /// Load settings from an explicit config file (if it exists) and
    /// environment variables with the given prefix.
    #[instrument(level = "debug")]
    pub fn load_with(config_path: Option<&Path>, env_prefix: &str) -> ExtResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file, if present
        if let Some(path) = config_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
                debug!(path = %path.display(), "merged config file");
            }
        }

        // 3. Environment variables (replace - explicit override)
        Self::apply_env_overrides(current, env_prefix)
    }

    /// Load defaults overlaid with a single TOML file, which must exist.
    pub fn from_file(path: &Path) -> ExtResult<Self> {
        let raw = load_raw_settings(path)?;
        Ok(Self::default().merge_with(&raw))
    }

    fn apply_env_overrides(mut settings: Self, prefix: &str) -> ExtResult<Self> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = present(config.get::<Rounding>("humanize.rounding"))? {
            settings.humanize.rounding = val;
        }
        if let Some(val) = present(config.get_string("messages.separator"))? {
            settings.messages.separator = val;
        }

        Ok(settings)
    }

    /// [`to_file_size_with`] using the configured rounding.
    pub fn file_size(&self, size: u64) -> String {
        to_file_size_with(size, self.humanize.rounding)
    }

    /// [`join_messages`] using the configured separator.
    pub fn messages(&self, err: &(dyn Error + 'static)) -> String {
        join_messages(err, &self.messages.separator)
    }
}
