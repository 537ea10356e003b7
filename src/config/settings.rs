use std::{env, fmt::Display, fs, path::Path, path::PathBuf, str::FromStr, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{cooldown::VoteCooldownGate, paging::Pagination};

pub const ENV_COOLDOWN_SECS: &str = "DIRECTORY_COOLDOWN_SECS";
pub const ENV_PAGE_SIZE: &str = "DIRECTORY_PAGE_SIZE";
pub const ENV_TICK_MS: &str = "DIRECTORY_TICK_MS";
pub const ENV_DATASET: &str = "DIRECTORY_DATASET";

/// What to do with the cooldown when the vote collaborator fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionFailurePolicy {
    /// The user stays cooled down even though the vote was lost
    #[default]
    KeepCooldown,
    /// The vote slot is given back
    Refund,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub cooldown_seconds: u64,
    pub page_size: usize,
    pub tick_interval_ms: u64,
    pub dataset_path: Option<PathBuf>,
    pub submission_failure: SubmissionFailurePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: VoteCooldownGate::DEFAULT_COOLDOWN_SECS,
            page_size: Pagination::DEFAULT_PAGE_SIZE,
            tick_interval_ms: 1000,
            dataset_path: None,
            submission_failure: SubmissionFailurePolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Defaults, or the given file, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from `DIRECTORY_*` variables
    ///
    /// Unset variables are skipped; unparsable ones are logged and skipped.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = parse_override(&lookup, ENV_COOLDOWN_SECS) {
            self.cooldown_seconds = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_PAGE_SIZE) {
            self.page_size = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_TICK_MS) {
            self.tick_interval_ms = value;
        }
        if let Some(path) = lookup(ENV_DATASET) {
            info!("{ENV_DATASET} set, using dataset {path}");
            self.dataset_path = Some(PathBuf::from(path));
        }
    }

    /// How often the host advances the cooldown clock while idle
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "page_size",
                reason: "must show at least one row".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "tick source needs a non-zero interval".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_override<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T::Err: Display,
{
    let raw = lookup(key)?;
    raw.trim()
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, keeping configured value");
        })
        .ok()
}
