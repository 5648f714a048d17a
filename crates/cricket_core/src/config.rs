//! Scoring configuration.
//!
//! Defaults mirror the scorer screens: up to 50 overs per innings, 25 feed
//! lines in scorer mode, 30 in the public view. A JSON file named by
//! `CRICKET_SCORING_CONFIG_PATH` overrides them.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "CRICKET_SCORING_CONFIG_PATH";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Ceiling for overs per innings at match creation
    #[serde(default = "default_max_overs")]
    pub max_overs: u32,
    /// Feed lines shown to the scorer
    #[serde(default = "default_feed_display_limit")]
    pub feed_display_limit: usize,
    /// Feed lines shown in the read-only public view
    #[serde(default = "default_public_feed_limit")]
    pub public_feed_limit: usize,
}

fn default_max_overs() -> u32 {
    50
}

fn default_feed_display_limit() -> usize {
    25
}

fn default_public_feed_limit() -> usize {
    30
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_overs: default_max_overs(),
            feed_display_limit: default_feed_display_limit(),
            public_feed_limit: default_public_feed_limit(),
        }
    }
}

impl ScoringConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_overs == 0 || self.max_overs > 100 {
            return Err(ConfigError::Validation(format!(
                "max_overs must be 1-100, got {}",
                self.max_overs
            )));
        }
        if self.feed_display_limit == 0 {
            return Err(ConfigError::Validation("feed_display_limit must be positive".to_string()));
        }
        if self.public_feed_limit == 0 {
            return Err(ConfigError::Validation("public_feed_limit must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration from `CRICKET_SCORING_CONFIG_PATH`, or defaults when unset.
pub fn config_from_env() -> Result<ScoringConfig, ConfigError> {
    let Ok(path) = env::var(CONFIG_PATH_ENV) else {
        return Ok(ScoringConfig::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(ScoringConfig::default());
    }

    let config = ScoringConfig::load(path).map_err(|e| match e {
        ConfigError::Io(msg) => ConfigError::Io(format!("{CONFIG_PATH_ENV}='{path}': {msg}")),
        ConfigError::Parse(msg) => ConfigError::Parse(format!("{CONFIG_PATH_ENV}='{path}': {msg}")),
        other => other,
    })?;
    tracing::debug!(path, ?config, "loaded scoring config");
    Ok(config)
}
