//! Configuration loading for the console runner
//!
//! Supports an optional JSON file plus environment overrides:
//! - `multiplier`: simulated seconds per real second
//! - `origin`: start-up origin (`YYYY-MM-DD HH:MM:SS`), default today 06:00:00
//! - `start_running`: whether the clock runs from start-up
//! - `prompt`: console prompt

use crate::session::DEFAULT_PROMPT;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use simtime_clock::{DEFAULT_MULTIPLIER, SimulatedClock, TimeScale};
use simtime_core::{TimePoint, default_origin, parse_time_point};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Environment variable overriding [`RunnerConfig::multiplier`]
pub const MULTIPLIER_ENV: &str = "SIMTIME_MULTIPLIER";

/// Root configuration for the console runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Simulated seconds that pass per real second
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,

    /// Start-up origin; today's date at 06:00:00 when absent
    #[serde(default)]
    pub origin: Option<String>,

    /// Whether the clock is running at start-up
    #[serde(default = "default_start_running")]
    pub start_running: bool,

    /// Console prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_multiplier() -> u32 {
    DEFAULT_MULTIPLIER
}

fn default_start_running() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            multiplier: default_multiplier(),
            origin: None,
            start_running: default_start_running(),
            prompt: default_prompt(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid multiplier '{0}': expected an integer between 1 and 1000")]
    InvalidMultiplier(String),

    #[error("Invalid origin '{0}': expected YYYY-MM-DD HH:MM:SS")]
    InvalidOrigin(String),
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(MULTIPLIER_ENV) {
            self.multiplier = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMultiplier(raw.clone()))?;
            log::debug!("Multiplier overridden from {}: {}", MULTIPLIER_ENV, self.multiplier);
        }
        Ok(self)
    }

    /// Clock speed described by this configuration
    pub fn time_scale(&self) -> Result<TimeScale, ConfigError> {
        TimeScale::new(self.multiplier)
            .ok_or_else(|| ConfigError::InvalidMultiplier(self.multiplier.to_string()))
    }

    /// Start-up origin, falling back to `today` at the default origin hour
    pub fn origin(&self, today: NaiveDate) -> Result<TimePoint, ConfigError> {
        match &self.origin {
            Some(text) => {
                parse_time_point(text).map_err(|_| ConfigError::InvalidOrigin(text.clone()))
            }
            None => Ok(default_origin(today)),
        }
    }

    /// Build the start-up clock
    pub fn build_clock(&self) -> Result<Arc<SimulatedClock>, ConfigError> {
        let scale = self.time_scale()?;
        let origin = self.origin(Local::now().date_naive())?;

        Ok(if self.start_running {
            SimulatedClock::running(origin, scale)
        } else {
            SimulatedClock::new(origin, scale)
        })
    }
}
