//! Configuration loading for sportscast.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. Project config (`sportscast.toml` in cwd)
//! 3. Defaults (lowest priority)
//!
//! All configuration is optional. The engine runs with sensible defaults
//! when no config exists.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::commentary::CommentaryStyle;
use crate::engine::leaderboard::DEFAULT_RECENT_LIMIT;
use crate::error::{Result, SportscastError};
use crate::event::EventType;

/// Name of the project config file.
pub const CONFIG_FILE_NAME: &str = "sportscast.toml";

/// Default tracked metric names.
pub const DEFAULT_METRICS: &[&str] = &["star", "fork", "pull_request", "commit"];

/// Main configuration struct for sportscast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Tracked metric names (the subset of event types that accumulate).
    pub metrics: Vec<String>,
    /// Explicit overall-ranking weights per metric name. Metrics absent
    /// from the table keep the uniform share.
    pub weights: HashMap<String, f64>,
    /// Capacity of the recent-events buffer.
    pub recent_events_limit: usize,
    /// Commentary configuration.
    pub commentary: CommentaryConfig,
}

/// Commentary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CommentaryConfig {
    /// Commentary style: "enthusiastic", "professional", or "dramatic".
    pub style: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metrics: DEFAULT_METRICS.iter().map(|s| s.to_string()).collect(),
            weights: HashMap::new(),
            recent_events_limit: DEFAULT_RECENT_LIMIT,
            commentary: CommentaryConfig::default(),
        }
    }
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        Self {
            style: CommentaryStyle::default().as_str().to_string(),
        }
    }
}

impl Config {
    /// Load configuration with the full precedence chain, relative to the
    /// current working directory.
    pub fn load() -> Self {
        match env::current_dir() {
            Ok(cwd) => Self::load_from_cwd(&cwd),
            Err(_) => {
                let mut config = Config::default();
                config.apply_env_overrides();
                config
            }
        }
    }

    /// Load configuration with a specific working directory.
    pub fn load_from_cwd(cwd: &Path) -> Self {
        let mut config = Self::load_from_file(&cwd.join(CONFIG_FILE_NAME)).unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    /// Load config from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| SportscastError::storage(path, e))?;
        toml::from_str(&content).map_err(|e| SportscastError::config(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // SPORTSCAST_METRICS: comma-separated metric names
        if let Ok(val) = env::var("SPORTSCAST_METRICS") {
            let names: Vec<String> = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();

            let all_valid = !names.is_empty()
                && names.iter().all(|n| n.parse::<EventType>().is_ok());
            if all_valid {
                self.metrics = names;
            } else {
                tracing::warn!(
                    value = %val,
                    "invalid SPORTSCAST_METRICS, keeping configured metrics"
                );
            }
        }

        // SPORTSCAST_RECENT_LIMIT
        if let Ok(val) = env::var("SPORTSCAST_RECENT_LIMIT") {
            match val.parse::<usize>() {
                Ok(n) if n >= 1 => self.recent_events_limit = n,
                _ => tracing::warn!(
                    value = %val,
                    "invalid SPORTSCAST_RECENT_LIMIT, keeping {}",
                    self.recent_events_limit
                ),
            }
        }

        // SPORTSCAST_STYLE
        if let Ok(val) = env::var("SPORTSCAST_STYLE") {
            if val.parse::<CommentaryStyle>().is_ok() {
                self.commentary.style = val;
            } else {
                tracing::warn!(
                    value = %val,
                    "invalid SPORTSCAST_STYLE, keeping '{}'",
                    self.commentary.style
                );
            }
        }
    }

    /// Parse the tracked metric names into event types.
    ///
    /// Fails on unknown names or an empty metric set.
    pub fn metric_types(&self) -> Result<Vec<EventType>> {
        if self.metrics.is_empty() {
            return Err(SportscastError::config("metric set must not be empty"));
        }
        self.metrics
            .iter()
            .map(|name| name.parse::<EventType>())
            .collect::<Result<Vec<_>>>()
            .map_err(|e| SportscastError::config(e.to_string()))
    }

    /// Parse and validate the explicit weight table.
    ///
    /// Weight names must be tracked metrics; weights must be finite and
    /// non-negative.
    pub fn weight_table(&self) -> Result<HashMap<EventType, f64>> {
        let tracked = self.metric_types()?;
        let mut table = HashMap::new();

        for (name, weight) in &self.weights {
            let metric: EventType = name
                .parse()
                .map_err(|_| SportscastError::config(format!("unknown weight metric: {name}")))?;
            if !tracked.contains(&metric) {
                return Err(SportscastError::config(format!(
                    "weight for untracked metric: {name}"
                )));
            }
            if !weight.is_finite() || *weight < 0.0 {
                return Err(SportscastError::config(format!(
                    "invalid weight for {name}: {weight}"
                )));
            }
            table.insert(metric, *weight);
        }

        Ok(table)
    }

    /// Parse the configured commentary style.
    pub fn style(&self) -> Result<CommentaryStyle> {
        self.commentary.style.parse()
    }
}
