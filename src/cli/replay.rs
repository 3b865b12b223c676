//! Replay command: feed a JSONL event file through the engine.
//!
//! Each line of the input file is one JSON-encoded event. Malformed lines
//! and structurally invalid events are counted and skipped; they never abort
//! the replay.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::{RepositoryScore, UserScore};
use crate::config::Config;
use crate::engine::{Leaderboard, OverallEntry};
use crate::error::{Result, SportscastError};
use crate::event::{EventType, GitHubEvent};

/// Options for the replay command.
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Show only this metric's tables (all tracked metrics by default).
    pub metric: Option<String>,
    /// Maximum entries per table.
    pub limit: Option<usize>,
}

/// Default table size.
const DEFAULT_LIMIT: usize = 10;

/// Output format for the replay command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayOutput {
    /// Whether the replay completed.
    pub success: bool,
    /// Events accepted into tracked metrics.
    pub accepted: u64,
    /// Events of untracked types, silently ignored.
    pub ignored: u64,
    /// Malformed lines or invalid events, skipped.
    pub rejected: u64,
    /// Per-metric ranking tables.
    pub tables: Vec<MetricTable>,
    /// The overall ranking.
    pub overall: Vec<OverallEntry>,
    /// Error message if the replay failed outright.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ranked repositories and users for one metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricTable {
    /// The metric name.
    pub metric: String,
    /// Top repositories.
    pub repositories: Vec<RepositoryScore>,
    /// Top users.
    pub users: Vec<UserScore>,
}

impl ReplayOutput {
    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            accepted: 0,
            ignored: 0,
            rejected: 0,
            tables: Vec::new(),
            overall: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Replay command runner.
#[derive(Debug)]
pub struct ReplayCommand {
    config: Config,
}

impl ReplayCommand {
    /// Create a new replay command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the replay against a JSONL event file.
    pub fn run(&self, path: &Path, options: &ReplayOptions) -> ReplayOutput {
        let metrics = match self.config.metric_types() {
            Ok(m) => m,
            Err(e) => return ReplayOutput::failure(e.to_string()),
        };
        let weights = match self.config.weight_table() {
            Ok(w) => w,
            Err(e) => return ReplayOutput::failure(e.to_string()),
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return ReplayOutput::failure(SportscastError::storage(path, e).to_string()),
        };

        let leaderboard = Leaderboard::new(metrics.clone())
            .with_weights(weights)
            .with_recent_limit(self.config.recent_events_limit);

        let mut accepted = 0u64;
        let mut ignored = 0u64;
        let mut rejected = 0u64;

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let event: GitHubEvent = match serde_json::from_str(line) {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(line = line_num + 1, error = %e, "skipping malformed line");
                    rejected += 1;
                    continue;
                }
            };

            let before = leaderboard.total_events();
            match leaderboard.process_event(&event) {
                Ok(()) if leaderboard.total_events() > before => accepted += 1,
                Ok(()) => ignored += 1,
                Err(e) => {
                    tracing::warn!(line = line_num + 1, error = %e, "skipping invalid event");
                    rejected += 1;
                }
            }
        }

        let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
        let selected: Vec<EventType> = match &options.metric {
            Some(name) => match name.parse::<EventType>() {
                Ok(metric) if metrics.contains(&metric) => vec![metric],
                Ok(metric) => {
                    return ReplayOutput::failure(
                        SportscastError::unknown_metric(metric.as_str()).to_string(),
                    )
                }
                Err(e) => return ReplayOutput::failure(e.to_string()),
            },
            None => leaderboard.metrics(),
        };

        let tables = match self.build_tables(&leaderboard, &selected, limit) {
            Ok(tables) => tables,
            Err(e) => return ReplayOutput::failure(e.to_string()),
        };

        ReplayOutput {
            success: true,
            accepted,
            ignored,
            rejected,
            tables,
            overall: leaderboard.get_overall_rankings(limit),
            error: None,
        }
    }

    fn build_tables(
        &self,
        leaderboard: &Leaderboard,
        metrics: &[EventType],
        limit: usize,
    ) -> Result<Vec<MetricTable>> {
        metrics
            .iter()
            .map(|metric| {
                Ok(MetricTable {
                    metric: metric.as_str().to_string(),
                    repositories: leaderboard
                        .get_top_repositories(*metric, limit)?
                        .into_iter()
                        .map(RepositoryScore::from)
                        .collect(),
                    users: leaderboard
                        .get_top_users(*metric, limit)?
                        .into_iter()
                        .map(UserScore::from)
                        .collect(),
                })
            })
            .collect()
    }

    /// Format the output for display.
    pub fn format_output(&self, output: &ReplayOutput, options: &ReplayOptions) -> String {
        if options.quiet {
            return String::new();
        }
        if options.json {
            return serde_json::to_string_pretty(output).unwrap_or_default();
        }

        if let Some(error) = &output.error {
            return format!("replay failed: {error}");
        }

        let mut text = String::new();
        text.push_str(&format!(
            "Replayed {} events ({} ignored, {} rejected)\n",
            output.accepted, output.ignored, output.rejected
        ));

        for table in &output.tables {
            text.push_str(&format!("\n[{}]\n", table.metric));
            text.push_str("  repositories:\n");
            for entry in &table.repositories {
                text.push_str(&format!("    {}: {}\n", entry.repository, entry.score));
            }
            text.push_str("  users:\n");
            for entry in &table.users {
                text.push_str(&format!("    {}: {}\n", entry.user, entry.score));
            }
        }

        text.push_str("\n[overall]\n");
        for (i, entry) in output.overall.iter().enumerate() {
            text.push_str(&format!(
                "  {}. {}: {:.3}\n",
                i + 1,
                entry.repository,
                entry.score
            ));
        }

        text
    }
}
