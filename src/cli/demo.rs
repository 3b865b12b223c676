//! Demo command: the reference workload harness.
//!
//! Exercises, but does not implement, the engine: five sample events are
//! narrated in every commentary style, then processed three times each, and
//! the resulting per-metric and overall rankings are printed.

use serde::{Deserialize, Serialize};

use crate::cli::{RepositoryScore, UserScore};
use crate::commentary::CommentaryStyle;
use crate::config::Config;
use crate::engine::{Leaderboard, OverallEntry};
use crate::event::{EventType, GitHubEvent};
use crate::source::{EventSource, StaticEventSource};

/// How many times each sample event is processed.
const REPEATS: usize = 3;

/// Options for the demo command.
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the demo command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoOutput {
    /// Whether the demo ran successfully.
    pub success: bool,
    /// Commentary lines per style.
    pub commentary: Vec<StyledCommentary>,
    /// Top repositories by stars.
    pub top_repositories: Vec<RepositoryScore>,
    /// Top users by commits.
    pub top_users: Vec<UserScore>,
    /// The overall ranking.
    pub overall: Vec<OverallEntry>,
    /// Total observations accepted by the engine.
    pub total_events: u64,
    /// Error message if the demo failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One style's commentary lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyledCommentary {
    /// The style name.
    pub style: String,
    /// Generated lines.
    pub lines: Vec<String>,
}

impl DemoOutput {
    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            commentary: Vec::new(),
            top_repositories: Vec::new(),
            top_users: Vec::new(),
            overall: Vec::new(),
            total_events: 0,
            error: Some(error.into()),
        }
    }
}

/// Demo command runner.
#[derive(Debug)]
pub struct DemoCommand {
    config: Config,
}

impl DemoCommand {
    /// Create a new demo command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The five sample events from the reference workload.
    fn sample_events() -> Vec<GitHubEvent> {
        vec![
            GitHubEvent::new(EventType::Star, "facebook/react", "johndoe"),
            GitHubEvent::new(EventType::Fork, "microsoft/vscode", "janedoe"),
            GitHubEvent::new(EventType::PullRequest, "tensorflow/tensorflow", "mlexpert"),
            GitHubEvent::new(EventType::Commit, "pytorch/pytorch", "aidev"),
            GitHubEvent::new(EventType::Release, "python/cpython", "core-dev"),
        ]
    }

    /// Run the demo.
    pub fn run(&self, _options: &DemoOptions) -> DemoOutput {
        let metrics = match self.config.metric_types() {
            Ok(m) => m,
            Err(e) => return DemoOutput::failure(e.to_string()),
        };
        let weights = match self.config.weight_table() {
            Ok(w) => w,
            Err(e) => return DemoOutput::failure(e.to_string()),
        };

        let leaderboard = Leaderboard::new(metrics)
            .with_weights(weights)
            .with_recent_limit(self.config.recent_events_limit);

        let mut source = StaticEventSource::new(Self::sample_events());
        let events = match source.fetch_events() {
            Ok(events) => events,
            Err(e) => return DemoOutput::failure(e.to_string()),
        };

        // Commentary: every style narrates the first two events
        let commentary = CommentaryStyle::all()
            .iter()
            .map(|style| StyledCommentary {
                style: style.as_str().to_string(),
                lines: events.iter().take(2).map(|e| style.generate(e)).collect(),
            })
            .collect();

        for _ in 0..REPEATS {
            for event in &events {
                if let Err(e) = leaderboard.process_event(event) {
                    return DemoOutput::failure(e.to_string());
                }
            }
        }

        let top_repositories = leaderboard
            .get_top_repositories(EventType::Star, 5)
            .unwrap_or_default()
            .into_iter()
            .map(RepositoryScore::from)
            .collect();
        let top_users = leaderboard
            .get_top_users(EventType::Commit, 5)
            .unwrap_or_default()
            .into_iter()
            .map(UserScore::from)
            .collect();
        let overall = leaderboard.get_overall_rankings(5);

        DemoOutput {
            success: true,
            commentary,
            top_repositories,
            top_users,
            overall,
            total_events: leaderboard.total_events(),
            error: None,
        }
    }

    /// Format the output for display.
    pub fn format_output(&self, output: &DemoOutput, options: &DemoOptions) -> String {
        if options.quiet {
            return String::new();
        }
        if options.json {
            return serde_json::to_string_pretty(output).unwrap_or_default();
        }

        if let Some(error) = &output.error {
            return format!("demo failed: {error}");
        }

        let mut text = String::new();
        text.push_str("GitHub Sportscast Demo\n");
        text.push_str("======================\n\n");

        text.push_str("Commentary\n");
        for styled in &output.commentary {
            text.push_str(&format!("  [{}]\n", styled.style));
            for line in &styled.lines {
                text.push_str(&format!("    {line}\n"));
            }
        }

        text.push_str("\nTop repositories by stars\n");
        for (i, entry) in output.top_repositories.iter().enumerate() {
            text.push_str(&format!(
                "  {}. {}: {}\n",
                i + 1,
                entry.repository,
                entry.score
            ));
        }

        text.push_str("\nTop users by commits\n");
        for (i, entry) in output.top_users.iter().enumerate() {
            text.push_str(&format!("  {}. {}: {}\n", i + 1, entry.user, entry.score));
        }

        text.push_str("\nOverall rankings\n");
        for (i, entry) in output.overall.iter().enumerate() {
            text.push_str(&format!(
                "  {}. {}: {:.3}\n",
                i + 1,
                entry.repository,
                entry.score
            ));
        }

        text.push_str(&format!("\nTotal events processed: {}\n", output.total_events));
        text
    }
}
