//! Sportscast - GitHub activity aggregation and ranking engine
//!
//! Sportscast turns a stream of GitHub events into live leaderboards:
//! per-metric counts for repositories and users, plus a normalized
//! cross-metric overall ranking. Commentary styles narrate individual
//! events for display.

pub mod cli;
pub mod commentary;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod source;

pub use commentary::CommentaryStyle;
pub use config::Config;
pub use engine::{Leaderboard, OverallEntry, RankedEntry, ScoreStore};
pub use error::{Result, SportscastError};
pub use event::{EventType, GitHubEvent};
pub use source::{EventSource, StaticEventSource};

// CLI commands
pub use cli::{DemoCommand, ReplayCommand};
