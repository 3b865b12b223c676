//! CLI command implementations.
//!
//! Each command is a struct with an Options input, a serializable Output,
//! a `run` method, and a `format_output` method that renders either JSON or
//! human-readable text.

use serde::{Deserialize, Serialize};

use crate::engine::RankedEntry;

pub mod demo;
pub mod replay;

pub use demo::DemoCommand;
pub use replay::ReplayCommand;

/// One repository row in command output.
///
/// The engine ranks both repositories and users under a generic entity name;
/// the output layer names the field by what it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryScore {
    /// The repository identifier.
    pub repository: String,
    /// Accumulated observation count.
    pub score: u64,
}

/// One user row in command output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserScore {
    /// The username.
    pub user: String,
    /// Accumulated observation count.
    pub score: u64,
}

impl From<RankedEntry> for RepositoryScore {
    fn from(entry: RankedEntry) -> Self {
        Self {
            repository: entry.name,
            score: entry.score,
        }
    }
}

impl From<RankedEntry> for UserScore {
    fn from(entry: RankedEntry) -> Self {
        Self {
            user: entry.name,
            score: entry.score,
        }
    }
}
