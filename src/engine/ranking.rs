//! Read-side ranking over per-metric counters.
//!
//! Sorting is deterministic: score descending, then entity name ascending.
//! Zero-score entities never surface — "not yet observed" is not the same
//! as "ranked last".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entry in a per-metric ranking: an entity and its raw score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The ranked entity (repository identifier or username).
    pub name: String,
    /// Accumulated observation count for the metric.
    pub score: u64,
}

impl RankedEntry {
    /// Create a new ranked entry.
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Rank a counter map: top `limit` entries by score descending, name
/// ascending on ties. Entries with score 0 are excluded; `limit == 0`
/// yields an empty vector.
pub fn rank(counts: &HashMap<String, u64>, limit: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = counts
        .iter()
        .filter(|(_, score)| **score > 0)
        .map(|(name, score)| RankedEntry::new(name.clone(), *score))
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(limit);
    entries
}
