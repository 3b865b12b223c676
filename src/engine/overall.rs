//! Cross-metric composite ranking.
//!
//! Raw counts of different metrics are not directly comparable (50 commits
//! and 50 stars do not carry equal weight), so each metric is normalized to
//! [0, 1] against its own observed maximum before the weighted merge.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::store::ScoreStore;
use crate::event::EventType;

/// One entry in the overall ranking: a repository and its composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallEntry {
    /// The repository identifier.
    pub repository: String,
    /// Weighted sum of normalized per-metric scores.
    pub score: f64,
}

impl OverallEntry {
    /// Create a new overall entry.
    pub fn new(repository: impl Into<String>, score: f64) -> Self {
        Self {
            repository: repository.into(),
            score,
        }
    }
}

/// Resolve per-metric weights for a tracked metric set.
///
/// Metrics named in `explicit` use the supplied weight; every other metric
/// gets the uniform share `1 / metric_count`.
pub fn resolve_weights(
    store: &ScoreStore,
    explicit: &HashMap<EventType, f64>,
) -> HashMap<EventType, f64> {
    let n = store.metric_count().max(1);
    let uniform = 1.0 / n as f64;

    store
        .metrics()
        .map(|m| (m, explicit.get(&m).copied().unwrap_or(uniform)))
        .collect()
}

/// Build the overall ranking from a score store snapshot.
///
/// For each tracked metric, counts are normalized by the metric's observed
/// maximum (a metric with max 0 contributes 0.0 to every repository, so
/// there is no division by zero). Composite = sum of weight × normalized
/// score. Sort order: composite descending, then total raw event count
/// descending, then lexicographic repository name.
pub fn combine(
    store: &ScoreStore,
    weights: &HashMap<EventType, f64>,
    limit: usize,
) -> Vec<OverallEntry> {
    let mut composites: HashMap<String, f64> = HashMap::new();

    for metric in store.metrics() {
        let Some(counts) = store.repo_counts(metric) else {
            continue;
        };
        let max = counts.values().copied().max().unwrap_or(0);
        if max == 0 {
            continue;
        }

        let weight = weights.get(&metric).copied().unwrap_or(0.0);
        for (repo, count) in counts {
            let normalized = *count as f64 / max as f64;
            *composites.entry(repo.clone()).or_insert(0.0) += weight * normalized;
        }
    }

    let mut entries: Vec<(OverallEntry, u64)> = composites
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(repo, score)| {
            let total = store.repo_total(&repo);
            (OverallEntry::new(repo, score), total)
        })
        .collect();

    entries.sort_by(|(a, a_total), (b, b_total)| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b_total.cmp(a_total))
            .then_with(|| a.repository.cmp(&b.repository))
    });

    entries.truncate(limit);
    entries.into_iter().map(|(entry, _)| entry).collect()
}
