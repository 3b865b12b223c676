//! Per-metric score counters for repositories and users.
//!
//! The store tracks a fixed set of metrics declared at construction. Counts
//! are monotonically non-decreasing for the lifetime of the store; there is
//! no decrement or reset operation.

use std::collections::{BTreeSet, HashMap};

use crate::event::EventType;

/// In-memory counters: for each tracked metric, repository→count and
/// user→count.
///
/// Plain data with no interior locking. The [`Leaderboard`] facade owns the
/// store behind an `RwLock` and enforces the exclusive-write, shared-read
/// discipline.
///
/// [`Leaderboard`]: crate::engine::Leaderboard
#[derive(Debug, Clone)]
pub struct ScoreStore {
    /// The tracked metric set, fixed at construction.
    metrics: BTreeSet<EventType>,
    /// Repository counters per metric.
    repo_counts: HashMap<EventType, HashMap<String, u64>>,
    /// User counters per metric.
    user_counts: HashMap<EventType, HashMap<String, u64>>,
}

impl ScoreStore {
    /// Create an empty store tracking the given metrics.
    pub fn new(metrics: impl IntoIterator<Item = EventType>) -> Self {
        let metrics: BTreeSet<EventType> = metrics.into_iter().collect();
        let repo_counts = metrics.iter().map(|m| (*m, HashMap::new())).collect();
        let user_counts = metrics.iter().map(|m| (*m, HashMap::new())).collect();
        Self {
            metrics,
            repo_counts,
            user_counts,
        }
    }

    /// Check whether a metric is tracked.
    pub fn is_tracked(&self, metric: EventType) -> bool {
        self.metrics.contains(&metric)
    }

    /// The tracked metric set, in stable order.
    pub fn metrics(&self) -> impl Iterator<Item = EventType> + '_ {
        self.metrics.iter().copied()
    }

    /// Number of tracked metrics.
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// Record one observation of `metric` for the given repository and actor.
    ///
    /// Caller guarantees the metric is tracked and both names are non-empty;
    /// the facade validates before calling. Untracked metrics are ignored.
    pub fn record(&mut self, metric: EventType, repository: &str, actor: &str) {
        let Some(repos) = self.repo_counts.get_mut(&metric) else {
            return;
        };
        *repos.entry(repository.to_string()).or_insert(0) += 1;

        if let Some(users) = self.user_counts.get_mut(&metric) {
            *users.entry(actor.to_string()).or_insert(0) += 1;
        }
    }

    /// Repository counters for a tracked metric.
    pub fn repo_counts(&self, metric: EventType) -> Option<&HashMap<String, u64>> {
        self.repo_counts.get(&metric)
    }

    /// User counters for a tracked metric.
    pub fn user_counts(&self, metric: EventType) -> Option<&HashMap<String, u64>> {
        self.user_counts.get(&metric)
    }

    /// Total raw event count for a repository, summed across all tracked
    /// metrics. Used as the secondary tie-break in the overall ranking.
    pub fn repo_total(&self, repository: &str) -> u64 {
        self.repo_counts
            .values()
            .filter_map(|m| m.get(repository))
            .sum()
    }

    /// Total observations recorded across all metrics.
    pub fn total_events(&self) -> u64 {
        self.repo_counts
            .values()
            .flat_map(|m| m.values())
            .sum()
    }

    /// Check whether anything has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.total_events() == 0
    }
}
