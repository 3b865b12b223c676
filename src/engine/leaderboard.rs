//! The leaderboard facade: single entry point for writers and readers.
//!
//! Owns the tracked-metric configuration, the score store, and the bounded
//! recent-events buffer behind one `RwLock`. Writers take the write lock for
//! the duration of one increment; readers clone a consistent snapshot under
//! the read lock and compute on the copy, so ranking math is never skewed by
//! a write landing mid-computation.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use crate::engine::overall::{self, OverallEntry};
use crate::engine::ranking::{self, RankedEntry};
use crate::engine::store::ScoreStore;
use crate::error::{Result, SportscastError};
use crate::event::{EventType, GitHubEvent};

/// Default capacity of the recent-events buffer.
pub const DEFAULT_RECENT_LIMIT: usize = 50;

/// Shared state guarded by the facade lock.
#[derive(Debug)]
struct Inner {
    store: ScoreStore,
    recent: VecDeque<GitHubEvent>,
}

/// Live rankings over a stream of GitHub activity events.
///
/// Thread-safe: any number of event-arrival paths may call
/// [`process_event`](Leaderboard::process_event) while query paths snapshot
/// rankings concurrently. Query results are owned copies; callers never
/// observe further mutation mid-iteration.
#[derive(Debug)]
pub struct Leaderboard {
    inner: RwLock<Inner>,
    weights: HashMap<EventType, f64>,
    recent_limit: usize,
}

impl Leaderboard {
    /// Create a leaderboard tracking the given metrics, with uniform
    /// weights and the default recent-events capacity.
    pub fn new(metrics: impl IntoIterator<Item = EventType>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                store: ScoreStore::new(metrics),
                recent: VecDeque::new(),
            }),
            weights: HashMap::new(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    /// Supply explicit per-metric weights for the overall ranking.
    ///
    /// Metrics absent from the map keep the uniform share.
    pub fn with_weights(mut self, weights: HashMap<EventType, f64>) -> Self {
        self.weights = weights;
        self
    }

    /// Override the recent-events buffer capacity.
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Process one event: validate, route by metric, increment counters.
    ///
    /// Events of an untracked type are accepted and silently ignored —
    /// unknown or irrelevant events are routinely observed and are not an
    /// error. Structurally invalid events (empty repository or actor) fail
    /// with a validation error and mutate nothing.
    ///
    /// The engine counts observations, not unique actions: processing the
    /// same logical event twice increments the counters twice.
    pub fn process_event(&self, event: &GitHubEvent) -> Result<()> {
        if event.repository.is_empty() {
            tracing::warn!(actor = %event.actor, "rejecting event with empty repository");
            return Err(SportscastError::validation("empty repository"));
        }
        if event.actor.is_empty() {
            tracing::warn!(repository = %event.repository, "rejecting event with empty actor");
            return Err(SportscastError::validation("empty actor"));
        }

        let mut inner = self.inner.write().unwrap();

        if !inner.store.is_tracked(event.event_type) {
            tracing::debug!(
                event_type = %event.event_type,
                repository = %event.repository,
                "ignoring untracked event type"
            );
            return Ok(());
        }

        inner
            .store
            .record(event.event_type, &event.repository, &event.actor);

        if self.recent_limit > 0 {
            if inner.recent.len() == self.recent_limit {
                inner.recent.pop_back();
            }
            inner.recent.push_front(event.clone());
        }

        Ok(())
    }

    /// Top repositories for a tracked metric, score descending.
    ///
    /// Fails with [`SportscastError::UnknownMetric`] when the metric is not
    /// in the tracked set.
    pub fn get_top_repositories(&self, metric: EventType, limit: usize) -> Result<Vec<RankedEntry>> {
        let inner = self.inner.read().unwrap();
        let counts = inner
            .store
            .repo_counts(metric)
            .ok_or_else(|| SportscastError::unknown_metric(metric.as_str()))?;
        Ok(ranking::rank(counts, limit))
    }

    /// Top users for a tracked metric, score descending.
    pub fn get_top_users(&self, metric: EventType, limit: usize) -> Result<Vec<RankedEntry>> {
        let inner = self.inner.read().unwrap();
        let counts = inner
            .store
            .user_counts(metric)
            .ok_or_else(|| SportscastError::unknown_metric(metric.as_str()))?;
        Ok(ranking::rank(counts, limit))
    }

    /// The combined multi-metric repository ranking.
    ///
    /// Takes a snapshot of all metric maps under the read lock, then
    /// normalizes and merges on the copy without holding the lock.
    pub fn get_overall_rankings(&self, limit: usize) -> Vec<OverallEntry> {
        let snapshot = {
            let inner = self.inner.read().unwrap();
            inner.store.clone()
        };
        let weights = overall::resolve_weights(&snapshot, &self.weights);
        overall::combine(&snapshot, &weights, limit)
    }

    /// The most recently accepted tracked events, newest first.
    pub fn recent_events(&self) -> Vec<GitHubEvent> {
        let inner = self.inner.read().unwrap();
        inner.recent.iter().cloned().collect()
    }

    /// Tracked metrics, in stable order.
    pub fn metrics(&self) -> Vec<EventType> {
        let inner = self.inner.read().unwrap();
        inner.store.metrics().collect()
    }

    /// Total observations accepted across all metrics.
    pub fn total_events(&self) -> u64 {
        let inner = self.inner.read().unwrap();
        inner.store.total_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Leaderboard {
        Leaderboard::new([
            EventType::Star,
            EventType::Fork,
            EventType::PullRequest,
            EventType::Commit,
        ])
    }

    fn star(repo: &str, actor: &str) -> GitHubEvent {
        GitHubEvent::new(EventType::Star, repo, actor)
    }

    // Write path

    #[test]
    fn test_process_event_increments_both_counters() {
        let lb = board();
        lb.process_event(&star("facebook/react", "johndoe")).unwrap();

        let repos = lb.get_top_repositories(EventType::Star, 5).unwrap();
        assert_eq!(repos, vec![RankedEntry::new("facebook/react", 1)]);

        let users = lb.get_top_users(EventType::Star, 5).unwrap();
        assert_eq!(users, vec![RankedEntry::new("johndoe", 1)]);
    }

    #[test]
    fn test_exact_count_after_k_events() {
        let lb = board();
        for _ in 0..7 {
            lb.process_event(&star("facebook/react", "johndoe")).unwrap();
        }

        let repos = lb.get_top_repositories(EventType::Star, 5).unwrap();
        assert_eq!(repos[0].score, 7);
    }

    #[test]
    fn test_process_event_is_not_idempotent() {
        // The engine counts observations, not unique actions: the identical
        // event processed twice yields double the count.
        let lb = board();
        let event = star("facebook/react", "johndoe");

        lb.process_event(&event).unwrap();
        lb.process_event(&event).unwrap();

        let repos = lb.get_top_repositories(EventType::Star, 5).unwrap();
        assert_eq!(repos[0].score, 2);
    }

    #[test]
    fn test_untracked_event_type_is_silent_noop() {
        let lb = board();
        let result = lb.process_event(&GitHubEvent::new(
            EventType::Release,
            "python/cpython",
            "core-dev",
        ));

        assert!(result.is_ok());
        assert_eq!(lb.total_events(), 0);
        assert!(lb.recent_events().is_empty());
    }

    #[test]
    fn test_empty_repository_is_validation_error() {
        let lb = board();
        let result = lb.process_event(&star("", "johndoe"));

        assert!(matches!(result, Err(SportscastError::Validation { .. })));
        assert_eq!(lb.total_events(), 0);
    }

    #[test]
    fn test_empty_actor_is_validation_error() {
        let lb = board();
        let result = lb.process_event(&star("facebook/react", ""));

        assert!(matches!(result, Err(SportscastError::Validation { .. })));
        // All-or-nothing: the repository counter must not have moved either
        let repos = lb.get_top_repositories(EventType::Star, 5).unwrap();
        assert!(repos.is_empty());
    }

    #[test]
    fn test_bad_event_does_not_abort_subsequent_processing() {
        let lb = board();
        assert!(lb.process_event(&star("", "")).is_err());
        assert!(lb.process_event(&star("facebook/react", "johndoe")).is_ok());
        assert_eq!(lb.total_events(), 1);
    }

    // Read path

    #[test]
    fn test_query_unknown_metric_fails() {
        let lb = board();
        let result = lb.get_top_repositories(EventType::Release, 5);
        assert!(matches!(result, Err(SportscastError::UnknownMetric { .. })));

        let result = lb.get_top_users(EventType::Watch, 5);
        assert!(matches!(result, Err(SportscastError::UnknownMetric { .. })));
    }

    #[test]
    fn test_queries_return_owned_snapshots() {
        let lb = board();
        lb.process_event(&star("facebook/react", "johndoe")).unwrap();

        let before = lb.get_top_repositories(EventType::Star, 5).unwrap();
        lb.process_event(&star("facebook/react", "janedoe")).unwrap();

        // The snapshot taken earlier is unaffected by the later write
        assert_eq!(before[0].score, 1);
        let after = lb.get_top_repositories(EventType::Star, 5).unwrap();
        assert_eq!(after[0].score, 2);
    }

    #[test]
    fn test_metrics_accessor() {
        let lb = Leaderboard::new([EventType::Fork, EventType::Star]);
        assert_eq!(lb.metrics(), vec![EventType::Star, EventType::Fork]);
    }

    // Recent events buffer

    #[test]
    fn test_recent_events_newest_first() {
        let lb = board();
        lb.process_event(&star("a/a", "u1")).unwrap();
        lb.process_event(&star("b/b", "u2")).unwrap();

        let recent = lb.recent_events();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].repository, "b/b");
        assert_eq!(recent[1].repository, "a/a");
    }

    #[test]
    fn test_recent_events_bounded() {
        let lb = board().with_recent_limit(3);
        for i in 0..10 {
            lb.process_event(&star(&format!("repo/{i}"), "user")).unwrap();
        }

        let recent = lb.recent_events();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].repository, "repo/9");
        assert_eq!(recent[2].repository, "repo/7");
    }

    #[test]
    fn test_recent_events_zero_capacity() {
        let lb = board().with_recent_limit(0);
        lb.process_event(&star("a/a", "u1")).unwrap();
        assert!(lb.recent_events().is_empty());
        // Counting is unaffected by the disabled buffer
        assert_eq!(lb.total_events(), 1);
    }

    // Reference workload scenario

    #[test]
    fn test_reference_workload() {
        let lb = board();

        let events = vec![
            GitHubEvent::new(EventType::Star, "facebook/react", "johndoe"),
            GitHubEvent::new(EventType::Fork, "microsoft/vscode", "janedoe"),
            GitHubEvent::new(EventType::PullRequest, "tensorflow/tensorflow", "mlexpert"),
            GitHubEvent::new(EventType::Commit, "pytorch/pytorch", "aidev"),
            GitHubEvent::new(EventType::Release, "python/cpython", "core-dev"),
        ];

        for _ in 0..3 {
            for event in &events {
                lb.process_event(event).unwrap();
            }
        }

        let top_star = lb.get_top_repositories(EventType::Star, 5).unwrap();
        assert_eq!(top_star, vec![RankedEntry::new("facebook/react", 3)]);

        let top_committers = lb.get_top_users(EventType::Commit, 5).unwrap();
        assert_eq!(top_committers, vec![RankedEntry::new("aidev", 3)]);

        // release is untracked in this configuration and never surfaces
        assert!(matches!(
            lb.get_top_repositories(EventType::Release, 5),
            Err(SportscastError::UnknownMetric { .. })
        ));

        let overall = lb.get_overall_rankings(5);
        let names: Vec<&str> = overall.iter().map(|e| e.repository.as_str()).collect();
        assert_eq!(overall.len(), 4);
        assert!(!names.contains(&"python/cpython"));

        // Each repo maxes exactly one of four equally weighted metrics
        for entry in &overall {
            assert!((entry.score - 0.25).abs() < 1e-9);
        }
        // Equal composite and equal raw totals: lexicographic order
        assert_eq!(
            names,
            vec![
                "facebook/react",
                "microsoft/vscode",
                "pytorch/pytorch",
                "tensorflow/tensorflow"
            ]
        );
    }

    // Concurrency

    #[test]
    fn test_no_lost_updates_under_concurrent_writes() {
        use std::sync::Arc;
        use std::thread;

        let lb = Arc::new(board());
        lb.process_event(&star("facebook/react", "johndoe")).unwrap();

        let n = 8;
        let per_thread = 25;
        let mut handles = vec![];

        for _ in 0..n {
            let lb = Arc::clone(&lb);
            handles.push(thread::spawn(move || {
                for _ in 0..per_thread {
                    lb.process_event(&star("facebook/react", "johndoe")).unwrap();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let repos = lb.get_top_repositories(EventType::Star, 5).unwrap();
        assert_eq!(repos[0].score, 1 + (n * per_thread) as u64);
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        use std::sync::Arc;
        use std::thread;

        let lb = Arc::new(board());
        let mut handles = vec![];

        for i in 0..4 {
            let lb = Arc::clone(&lb);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    lb.process_event(&star("shared/repo", &format!("user-{i}")))
                        .unwrap();
                }
            }));
        }
        for _ in 0..4 {
            let lb = Arc::clone(&lb);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    let snapshot = lb.get_top_repositories(EventType::Star, 5).unwrap();
                    // A snapshot is internally consistent: at most one entry
                    // for the single repository ever written
                    assert!(snapshot.len() <= 1);
                    let _ = lb.get_overall_rankings(5);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(lb.total_events(), 200);
    }
}
