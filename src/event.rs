//! GitHub activity event model.
//!
//! An event is an immutable record of one observed activity. The engine
//! consumes events and keeps only derived counts; the opaque `data` payload
//! is carried through untouched for downstream commentary use.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SportscastError;

/// The kind of GitHub activity an event describes.
///
/// Closed per deployment: adding a variant is a code change, so every match
/// over event types is checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A repository was starred.
    Star,
    /// A repository was forked.
    Fork,
    /// A pull request was opened, merged, or closed.
    PullRequest,
    /// A commit was pushed.
    Commit,
    /// A release was published.
    Release,
    /// An issue was opened or closed.
    Issue,
    /// A push to any ref.
    Push,
    /// A repository was watched.
    Watch,
}

impl EventType {
    /// Get all event type variants.
    pub fn all() -> &'static [EventType] {
        &[
            EventType::Star,
            EventType::Fork,
            EventType::PullRequest,
            EventType::Commit,
            EventType::Release,
            EventType::Issue,
            EventType::Push,
            EventType::Watch,
        ]
    }

    /// Get the wire name of this event type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Star => "star",
            EventType::Fork => "fork",
            EventType::PullRequest => "pull_request",
            EventType::Commit => "commit",
            EventType::Release => "release",
            EventType::Issue => "issue",
            EventType::Push => "push",
            EventType::Watch => "watch",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = SportscastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "star" => Ok(EventType::Star),
            "fork" => Ok(EventType::Fork),
            "pull_request" => Ok(EventType::PullRequest),
            "commit" => Ok(EventType::Commit),
            "release" => Ok(EventType::Release),
            "issue" => Ok(EventType::Issue),
            "push" => Ok(EventType::Push),
            "watch" => Ok(EventType::Watch),
            other => Err(SportscastError::validation(format!(
                "unknown event type: {other}"
            ))),
        }
    }
}

/// One observed GitHub activity event.
///
/// Immutable once constructed. The engine does not retain events after
/// aggregation (apart from the bounded recent-events buffer); it keeps only
/// derived counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubEvent {
    /// The kind of activity.
    pub event_type: EventType,
    /// Repository identifier, `owner/name`. Case-sensitive, non-empty.
    pub repository: String,
    /// Username of the acting user. Non-empty.
    pub actor: String,
    /// When the event was observed. Freshness metadata only; scoring order
    /// never depends on it.
    pub timestamp: DateTime<Utc>,
    /// Opaque payload carried through for downstream commentary.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl GitHubEvent {
    /// Create a new event observed now, with an empty payload.
    pub fn new(
        event_type: EventType,
        repository: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            event_type,
            repository: repository.into(),
            actor: actor.into(),
            timestamp: Utc::now(),
            data: serde_json::Map::new(),
        }
    }

    /// Create an event with a specific timestamp (for testing and replay).
    pub fn with_timestamp(
        event_type: EventType,
        repository: impl Into<String>,
        actor: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_type,
            repository: repository.into(),
            actor: actor.into(),
            timestamp,
            data: serde_json::Map::new(),
        }
    }

    /// Attach an opaque payload.
    pub fn with_data(mut self, data: serde_json::Map<String, serde_json::Value>) -> Self {
        self.data = data;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_round_trip() {
        for ty in EventType::all() {
            let parsed: EventType = ty.as_str().parse().unwrap();
            assert_eq!(parsed, *ty);
        }
    }

    #[test]
    fn test_event_type_unknown() {
        let result = "gist".parse::<EventType>();
        assert!(result.is_err());
    }

    #[test]
    fn test_event_type_display() {
        assert_eq!(EventType::PullRequest.to_string(), "pull_request");
        assert_eq!(EventType::Star.to_string(), "star");
    }

    #[test]
    fn test_new_event() {
        let event = GitHubEvent::new(EventType::Star, "facebook/react", "johndoe");
        assert_eq!(event.event_type, EventType::Star);
        assert_eq!(event.repository, "facebook/react");
        assert_eq!(event.actor, "johndoe");
        assert!(event.data.is_empty());
        assert!(event.timestamp <= Utc::now());
    }

    #[test]
    fn test_with_timestamp() {
        let ts = Utc::now();
        let event = GitHubEvent::with_timestamp(EventType::Fork, "microsoft/vscode", "janedoe", ts);
        assert_eq!(event.timestamp, ts);
    }

    #[test]
    fn test_with_data() {
        let mut data = serde_json::Map::new();
        data.insert("action".to_string(), serde_json::json!("starred"));

        let event = GitHubEvent::new(EventType::Star, "facebook/react", "johndoe").with_data(data);
        assert_eq!(event.data.get("action"), Some(&serde_json::json!("starred")));
    }

    #[test]
    fn test_event_serialization() {
        let event = GitHubEvent::new(EventType::PullRequest, "tensorflow/tensorflow", "mlexpert");
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event_type":"pull_request""#));
        assert!(json.contains(r#""repository":"tensorflow/tensorflow""#));
        assert!(json.contains(r#""actor":"mlexpert""#));
        // Empty payload is omitted entirely
        assert!(!json.contains("data"));

        let parsed: GitHubEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_event_deserialization_without_data() {
        let json = r#"{
            "event_type": "commit",
            "repository": "pytorch/pytorch",
            "actor": "aidev",
            "timestamp": "2026-08-27T12:00:00Z"
        }"#;

        let event: GitHubEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::Commit);
        assert!(event.data.is_empty());
    }

    #[test]
    fn test_event_payload_round_trip() {
        let mut data = serde_json::Map::new();
        data.insert("action".to_string(), serde_json::json!("released"));
        data.insert("tag".to_string(), serde_json::json!("v3.12.0"));

        let event =
            GitHubEvent::new(EventType::Release, "python/cpython", "core-dev").with_data(data);
        let json = serde_json::to_string(&event).unwrap();
        let parsed: GitHubEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.data, event.data);
    }
}
