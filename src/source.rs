//! Event source capability.
//!
//! The engine itself never fetches anything; it only requires well-formed
//! event values. Adapters that know how events actually arrive (polling,
//! webhooks, files) implement this trait. The replay and demo commands are
//! the only consumers in this crate.

use crate::error::Result;
use crate::event::GitHubEvent;

/// A producer of GitHub activity events.
pub trait EventSource {
    /// Fetch the next batch of events. An empty batch means the source is
    /// drained (for finite sources) or has nothing new yet.
    fn fetch_events(&mut self) -> Result<Vec<GitHubEvent>>;

    /// Establish credentials with the upstream, if any. Sources without an
    /// authentication step succeed trivially.
    fn authenticate(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A finite, pre-loaded event source for tests and the demo harness.
#[derive(Debug, Default)]
pub struct StaticEventSource {
    events: Vec<GitHubEvent>,
    drained: bool,
}

impl StaticEventSource {
    /// Create a source that yields the given events once, then drains.
    pub fn new(events: Vec<GitHubEvent>) -> Self {
        Self {
            events,
            drained: false,
        }
    }
}

impl EventSource for StaticEventSource {
    fn fetch_events(&mut self) -> Result<Vec<GitHubEvent>> {
        if self.drained {
            return Ok(Vec::new());
        }
        self.drained = true;
        Ok(std::mem::take(&mut self.events))
    }
}
