//! Style-driven commentary generation.
//!
//! A pure, stateless collaborator: one event in, one display string out. The
//! style set is a closed enum so new styles are exhaustively checked at
//! compile time rather than dispatched dynamically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SportscastError;
use crate::event::{EventType, GitHubEvent};

/// The voice used for generated commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentaryStyle {
    /// High-energy play-by-play.
    #[default]
    Enthusiastic,
    /// Measured broadcast-desk delivery.
    Professional,
    /// Theatrical, high-stakes narration.
    Dramatic,
}

impl CommentaryStyle {
    /// Get all style variants.
    pub fn all() -> &'static [CommentaryStyle] {
        &[
            CommentaryStyle::Enthusiastic,
            CommentaryStyle::Professional,
            CommentaryStyle::Dramatic,
        ]
    }

    /// Get the config name of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentaryStyle::Enthusiastic => "enthusiastic",
            CommentaryStyle::Professional => "professional",
            CommentaryStyle::Dramatic => "dramatic",
        }
    }

    /// Generate one line of commentary for an event.
    pub fn generate(&self, event: &GitHubEvent) -> String {
        let repo = &event.repository;
        let actor = &event.actor;

        match self {
            CommentaryStyle::Enthusiastic => match event.event_type {
                EventType::Star => {
                    format!("WOW! {actor} just smashed that star button on {repo}! The crowd goes wild!")
                }
                EventType::Fork => {
                    format!("INCREDIBLE! {actor} forks {repo} and takes the play into their own hands!")
                }
                EventType::PullRequest => {
                    format!("HERE COMES {actor} with a pull request on {repo}! What a move!")
                }
                EventType::Commit => {
                    format!("{actor} lands a commit on {repo}! The codebase is ON FIRE!")
                }
                EventType::Release => {
                    format!("IT'S OFFICIAL! {repo} ships a release, courtesy of {actor}!")
                }
                EventType::Issue => {
                    format!("{actor} calls a foul on {repo}! An issue hits the board!")
                }
                EventType::Push => {
                    format!("{actor} pushes to {repo} and keeps the momentum rolling!")
                }
                EventType::Watch => {
                    format!("{actor} has eyes on {repo}! Another fan in the stands!")
                }
            },
            CommentaryStyle::Professional => match event.event_type {
                EventType::Star => {
                    format!("{repo} receives a star from {actor}.")
                }
                EventType::Fork => {
                    format!("{actor} has forked {repo} for independent development.")
                }
                EventType::PullRequest => {
                    format!("A pull request on {repo} has been submitted by {actor}.")
                }
                EventType::Commit => {
                    format!("{actor} has committed changes to {repo}.")
                }
                EventType::Release => {
                    format!("{repo} has published a new release, prepared by {actor}.")
                }
                EventType::Issue => {
                    format!("{actor} has filed an issue against {repo}.")
                }
                EventType::Push => {
                    format!("{actor} has pushed updates to {repo}.")
                }
                EventType::Watch => {
                    format!("{actor} is now watching {repo}.")
                }
            },
            CommentaryStyle::Dramatic => match event.event_type {
                EventType::Star => {
                    format!("In a stunning turn, {actor} bestows a star upon {repo}. History is written.")
                }
                EventType::Fork => {
                    format!("The saga splits in two: {actor} has forked {repo}. Nothing will be the same.")
                }
                EventType::PullRequest => {
                    format!("All eyes on {repo} as {actor} dares to open a pull request.")
                }
                EventType::Commit => {
                    format!("With steady hands, {actor} carves a commit into {repo}.")
                }
                EventType::Release => {
                    format!("The moment arrives. {repo} unleashes a release, and {actor} holds the torch.")
                }
                EventType::Issue => {
                    format!("A shadow falls over {repo}: {actor} has raised an issue.")
                }
                EventType::Push => {
                    format!("{actor} drives the story of {repo} forward with a fateful push.")
                }
                EventType::Watch => {
                    format!("From the darkness, {actor} watches {repo}. Waiting.")
                }
            },
        }
    }
}

impl fmt::Display for CommentaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentaryStyle {
    type Err = SportscastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enthusiastic" => Ok(CommentaryStyle::Enthusiastic),
            "professional" => Ok(CommentaryStyle::Professional),
            "dramatic" => Ok(CommentaryStyle::Dramatic),
            other => Err(SportscastError::config(format!(
                "unknown commentary style: {other}"
            ))),
        }
    }
}
