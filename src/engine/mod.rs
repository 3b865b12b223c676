//! The event aggregation and ranking engine.
//!
//! Writers append events through the [`Leaderboard`] facade; readers take
//! owned, sorted snapshots. The score store itself is plain data — all
//! locking lives in the facade.

pub mod leaderboard;
pub mod overall;
pub mod ranking;
pub mod store;

pub use leaderboard::Leaderboard;
pub use overall::OverallEntry;
pub use ranking::RankedEntry;
pub use store::ScoreStore;
