//! Durable State
//!
//! The leaderboard file is the entire durable state of the system.
//! Everything in here is synchronous, scoped file I/O.

pub mod scores;

// Re-export key types
pub use scores::{HighScoreStore, ScoreRecord, StoreError};
