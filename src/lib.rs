//! # Sky Blitz Game Server
//!
//! Minimal HTTP backend for the Sky Blitz browser arcade shooter.
//! Serves the static game page, a fixed initial game configuration,
//! and a file-backed top-10 leaderboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SKY BLITZ SERVER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  game/           - Fixed game parameters                     │
//! │  └── config.rs   - Player/enemy/bullet/powerup constants     │
//! │                                                              │
//! │  store/          - Durable state                             │
//! │  └── scores.rs   - File-backed top-10 leaderboard            │
//! │                                                              │
//! │  network/        - HTTP surface                              │
//! │  ├── protocol.rs - Wire types                                │
//! │  ├── router.rs   - Method + path dispatch                    │
//! │  └── server.rs   - Accept loop, HTTP/1.1 connections         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Model
//!
//! The leaderboard file is the **entire durable state** of the system:
//! - No in-memory state survives a request
//! - Every write is a full overwrite through a temp-file rename
//! - A failed write leaves the previous contents intact
//!
//! Concurrent submits race on load-modify-save; last writer wins. This
//! is accepted, not guarded against.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod game;
pub mod network;
pub mod store;

// Re-export commonly used types
pub use game::config::GameConfig;
pub use network::router::ApiRouter;
pub use network::server::{GameServer, ServerConfig, ServerError};
pub use store::scores::{HighScoreStore, ScoreRecord, StoreError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of leaderboard entries kept on disk.
pub const LEADERBOARD_CAP: usize = 10;

/// Fixed path of the leaderboard file, relative to the working directory.
pub const HIGH_SCORES_FILE: &str = "high_scores.json";
