//! High-Score Leaderboard Store
//!
//! File-backed top-10 leaderboard. The store owns a fixed path and keeps
//! no in-memory state; every operation is a scoped open/read/write and
//! the file is the single source of truth.
//!
//! Concurrent submits race on load-modify-save. Last writer wins; this
//! is accepted rather than locked against.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LEADERBOARD_CAP;

/// Timestamp format stored in each record.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One leaderboard entry. Immutable once stored; leaves the board only
/// by falling below rank 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Player-supplied name.
    pub name: String,
    /// Final score. Accepted as-is, negatives included.
    pub score: i64,
    /// Submission time, `YYYY-MM-DD HH:MM` local time.
    pub date: String,
}

/// Leaderboard store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Leaderboard file exists but cannot be read.
    #[error("failed to read leaderboard file: {0}")]
    Read(#[source] io::Error),

    /// Leaderboard JSON is malformed.
    #[error("leaderboard JSON is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Leaderboard file cannot be written.
    #[error("failed to write leaderboard file: {0}")]
    Write(#[source] io::Error),
}

/// File-backed leaderboard store.
///
/// Cloning is cheap; clones share the same backing file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Create a store over the given file path. Does not touch the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with an empty array if it does not exist.
    /// Existing contents are left alone.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            fs::write(&self.path, "[]").map_err(StoreError::Write)?;
            debug!("created empty leaderboard at {}", self.path.display());
        }
        Ok(())
    }

    /// Load the current leaderboard. A missing file is an empty board;
    /// a malformed one is an error, not an empty board.
    pub fn load(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Read(e)),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Append a score, keep the top 10, persist, return the new board.
    ///
    /// The sort is stable on score alone, so equal scores keep their
    /// prior relative order and a new tie lands behind existing ones.
    /// The write is a full overwrite of the file.
    pub fn submit(&self, name: &str, score: i64) -> Result<Vec<ScoreRecord>, StoreError> {
        let mut scores = self.load()?;
        scores.push(ScoreRecord {
            name: name.to_string(),
            score,
            date: Local::now().format(DATE_FORMAT).to_string(),
        });
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(LEADERBOARD_CAP);
        self.persist(&scores)?;
        debug!("persisted {} leaderboard entries", scores.len());
        Ok(scores)
    }

    /// Serialize first, then write through a sibling temp file and a
    /// rename, so a failed write leaves the previous contents intact.
    fn persist(&self, scores: &[ScoreRecord]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(scores)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded).map_err(StoreError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StoreError::Write)?;
        Ok(())
    }
}
