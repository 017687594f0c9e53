//! Best-ever score record, persisted as a small JSON file.
//!
//! The file is `{"score": .., "words": .., "least_time": ..}`; a missing or
//! `null` `least_time` means no time has been recorded yet.  Each field falls
//! back to its default independently, whether it is missing, of the wrong
//! type or out of range.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::entities::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HighScoreRecord {
    pub score: u32,
    pub words: u32,
    /// Lowest session time recorded, in seconds.
    pub least_time: Option<f64>,
}

fn count_field(value: &Value, key: &str) -> u32 {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

fn time_field(value: &Value, key: &str) -> Option<f64> {
    value
        .get(key)
        .and_then(Value::as_f64)
        .filter(|t| t.is_finite() && *t >= 0.0)
}

impl HighScoreRecord {
    /// Pick each field out of a parsed document on its own.
    pub fn from_value(value: &Value) -> Self {
        Self {
            score: count_field(value, "score"),
            words: count_field(value, "words"),
            least_time: time_field(value, "least_time"),
        }
    }
}

impl<'de> Deserialize<'de> for HighScoreRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

/// Some writers store an unset time as a bare `Infinity` or `NaN`, which is
/// not JSON.  Turn those tokens into `null` outside of strings.
fn sanitize_non_finite(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = json;
    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = ["-Infinity", "Infinity", "NaN"]
            .into_iter()
            .find(|t| rest.starts_with(t))
        {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[derive(Debug)]
pub enum HighScoreError {
    Io(io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighScoreError::Io(e) => write!(f, "score file I/O failed: {}", e),
            HighScoreError::Format(e) => write!(f, "score file is malformed: {}", e),
        }
    }
}

impl std::error::Error for HighScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HighScoreError::Io(e) => Some(e),
            HighScoreError::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for HighScoreError {
    fn from(e: io::Error) -> Self {
        HighScoreError::Io(e)
    }
}

impl From<serde_json::Error> for HighScoreError {
    fn from(e: serde_json::Error) -> Self {
        HighScoreError::Format(e)
    }
}

impl HighScoreRecord {
    /// Read the record at `path`.  Only unreadable or unparseable files are
    /// errors; bad fields just take their defaults.
    pub fn read(path: &Path) -> Result<Self, HighScoreError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&sanitize_non_finite(&json))?)
    }

    /// Like [`read`](Self::read), but any failure yields an empty record.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(record) => {
                log::info!("Loaded high scores from {}", path.display());
                record
            }
            Err(HighScoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring high scores at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace the file at `path` with this record.
    pub fn save(&self, path: &Path) -> Result<(), HighScoreError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        log::debug!("High scores saved to {}", path.display());
        Ok(())
    }

    /// Fold a session's stats into the record.  Returns whether any field
    /// improved.
    pub fn absorb(&mut self, session: &GameSession) -> bool {
        let mut improved = false;
        if session.score > self.score {
            self.score = session.score;
            improved = true;
        }
        if session.words_typed > self.words {
            self.words = session.words_typed;
            improved = true;
        }
        if self.least_time.map_or(true, |best| session.elapsed < best) {
            self.least_time = Some(session.elapsed);
            improved = true;
        }
        improved
    }
}
