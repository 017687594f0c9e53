//! Word Shutter — a terminal typing game.
//!
//! Words fall from the top of the arena; type one and press Enter before it
//! reaches the floor.
//!
//! - `entities`: plain game data
//! - `compute`: per-tick logic and the screen state machine
//! - `difficulty`: level and speed curve
//! - `highscores`: persisted best score / words / time
//! - `display`: terminal rendering
//! - `input`, `audio`: key decoding and sound cues

pub mod audio;
pub mod compute;
pub mod config;
pub mod difficulty;
pub mod display;
pub mod entities;
pub mod highscores;
pub mod input;
pub mod words;

pub use entities::{Command, GameEvent, GameState, Screen};
pub use highscores::HighScoreRecord;
