//! Tuning constants and the logical play area.
//!
//! All gameplay happens in logical pixels on an 800×600 arena; the display
//! layer scales that onto whatever terminal grid is available.

use std::path::PathBuf;
use std::time::Duration;

/// Fixed update rate (60 Hz).
pub const FRAME: Duration = Duration::from_micros(16_667);

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

/// Glyph advance assumed when no terminal is attached (800 px / 80 cols).
pub const DEFAULT_GLYPH_WIDTH: f32 = 10.0;

/// Horizontal margin kept free on both sides when a word spawns.
pub const SPAWN_MARGIN: f32 = 50.0;

/// Seconds shown by the pre-game countdown.
pub const COUNTDOWN_START: u32 = 3;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const BASE_POINTS: u32 = 10;
pub const POINTS_PER_LETTER: u32 = 2;
/// Combo value from which the per-word bonus kicks in.
pub const COMBO_THRESHOLD: u32 = 3;
pub const COMBO_BONUS: u32 = 5;

// ── Explosions ───────────────────────────────────────────────────────────────

pub const PARTICLES_PER_EXPLOSION: usize = 15;
pub const PARTICLE_SCATTER: i32 = 20;
pub const PARTICLE_LIFE_MIN: i32 = 20;
pub const PARTICLE_LIFE_MAX: i32 = 40;

// ── Files ────────────────────────────────────────────────────────────────────

pub const SCORE_FILE: &str = ".word_shutter_scores.json";
pub const LOG_FILE: &str = "word_shutter.log";

/// Directory holding the score and log files (`$HOME`, else the cwd).
pub fn data_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

pub fn score_path() -> PathBuf {
    data_dir().join(SCORE_FILE)
}

/// Logical play area plus the text metric used to measure words.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Logical width of one rendered character.
    pub glyph_width: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            glyph_width: DEFAULT_GLYPH_WIDTH,
        }
    }
}

impl Arena {
    /// Arena whose glyph advance matches one terminal column.
    pub fn for_terminal(cols: u16) -> Self {
        let cols = cols.max(1) as f32;
        Self {
            glyph_width: ARENA_WIDTH / cols,
            ..Self::default()
        }
    }

    /// Rendered width of `text` in logical pixels.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_arena_maps_one_column_per_glyph() {
        let arena = Arena::for_terminal(100);
        assert_eq!(arena.glyph_width, 8.0);
        assert_eq!(arena.text_width("rocket"), 48.0);
    }

    #[test]
    fn zero_columns_does_not_divide_by_zero() {
        let arena = Arena::for_terminal(0);
        assert_eq!(arena.glyph_width, ARENA_WIDTH);
    }
}
