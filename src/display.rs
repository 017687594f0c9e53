//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.  Layout positions are expressed in arena
//! pixels and scaled onto the terminal grid, so screens keep their shape at
//! any terminal size.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rand::Rng;

use crate::config::Arena;
use crate::difficulty::level_progress;
use crate::entities::{palette, FallingWord, GameState, Particle, Rgb, Screen};
use crate::highscores::HighScoreRecord;

// ── Colour helpers ───────────────────────────────────────────────────────────

fn color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

/// Mix `fg` over the background at `alpha` (0 = invisible, 255 = opaque).
pub fn fade(fg: Rgb, alpha: u8) -> Rgb {
    let bg = palette::DARK_BLUE;
    let mix = |f: u8, b: u8| {
        let a = alpha as u16;
        ((f as u16 * a + b as u16 * (255 - a)) / 255) as u8
    };
    Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

/// Combo counter colour warms up as the combo grows.
pub fn combo_color(combo: u32) -> Rgb {
    Rgb(
        (100 + combo * 10).min(255) as u8,
        (200 + combo * 5).min(255) as u8,
        100,
    )
}

/// Dimming applied to the frozen playfield under the pause overlay.
const PAUSE_DIM: u8 = 75;

// ── Viewport ─────────────────────────────────────────────────────────────────

/// Terminal grid the arena is projected onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn col(&self, arena: &Arena, x: f32) -> i32 {
        (x / arena.width * self.cols as f32).floor() as i32
    }

    pub fn row(&self, arena: &Arena, y: f32) -> i32 {
        (y / arena.height * self.rows as f32).floor() as i32
    }

    /// Terminal cell under arena point (`x`, `y`), if it is on screen.
    pub fn cell(&self, arena: &Arena, x: f32, y: f32) -> Option<(u16, u16)> {
        let (c, r) = (self.col(arena, x), self.row(arena, y));
        let on_screen = (0..self.cols as i32).contains(&c) && (0..self.rows as i32).contains(&r);
        on_screen.then_some((c as u16, r as u16))
    }

    fn centre_col(&self, text: &str) -> u16 {
        (self.cols / 2).saturating_sub(text.chars().count() as u16 / 2)
    }
}

// ── Public entry point ───────────────────────────────────────────────────────

/// Render one complete frame.  `now` drives blinking prompts, `rng` the
/// countdown starfield.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    vp: Viewport,
    now: f64,
    rng: &mut impl Rng,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(color(palette::DARK_BLUE)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let blink_on = (now * 2.0) as i64 % 2 == 0;

    match state.screen {
        Screen::NotStarted => draw_start_screen(out, &state.record, vp, blink_on)?,
        Screen::Countdown => draw_countdown(out, state.countdown, vp, rng)?,
        Screen::Playing => {
            draw_playfield(out, state, vp, 255)?;
            draw_input_box(out, &state.input, vp)?;
            draw_hud(out, state, vp)?;
        }
        Screen::Paused => {
            draw_playfield(out, state, vp, PAUSE_DIM)?;
            draw_input_box(out, &state.input, vp)?;
            draw_pause_overlay(out, state, vp)?;
        }
        Screen::GameOver => draw_game_over(out, state, vp, blink_on)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ───────────────────────────────────────────────────────────────

fn put<W: Write>(out: &mut W, col: u16, row: u16, text: &str, fg: Rgb) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color(fg)))?;
    out.queue(Print(text))?;
    Ok(())
}

fn centred<W: Write>(out: &mut W, vp: Viewport, row: u16, text: &str, fg: Rgb) -> std::io::Result<()> {
    put(out, vp.centre_col(text), row, text, fg)
}

fn draw_box<W: Write>(
    out: &mut W,
    col: u16,
    row: u16,
    width: u16,
    height: u16,
    fg: Rgb,
) -> std::io::Result<()> {
    if width < 2 || height < 2 {
        return Ok(());
    }
    let inner = "─".repeat(width as usize - 2);
    put(out, col, row, &format!("┌{}┐", inner), fg)?;
    for r in row + 1..row + height - 1 {
        put(out, col, r, "│", fg)?;
        put(out, col + width - 1, r, "│", fg)?;
    }
    put(out, col, row + height - 1, &format!("└{}┘", inner), fg)?;
    Ok(())
}

/// Row for a layout position given in arena pixels (600 px tall screen).
fn layout_row(vp: Viewport, arena_y: f32) -> u16 {
    vp.row(&Arena::default(), arena_y).min(vp.rows as i32 - 1).max(0) as u16
}

fn best_time(record: &HighScoreRecord) -> String {
    match record.least_time {
        Some(t) => format!("{:.2}s", t),
        None => "--".to_string(),
    }
}

// ── Start screen ─────────────────────────────────────────────────────────────

const INSTRUCTIONS: &[&str] = &[
    "HOW TO PLAY:",
    "- Type falling words and press ENTER",
    "- Longer words give more points",
    "- Build combos for bonus points",
    "- Game gets harder over time",
    "",
    "CONTROLS:",
    "- Type to input words",
    "- BACKSPACE to correct",
    "- ENTER to submit",
    "- ESC to pause",
];

fn draw_start_screen<W: Write>(
    out: &mut W,
    record: &HighScoreRecord,
    vp: Viewport,
    blink_on: bool,
) -> std::io::Result<()> {
    centred(out, vp, layout_row(vp, 40.0), "WORD SHUTTER", palette::LIGHT_BLUE)?;
    centred(out, vp, layout_row(vp, 40.0) + 1, "TYPING GAME", palette::GOLD)?;

    let top = layout_row(vp, 120.0) + 1;
    let width = vp.cols.saturating_sub(8);
    draw_box(out, 4, top, width, INSTRUCTIONS.len() as u16 + 2, palette::LIGHT_BLUE)?;
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        let fg = match i {
            0 => palette::GOLD,
            6 => palette::LIGHT_BLUE,
            _ => palette::LAVENDER,
        };
        if !line.is_empty() {
            centred(out, vp, top + 1 + i as u16, line, fg)?;
        }
    }

    let hs = format!(
        "High Score: {} | Words: {} | Best Time: {}",
        record.score,
        record.words,
        best_time(record)
    );
    let hs_row = (top + INSTRUCTIONS.len() as u16 + 2).max(layout_row(vp, 475.0));
    centred(out, vp, hs_row, &hs, palette::GOLD)?;

    if blink_on {
        let prompt_row = (hs_row + 2).max(layout_row(vp, 520.0));
        centred(out, vp, prompt_row, "Press ENTER to Start", palette::LIME)?;
    }
    Ok(())
}

// ── Countdown ────────────────────────────────────────────────────────────────

fn draw_countdown<W: Write>(
    out: &mut W,
    countdown: u32,
    vp: Viewport,
    rng: &mut impl Rng,
) -> std::io::Result<()> {
    if vp.cols == 0 || vp.rows == 0 {
        return Ok(());
    }
    for _ in 0..50 {
        let col = rng.gen_range(0..vp.cols);
        let row = rng.gen_range(0..vp.rows);
        put(out, col, row, "·", palette::WHITE)?;
    }

    let mid = vp.rows / 2;
    if countdown > 0 {
        centred(out, vp, mid.saturating_sub(1), &countdown.to_string(), palette::CORAL)?;
        centred(out, vp, mid + 1, "Get Ready!", palette::LAVENDER)?;
    } else {
        centred(out, vp, mid, "GO!", palette::LIME)?;
    }
    Ok(())
}

// ── Playfield ────────────────────────────────────────────────────────────────

fn draw_playfield<W: Write>(
    out: &mut W,
    state: &GameState,
    vp: Viewport,
    alpha: u8,
) -> std::io::Result<()> {
    for word in &state.words {
        draw_word(out, word, &state.arena, vp, alpha)?;
    }
    for particle in &state.particles {
        draw_particle(out, particle, &state.arena, vp, alpha)?;
    }
    Ok(())
}

fn draw_word<W: Write>(
    out: &mut W,
    word: &FallingWord,
    arena: &Arena,
    vp: Viewport,
    alpha: u8,
) -> std::io::Result<()> {
    if let Some((col, row)) = vp.cell(arena, word.x, word.y) {
        put(out, col, row, word.text, fade(word.color, alpha))?;
    }
    Ok(())
}

fn draw_particle<W: Write>(
    out: &mut W,
    particle: &Particle,
    arena: &Arena,
    vp: Viewport,
    alpha: u8,
) -> std::io::Result<()> {
    let Some((col, row)) = vp.cell(arena, particle.x, particle.y) else {
        return Ok(());
    };
    let life_alpha = particle.alpha();
    let glyph = match life_alpha {
        170..=255 => "*",
        85..=169 => "+",
        _ => ".",
    };
    let shown = ((life_alpha as u16 * alpha as u16) / 255) as u8;
    put(out, col, row, glyph, fade(particle.color, shown))
}

fn draw_input_box<W: Write>(out: &mut W, input: &str, vp: Viewport) -> std::io::Result<()> {
    if vp.rows < 4 {
        return Ok(());
    }
    let top = vp.rows - 3;
    let text = format!("Type: {}", input);
    let width = (text.chars().count() as u16 + 4).max(28).min(vp.cols.saturating_sub(2));
    draw_box(out, 1, top, width, 3, palette::LIGHT_BLUE)?;
    put(out, 3, top + 1, &text, palette::LAVENDER)
}

// ── HUD ──────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, vp: Viewport) -> std::io::Result<()> {
    let s = &state.session;

    // Level and words typed — left
    put(out, 1, 0, &format!("Lvl {}", s.level), palette::WHITE)?;
    put(out, 1, 1, &s.words_typed.to_string(), palette::MINT)?;

    // Score and combo — right
    let score = s.score.to_string();
    let sx = vp.cols.saturating_sub(score.chars().count() as u16 + 1);
    put(out, sx, 0, &score, palette::WHITE)?;
    if s.combo > 0 {
        let combo = format!("{}x", s.combo);
        let cx = vp.cols.saturating_sub(combo.chars().count() as u16 + 1);
        put(out, cx, 1, &combo, combo_color(s.combo))?;
    }

    // Elapsed time — centre
    centred(out, vp, 0, &format!("{}s", s.elapsed as u64), palette::SKY_BLUE)?;

    // Progress toward the next level
    if let Some(progress) = level_progress(s.elapsed) {
        centred(out, vp, 1, &progress_bar(progress, 10), palette::LIGHT_BLUE)?;
    }
    Ok(())
}

/// `[████      ]`-style bar, `cells` wide inside the brackets.
pub fn progress_bar(progress: f64, cells: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * cells as f64) as usize).min(cells);
    format!("[{}{}]", "█".repeat(filled), " ".repeat(cells - filled))
}

// ── Pause overlay ────────────────────────────────────────────────────────────

fn draw_pause_overlay<W: Write>(out: &mut W, state: &GameState, vp: Viewport) -> std::io::Result<()> {
    let mid = vp.rows / 2;
    centred(out, vp, mid.saturating_sub(3), "PAUSED", palette::GOLD)?;
    let time = format!("Time: {}s", state.session.elapsed as u64);
    centred(out, vp, mid.saturating_sub(1), &time, palette::SKY_BLUE)?;
    centred(out, vp, mid + 1, "ESC: Resume", palette::LAVENDER)?;
    centred(out, vp, mid + 2, "M: Main Menu", palette::SALMON)?;
    Ok(())
}

// ── Game-over screen ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    vp: Viewport,
    blink_on: bool,
) -> std::io::Result<()> {
    let s = &state.session;
    let r = &state.record;

    centred(out, vp, layout_row(vp, 50.0), "GAME OVER", palette::CORAL)?;

    let top = layout_row(vp, 120.0);
    draw_box(out, 4, top, vp.cols.saturating_sub(8), 10, palette::LIGHT_BLUE)?;

    let left = [
        (format!("Score: {}", s.score), palette::LIME),
        (format!("Words: {}", s.words_typed), palette::SKY_BLUE),
        (format!("Combo: {}x", s.max_combo), palette::CORAL),
        (format!("Time: {:.2}s", s.elapsed), palette::TEAL),
    ];
    let right = [
        (format!("High Score: {}", r.score), palette::GOLD),
        (format!("Best Words: {}", r.words), palette::PURPLE),
        (format!("Level: {}", s.level), palette::MINT),
        (format!("Best Time: {}", best_time(r)), palette::LIGHT_BLUE),
    ];

    let quarter = vp.cols / 4;
    for (i, ((l, lc), (rt, rc))) in left.iter().zip(right.iter()).enumerate() {
        let row = top + 1 + 2 * i as u16;
        let lx = quarter.saturating_sub(l.chars().count() as u16 / 2);
        let rx = (3 * quarter).saturating_sub(rt.chars().count() as u16 / 2);
        put(out, lx.max(6), row, l, *lc)?;
        put(out, rx, row, rt, *rc)?;
    }

    let hint_row = (top + 11).max(layout_row(vp, 480.0));
    if blink_on {
        centred(out, vp, hint_row, "ENTER: Play Again", palette::LIME)?;
    }
    centred(out, vp, hint_row + 1, "ESC: Main Menu", palette::LAVENDER)?;
    Ok(())
}
