//! All game entity types — pure data, no logic.

use crate::config::Arena;
use crate::highscores::HighScoreRecord;

/// 24-bit color; the display layer turns it into a terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub mod palette {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const DARK_BLUE: Rgb = Rgb(13, 19, 33);
    pub const PANEL: Rgb = Rgb(30, 40, 50);
    pub const LIGHT_BLUE: Rgb = Rgb(100, 149, 237);
    pub const TEAL: Rgb = Rgb(0, 128, 128);
    pub const GOLD: Rgb = Rgb(255, 215, 0);
    pub const CORAL: Rgb = Rgb(255, 127, 80);
    pub const LAVENDER: Rgb = Rgb(230, 230, 250);
    pub const MINT: Rgb = Rgb(189, 252, 201);
    pub const SALMON: Rgb = Rgb(250, 128, 114);
    pub const PURPLE: Rgb = Rgb(147, 112, 219);
    pub const LIME: Rgb = Rgb(50, 205, 50);
    pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
}

/// Which of the five screens is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    NotStarted,
    Countdown,
    Playing,
    Paused,
    GameOver,
}

/// Player intent, decoded from raw key events by `input::map_key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Enter: start, submit, play again.
    Confirm,
    /// Escape: pause/resume, leave the game-over screen.
    Cancel,
    Backspace,
    Char(char),
}

/// A word falling through the arena.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingWord {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    /// Logical pixels per tick.
    pub speed: f32,
    pub color: Rgb,
    /// Rendered width, measured once at spawn.
    pub width: f32,
}

/// One spark of a match explosion.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Ticks left to live.
    pub life: i32,
    pub color: Rgb,
}

impl Particle {
    /// Opacity derived from remaining life; fades out over the last ~42 ticks.
    pub fn alpha(&self) -> u8 {
        (self.life.max(0) * 6).min(255) as u8
    }
}

/// Per-session statistics and timers.  Timestamps are seconds on the
/// caller's monotonic clock.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub score: u32,
    pub words_typed: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub level: u32,
    pub base_speed: f32,
    /// Played time, excluding pauses.
    pub elapsed: f64,
    pub start_time: f64,
    pub pause_started: f64,
    pub pause_duration: f64,
    pub last_spawn: Option<f64>,
    /// Words spawned this session.
    pub words_spawned: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            score: 0,
            words_typed: 0,
            combo: 0,
            max_combo: 0,
            level: 1,
            base_speed: 0.5,
            elapsed: 0.0,
            start_time: 0.0,
            pause_started: 0.0,
            pause_duration: 0.0,
            last_spawn: None,
            words_spawned: 0,
        }
    }
}

impl GameSession {
    /// Fresh session whose clock starts at `now`.
    pub fn started_at(now: f64) -> Self {
        Self {
            start_time: now,
            ..Self::default()
        }
    }
}

/// Side effects requested by the simulation; the binary performs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A submitted word matched.
    Correct,
    /// A non-empty submission matched nothing.
    Mistake,
    /// One countdown step elapsed.
    CountdownTick,
    LevelUp { level: u32 },
    /// The high-score record changed and should be written out.
    RecordImproved,
    GameOver,
}

/// The entire game state, owned by the main loop.
#[derive(Clone, Debug)]
pub struct GameState {
    pub screen: Screen,
    /// Remaining countdown seconds while `screen == Countdown`.
    pub countdown: u32,
    pub last_countdown: f64,
    pub session: GameSession,
    pub words: Vec<FallingWord>,
    pub particles: Vec<Particle>,
    /// Text typed since the last submit.
    pub input: String,
    pub record: HighScoreRecord,
    pub arena: Arena,
}

impl GameState {
    pub fn new(arena: Arena, record: HighScoreRecord) -> Self {
        Self {
            screen: Screen::NotStarted,
            countdown: 0,
            last_countdown: 0.0,
            session: GameSession::default(),
            words: Vec::new(),
            particles: Vec::new(),
            input: String::new(),
            record,
            arena,
        }
    }
}
