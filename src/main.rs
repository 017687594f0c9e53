use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Result;
use crossterm::{cursor, event, event::Event, terminal, ExecutableCommand};
use rand::thread_rng;

use word_shutter::audio::{AudioManager, Cue};
use word_shutter::compute::{handle_command, set_arena, tick};
use word_shutter::config::{self, Arena, FRAME, LOG_FILE};
use word_shutter::display::{self, Viewport};
use word_shutter::input::map_event;
use word_shutter::{Command, GameEvent, GameState, HighScoreRecord};

// ── Logging ───────────────────────────────────────────────────────────────────

/// Send log output to a file; stderr would scribble over the game screen.
/// Silently runs without logging if the file cannot be opened.
fn init_logging() {
    let path = config::data_dir().join(LOG_FILE);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Perform the side effects the simulation asked for.
fn apply_events(
    events: &mut Vec<GameEvent>,
    state: &GameState,
    audio: &AudioManager,
    score_path: &Path,
) {
    for event in events.drain(..) {
        if let Some(cue) = Cue::for_event(&event) {
            audio.play(cue);
        }
        match event {
            GameEvent::RecordImproved => {
                if let Err(e) = state.record.save(score_path) {
                    log::warn!("Could not save high scores: {}", e);
                }
            }
            GameEvent::GameOver => log::info!(
                "Best: score {} words {} time {}",
                state.record.score,
                state.record.words,
                state.record.least_time.map_or("--".to_string(), |t| format!("{:.2}s", t))
            ),
            _ => {}
        }
    }
}

/// Runs until the player quits.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let mut rng = thread_rng();
    let score_path = config::score_path();
    let audio = AudioManager::new();

    let (cols, rows) = terminal::size()?;
    let mut state = GameState::new(Arena::for_terminal(cols), HighScoreRecord::load(&score_path));
    let mut events: Vec<GameEvent> = Vec::new();
    let clock = Instant::now();

    loop {
        let frame_start = Instant::now();
        let now = clock.elapsed().as_secs_f64();

        // ── Input ─────────────────────────────────────────────────────────────
        while let Ok(ev) = rx.try_recv() {
            match map_event(&ev) {
                Some(Command::Quit) => return Ok(()),
                Some(command) => handle_command(&mut state, command, now, &mut rng, &mut events),
                None => {}
            }
        }

        tick(&mut state, now, &mut rng, &mut events);
        apply_events(&mut events, &state, &audio, &score_path);

        let (cols, rows) = terminal::size().unwrap_or((cols, rows));
        set_arena(&mut state, Arena::for_terminal(cols));
        if let Err(e) = display::render(out, &state, Viewport::new(cols, rows), now, &mut rng) {
            log::debug!("Render failed: {}", e);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key reads block; keep them off the frame loop.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &rx);

    // Restore even when the loop failed.
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("Exiting on error: {:#}", e);
    }
    result
}
