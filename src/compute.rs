//! Game-logic functions.
//!
//! Every function mutates the parts of the `GameState` it owns and reports
//! side effects (sounds, record writes) as `GameEvent`s instead of performing
//! them.  Randomness comes through an injected RNG and time through an
//! explicit `now` (seconds on a monotonic clock), so tests drive both.

use rand::Rng;

use crate::config::{
    Arena, BASE_POINTS, COMBO_BONUS, COMBO_THRESHOLD, COUNTDOWN_START, PARTICLES_PER_EXPLOSION,
    PARTICLE_LIFE_MAX, PARTICLE_LIFE_MIN, PARTICLE_SCATTER, POINTS_PER_LETTER, SPAWN_MARGIN,
};
use crate::difficulty::{difficulty_at, spawn_interval, word_speed};
use crate::entities::{
    Command, FallingWord, GameEvent, GameSession, GameState, Particle, Rgb, Screen,
};
use crate::words::{color_for, WORD_POOL};

// ── Scoring ──────────────────────────────────────────────────────────────────

/// Points for one matched word of `letters` characters, given the combo
/// value after this match was counted.
pub fn word_points(letters: usize, combo: u32) -> u32 {
    let base = BASE_POINTS + POINTS_PER_LETTER * letters as u32;
    if combo >= COMBO_THRESHOLD {
        base + COMBO_BONUS * combo
    } else {
        base
    }
}

// ── Difficulty ───────────────────────────────────────────────────────────────

/// Refresh elapsed time, level and base speed.  Returns the new level if it
/// went up.
pub fn update_difficulty(session: &mut GameSession, now: f64) -> Option<u32> {
    session.elapsed = (now - session.start_time - session.pause_duration).max(0.0);
    let previous = session.level;
    let (level, base_speed) = difficulty_at(session.elapsed);
    session.level = level;
    session.base_speed = base_speed;
    (level > previous).then_some(level)
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Build a falling word for `text` at the top of the arena.
pub fn make_word(
    text: &'static str,
    session: &GameSession,
    arena: &Arena,
    rng: &mut impl Rng,
) -> FallingWord {
    let width = arena.text_width(text);
    let lo = SPAWN_MARGIN as i32;
    let hi = (arena.width - width - SPAWN_MARGIN).floor() as i32;
    let x = if hi >= lo { rng.gen_range(lo..=hi) } else { lo };

    FallingWord {
        text,
        x: x as f32,
        y: 0.0,
        speed: word_speed(session.base_speed, session.level, text.chars().count()),
        color: color_for(text),
        width,
    }
}

/// Spawn one random word unless the previous spawn was too recent.
/// Returns whether a word was added.
pub fn try_spawn(
    session: &mut GameSession,
    words: &mut Vec<FallingWord>,
    arena: &Arena,
    now: f64,
    rng: &mut impl Rng,
) -> bool {
    if let Some(last) = session.last_spawn {
        if now - last < spawn_interval(session.level) {
            return false;
        }
    }

    let text = WORD_POOL[rng.gen_range(0..WORD_POOL.len())];
    words.push(make_word(text, session, arena, rng));
    session.words_spawned += 1;
    session.last_spawn = Some(now);
    true
}

// ── Motion ───────────────────────────────────────────────────────────────────

/// Let every word fall one tick.  Words that dropped below `floor` are
/// removed; returns how many did.
pub fn advance_words(words: &mut Vec<FallingWord>, floor: f32) -> usize {
    let before = words.len();
    words.retain_mut(|w| {
        w.y += w.speed;
        w.y <= floor
    });
    before - words.len()
}

// ── Particles ────────────────────────────────────────────────────────────────

/// Burst of sparks centred on (`x`, `y`).
pub fn explode(particles: &mut Vec<Particle>, x: f32, y: f32, color: Rgb, rng: &mut impl Rng) {
    particles.extend((0..PARTICLES_PER_EXPLOSION).map(|_| Particle {
        x: x + rng.gen_range(-PARTICLE_SCATTER..=PARTICLE_SCATTER) as f32,
        y: y + rng.gen_range(-PARTICLE_SCATTER..=PARTICLE_SCATTER) as f32,
        vx: rng.gen_range(-3.0..3.0),
        vy: rng.gen_range(-8.0..-2.0),
        life: rng.gen_range(PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX),
        color,
    }));
}

pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.x += p.vx;
        p.y += p.vy;
        p.life -= 1;
        p.life > 0
    });
}

// ── Session lifecycle ────────────────────────────────────────────────────────

pub fn begin_countdown(state: &mut GameState, now: f64) {
    state.screen = Screen::Countdown;
    state.countdown = COUNTDOWN_START;
    state.last_countdown = now;
}

/// Zero the session and start its clock at `now`.
pub fn reset_session(state: &mut GameState, now: f64) {
    state.session = GameSession::started_at(now);
    state.words.clear();
    state.particles.clear();
    state.input.clear();
}

/// Switch to a new text metric, re-measuring the words already falling and
/// pulling back any that would now stick out of the right wall.
pub fn set_arena(state: &mut GameState, arena: Arena) {
    if state.arena == arena {
        return;
    }
    for w in &mut state.words {
        w.width = arena.text_width(w.text);
        w.x = w.x.min((arena.width - w.width).max(0.0));
    }
    state.arena = arena;
}

fn update_countdown(state: &mut GameState, now: f64, events: &mut Vec<GameEvent>) {
    if now - state.last_countdown > 1.0 {
        state.countdown = state.countdown.saturating_sub(1);
        state.last_countdown = now;
        if state.countdown > 0 {
            events.push(GameEvent::CountdownTick);
        }
    }
    if state.countdown == 0 {
        reset_session(state, now);
        state.screen = Screen::Playing;
        log::debug!("Session started");
    }
}

fn record_session(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.record.absorb(&state.session) {
        events.push(GameEvent::RecordImproved);
    }
}

fn pause(state: &mut GameState, now: f64) {
    state.screen = Screen::Paused;
    state.session.pause_started = now;
}

fn resume(state: &mut GameState, now: f64) {
    state.screen = Screen::Playing;
    state.session.pause_duration += now - state.session.pause_started;
}

// ── Typing ───────────────────────────────────────────────────────────────────

pub fn type_char(state: &mut GameState, c: char) {
    if c.is_control() {
        return;
    }
    state.input.extend(c.to_lowercase());
}

pub fn backspace(state: &mut GameState) {
    state.input.pop();
}

/// Check the typed text against every active word.  All words spelled
/// exactly like the input are cleared in this one submit.  The input is
/// always emptied.  Returns the number of words matched.
pub fn submit(state: &mut GameState, rng: &mut impl Rng, events: &mut Vec<GameEvent>) -> usize {
    let typed = std::mem::take(&mut state.input);
    if typed.is_empty() {
        return 0;
    }

    let (hits, rest): (Vec<FallingWord>, Vec<FallingWord>) = std::mem::take(&mut state.words)
        .into_iter()
        .partition(|w| w.text == typed);
    state.words = rest;

    if hits.is_empty() {
        state.session.combo = 0;
        events.push(GameEvent::Mistake);
        return 0;
    }

    let session = &mut state.session;
    for word in &hits {
        session.words_typed += 1;
        session.combo += 1;
        session.max_combo = session.max_combo.max(session.combo);
        session.score += word_points(word.text.chars().count(), session.combo);
        explode(
            &mut state.particles,
            word.x + word.width / 2.0,
            word.y + 10.0,
            word.color,
            rng,
        );
        events.push(GameEvent::Correct);
    }

    record_session(state, events);
    hits.len()
}

// ── Input dispatch ───────────────────────────────────────────────────────────

/// Apply one player command to the screen state machine.
pub fn handle_command(
    state: &mut GameState,
    command: Command,
    now: f64,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    match (state.screen, command) {
        (_, Command::Quit) => {}
        (Screen::NotStarted, Command::Confirm) => begin_countdown(state, now),
        (Screen::Countdown, _) => {}
        (Screen::GameOver, Command::Confirm) => begin_countdown(state, now),
        (Screen::GameOver, Command::Cancel) => state.screen = Screen::NotStarted,
        (Screen::Playing, Command::Cancel) => pause(state, now),
        (Screen::Playing, Command::Confirm) => {
            submit(state, rng, events);
        }
        (Screen::Playing, Command::Backspace) => backspace(state),
        (Screen::Playing, Command::Char(c)) => type_char(state, c),
        (Screen::Paused, Command::Cancel) => resume(state, now),
        (Screen::Paused, Command::Char('m' | 'M')) => state.screen = Screen::NotStarted,
        _ => {}
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
pub fn tick(state: &mut GameState, now: f64, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
    match state.screen {
        Screen::Countdown => update_countdown(state, now, events),
        Screen::Playing => {
            if let Some(level) = update_difficulty(&mut state.session, now) {
                log::info!("Level up: {}", level);
                events.push(GameEvent::LevelUp { level });
            }
            try_spawn(&mut state.session, &mut state.words, &state.arena, now, rng);

            let missed = advance_words(&mut state.words, state.arena.height);
            update_particles(&mut state.particles);

            if missed > 0 {
                state.screen = Screen::GameOver;
                log::info!(
                    "Game over: score {} words {} time {:.2}s",
                    state.session.score,
                    state.session.words_typed,
                    state.session.elapsed
                );
                events.push(GameEvent::GameOver);
                record_session(state, events);
            }
        }
        Screen::NotStarted | Screen::Paused | Screen::GameOver => {}
    }
}
