use rand::rngs::StdRng;
use rand::SeedableRng;

use word_shutter::compute::{begin_countdown, reset_session};
use word_shutter::config::Arena;
use word_shutter::display::{combo_color, fade, progress_bar, render, Viewport};
use word_shutter::entities::*;
use word_shutter::highscores::HighScoreRecord;

fn vp() -> Viewport {
    Viewport::new(80, 24)
}

fn frame(state: &GameState, now: f64) -> String {
    let mut out = Vec::new();
    render(&mut out, state, vp(), now, &mut StdRng::seed_from_u64(7)).unwrap();
    String::from_utf8(out).unwrap()
}

fn state_with_record() -> GameState {
    GameState::new(
        Arena::default(),
        HighScoreRecord {
            score: 120,
            words: 9,
            least_time: Some(33.0),
        },
    )
}

#[test]
fn start_screen_shows_title_and_record() {
    let text = frame(&state_with_record(), 0.0);
    assert!(text.contains("WORD SHUTTER"));
    assert!(text.contains("High Score: 120 | Words: 9 | Best Time: 33.00s"));
    assert!(text.contains("Press ENTER to Start"));
}

#[test]
fn start_prompt_blinks() {
    let text = frame(&state_with_record(), 0.5);
    assert!(!text.contains("Press ENTER to Start"));
}

#[test]
fn unset_best_time_shows_dashes() {
    let s = GameState::new(Arena::default(), HighScoreRecord::default());
    assert!(frame(&s, 0.0).contains("Best Time: --"));
}

#[test]
fn countdown_shows_remaining_seconds() {
    let mut s = state_with_record();
    begin_countdown(&mut s, 0.0);
    let text = frame(&s, 0.0);
    assert!(text.contains("Get Ready!"));
    assert!(text.contains('3'));
}

#[test]
fn playing_screen_shows_hud_words_and_input() {
    let mut s = state_with_record();
    reset_session(&mut s, 0.0);
    s.screen = Screen::Playing;
    s.session.score = 345;
    s.session.combo = 4;
    s.input.push_str("roc");
    s.words.push(FallingWord {
        text: "rocket",
        x: 200.0,
        y: 100.0,
        speed: 0.6,
        color: palette::SKY_BLUE,
        width: 60.0,
    });

    let text = frame(&s, 1.0);
    assert!(text.contains("Lvl 1"));
    assert!(text.contains("345"));
    assert!(text.contains("4x"));
    assert!(text.contains("rocket"));
    assert!(text.contains("Type: roc"));
}

#[test]
fn words_below_the_screen_are_not_drawn() {
    let mut s = state_with_record();
    reset_session(&mut s, 0.0);
    s.screen = Screen::Playing;
    s.words.push(FallingWord {
        text: "mountain",
        x: 200.0,
        y: 650.0,
        speed: 0.6,
        color: palette::CORAL,
        width: 80.0,
    });
    assert!(!frame(&s, 1.0).contains("mountain"));
}

#[test]
fn pause_overlay_lists_options() {
    let mut s = state_with_record();
    reset_session(&mut s, 0.0);
    s.screen = Screen::Paused;
    let text = frame(&s, 1.0);
    assert!(text.contains("PAUSED"));
    assert!(text.contains("ESC: Resume"));
    assert!(text.contains("M: Main Menu"));
}

#[test]
fn game_over_shows_both_stat_columns() {
    let mut s = state_with_record();
    reset_session(&mut s, 0.0);
    s.screen = Screen::GameOver;
    s.session.score = 88;
    s.session.max_combo = 5;
    s.session.elapsed = 47.0;
    let text = frame(&s, 0.0);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Score: 88"));
    assert!(text.contains("Combo: 5x"));
    assert!(text.contains("Time: 47.00s"));
    assert!(text.contains("High Score: 120"));
    assert!(text.contains("ENTER: Play Again"));
    assert!(text.contains("ESC: Main Menu"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut s = state_with_record();
    for screen in [
        Screen::NotStarted,
        Screen::Countdown,
        Screen::Playing,
        Screen::Paused,
        Screen::GameOver,
    ] {
        s.screen = screen;
        let mut out = Vec::new();
        render(&mut out, &s, Viewport::new(1, 1), 0.0, &mut StdRng::seed_from_u64(1)).unwrap();
    }
}

#[test]
fn viewport_scales_arena_to_cells() {
    let arena = Arena::default();
    assert_eq!(vp().cell(&arena, 0.0, 0.0), Some((0, 0)));
    assert_eq!(vp().cell(&arena, 400.0, 300.0), Some((40, 12)));
    assert_eq!(vp().cell(&arena, 400.0, 600.0), None);
    assert_eq!(vp().cell(&arena, -5.0, 10.0), None);
}

#[test]
fn progress_bar_fills_proportionally() {
    assert_eq!(progress_bar(0.0, 4), "[    ]");
    assert_eq!(progress_bar(0.5, 4), "[██  ]");
    assert_eq!(progress_bar(1.5, 4), "[████]");
}

#[test]
fn fade_blends_toward_background() {
    assert_eq!(fade(palette::WHITE, 255), palette::WHITE);
    assert_eq!(fade(palette::WHITE, 0), palette::DARK_BLUE);
}

#[test]
fn combo_color_saturates() {
    assert_eq!(combo_color(1), Rgb(110, 205, 100));
    assert_eq!(combo_color(50), Rgb(255, 255, 100));
}
