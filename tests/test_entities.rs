use word_shutter::config::Arena;
use word_shutter::entities::*;
use word_shutter::highscores::HighScoreRecord;

#[test]
fn fresh_state_waits_on_start_screen() {
    let record = HighScoreRecord {
        score: 120,
        words: 9,
        least_time: Some(33.0),
    };
    let s = GameState::new(Arena::default(), record);
    assert_eq!(s.screen, Screen::NotStarted);
    assert!(s.words.is_empty());
    assert!(s.particles.is_empty());
    assert!(s.input.is_empty());
    assert_eq!(s.record, record);
}

#[test]
fn default_session_is_level_one() {
    let session = GameSession::default();
    assert_eq!(session.level, 1);
    assert_eq!(session.base_speed, 0.5);
    assert_eq!(session.score, 0);
    assert_eq!(session.combo, 0);
    assert_eq!(session.last_spawn, None);
}

#[test]
fn started_session_keeps_only_start_time() {
    let session = GameSession::started_at(42.5);
    assert_eq!(session.start_time, 42.5);
    assert_eq!(
        GameSession {
            start_time: 0.0,
            ..session
        },
        GameSession::default()
    );
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::new(Arena::default(), HighScoreRecord::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.session.score = 999;
    cloned.input.push_str("cat");
    cloned.words.push(FallingWord {
        text: "cat",
        x: 50.0,
        y: 0.0,
        speed: 0.6,
        color: palette::MINT,
        width: 30.0,
    });

    assert_eq!(original.session.score, 0);
    assert!(original.input.is_empty());
    assert!(original.words.is_empty());
}
