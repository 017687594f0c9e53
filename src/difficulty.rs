//! Difficulty curve: level and fall speed as functions of played time.

/// Seconds of play before the level starts climbing.
pub const WARMUP_SECS: f64 = 30.0;
/// Seconds per level after the warm-up.
pub const SECS_PER_LEVEL: f64 = 15.0;
pub const MAX_LEVEL: u32 = 20;

pub const BASE_SPEED: f32 = 0.5;
pub const SPEED_PER_LEVEL: f32 = 0.02;
pub const SPEED_PER_LETTER: f32 = 0.02;

pub const MAX_SPAWN_INTERVAL: f64 = 2.0;
pub const MIN_SPAWN_INTERVAL: f64 = 0.5;
pub const SPAWN_INTERVAL_STEP: f64 = 0.05;

/// Level reached after `elapsed` seconds of play, in `1..=MAX_LEVEL`.
pub fn level_at(elapsed: f64) -> u32 {
    if elapsed < WARMUP_SECS {
        return 1;
    }
    let steps = ((elapsed - WARMUP_SECS) / SECS_PER_LEVEL).floor() as u32;
    (1 + steps).min(MAX_LEVEL)
}

/// `(level, base_speed)` for `elapsed` seconds of play.
pub fn difficulty_at(elapsed: f64) -> (u32, f32) {
    if elapsed < WARMUP_SECS {
        return (1, BASE_SPEED);
    }
    let level = level_at(elapsed);
    (level, BASE_SPEED + level as f32 * SPEED_PER_LEVEL)
}

/// Minimum gap between two spawns at `level`.
pub fn spawn_interval(level: u32) -> f64 {
    (MAX_SPAWN_INTERVAL - level as f64 * SPAWN_INTERVAL_STEP).max(MIN_SPAWN_INTERVAL)
}

/// Fall speed of a freshly spawned word with `letters` characters.
pub fn word_speed(base_speed: f32, level: u32, letters: usize) -> f32 {
    base_speed + level as f32 * SPEED_PER_LEVEL + letters as f32 * SPEED_PER_LETTER
}

/// Fraction of the way to the next level, shown once the warm-up is over.
pub fn level_progress(elapsed: f64) -> Option<f64> {
    if elapsed <= WARMUP_SECS {
        return None;
    }
    Some((((elapsed - WARMUP_SECS) % SECS_PER_LEVEL) / SECS_PER_LEVEL).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn warmup_is_level_one() {
        assert_eq!(difficulty_at(0.0), (1, 0.5));
        assert_eq!(difficulty_at(29.99), (1, 0.5));
    }

    #[test]
    fn first_step_after_warmup() {
        // Level 1 again at exactly 30s, but speed now includes the level term.
        let (level, speed) = difficulty_at(30.0);
        assert_eq!(level, 1);
        assert!((speed - 0.52).abs() < 1e-6);
        assert_eq!(level_at(45.0), 2);
    }

    #[test]
    fn level_caps_at_twenty() {
        assert_eq!(level_at(30.0 + 19.0 * 15.0), 20);
        assert_eq!(level_at(10_000.0), 20);
        let (_, speed) = difficulty_at(10_000.0);
        assert!((speed - 0.9).abs() < 1e-6);
    }

    #[test]
    fn spawn_interval_shrinks_to_floor() {
        assert!((spawn_interval(1) - 1.95).abs() < 1e-9);
        assert!((spawn_interval(2) - 1.9).abs() < 1e-9);
        assert!((spawn_interval(20) - 1.0).abs() < 1e-9);
        assert_eq!(spawn_interval(40), MIN_SPAWN_INTERVAL);
    }

    #[test]
    fn longer_words_fall_faster() {
        let short = word_speed(0.5, 1, 3);
        let long = word_speed(0.5, 1, 9);
        assert!((short - 0.58).abs() < 1e-6);
        assert!(long > short);
    }

    #[test]
    fn progress_only_after_warmup() {
        assert_eq!(level_progress(30.0), None);
        let p = level_progress(37.5).unwrap();
        assert!((p - 0.5).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn level_is_bounded(t in 0.0f64..100_000.0) {
            let level = level_at(t);
            prop_assert!((1..=MAX_LEVEL).contains(&level));
        }

        #[test]
        fn level_is_monotonic(a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_at(lo) <= level_at(hi));
        }
    }
}
