//! The built-in word pool.

use crate::entities::{palette, Rgb};

/// Every word that can fall.  Duplicates are kept; they make a word more likely.
pub const WORD_POOL: &[&str] = &[
    "cat", "dog", "run", "sun", "code", "game", "type", "word", "key", "fun",
    "box", "zoo", "car", "map", "cup", "hat", "pen", "jam", "fox", "log",
    "python", "typing", "shooter", "keyboard", "display", "program", "develop",
    "rocket", "basket", "garden", "window", "monitor", "laptop", "digital",
    "algorithm", "mechanics", "keyboard", "challenge", "adventure", "programming",
    "beautiful", "dangerous", "happiness", "knowledge", "mountain", "quickly",
];

/// Short words are mint, medium sky blue, long coral.
pub fn color_for(word: &str) -> Rgb {
    match word.chars().count() {
        0..=4 => palette::MINT,
        5..=7 => palette::SKY_BLUE,
        _ => palette::CORAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_lowercase_ascii() {
        assert!(WORD_POOL
            .iter()
            .all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn color_buckets() {
        assert_eq!(color_for("code"), palette::MINT);
        assert_eq!(color_for("rocket"), palette::SKY_BLUE);
        assert_eq!(color_for("develop"), palette::SKY_BLUE);
        assert_eq!(color_for("keyboard"), palette::CORAL);
    }
}
