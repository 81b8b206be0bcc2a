//! Word lists
//!
//! Provides the embedded default word list and lexicon loaders.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_tokens() {
        for &word in DEFAULT_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_list_covers_default_board_words() {
        for word in ["lent", "bent", "cape", "leap"] {
            assert!(DEFAULT_WORDS.contains(&word), "missing {word}");
        }
    }
}
