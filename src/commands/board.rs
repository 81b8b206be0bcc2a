//! Board commands
//!
//! Locate a word, list every scorable word, and score a word list.

use crate::core::{Board, SearchError, normalize};
use crate::solver::WordSearchGame;
use std::collections::BTreeSet;

/// Minimum scorable word length used when none is given
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Where a word sits on the board
pub struct FindResult {
    pub word: String,
    pub path: Vec<usize>,
    pub board: Board,
}

impl FindResult {
    #[must_use]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Every scorable word on the board
pub struct WordsResult {
    pub min_length: usize,
    pub words: BTreeSet<String>,
    pub total_score: usize,
}

/// Points earned by one submitted word
pub struct ScoredWord {
    pub word: String,
    pub points: usize,
}

/// Score breakdown for a submitted word list
pub struct ScoreResult {
    pub min_length: usize,
    pub entries: Vec<ScoredWord>,
    pub total: usize,
}

/// Find the path spelling `word`
///
/// # Errors
///
/// Returns `SearchError::NotLoaded` if the game has no lexicon.
pub fn find_word(game: &WordSearchGame, word: &str) -> Result<FindResult, SearchError> {
    let path = game.is_on_board(word)?;
    Ok(FindResult {
        word: normalize(word),
        path,
        board: game.board().clone(),
    })
}

/// List every scorable word with its combined score
///
/// # Errors
///
/// Returns an error if `min_length` is zero or the game has no lexicon.
pub fn list_scorable_words(
    game: &WordSearchGame,
    min_length: usize,
) -> Result<WordsResult, SearchError> {
    let words = game.all_scorable_words(min_length)?;
    let total_score = game.score_for_words(&words, min_length)?;
    Ok(WordsResult {
        min_length,
        words,
        total_score,
    })
}

/// Score each distinct submitted word, in submission order
///
/// # Errors
///
/// Returns an error if `min_length` is zero or the game has no lexicon.
pub fn score_words<S: AsRef<str>>(
    game: &WordSearchGame,
    words: &[S],
    min_length: usize,
) -> Result<ScoreResult, SearchError> {
    let mut seen = BTreeSet::new();
    let mut entries = Vec::new();

    for word in words {
        let word = normalize(word.as_ref());
        if !seen.insert(word.clone()) {
            continue;
        }
        let points = game.score_for_words([&word], min_length)?;
        entries.push(ScoredWord { word, points });
    }

    Ok(ScoreResult {
        min_length,
        total: game.score_for_words(words, min_length)?,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lexicon;

    fn game() -> WordSearchGame {
        let lexicon: Lexicon = ["ale", "bent", "cape", "leap", "lent", "zebra"]
            .into_iter()
            .collect();
        WordSearchGame::with_lexicon(lexicon)
    }

    #[test]
    fn find_reports_path() {
        let result = find_word(&game(), "LENT").unwrap();
        assert!(result.found());
        assert_eq!(result.word, "lent");
        assert!(result.board.is_path_for(&result.path, "lent"));

        assert!(!find_word(&game(), "zebra").unwrap().found());
    }

    #[test]
    fn words_include_total_score() {
        let result = list_scorable_words(&game(), 4).unwrap();
        assert_eq!(result.words.len(), 4);
        assert_eq!(result.total_score, 4);

        let result = list_scorable_words(&game(), 3).unwrap();
        // ale: 1, four-letter words: 2 each
        assert_eq!(result.total_score, 9);
    }

    #[test]
    fn score_breakdown_matches_total() {
        let result = score_words(&game(), &["lent", "LENT", "zebra", "ale", "cape"], 3).unwrap();
        let words: Vec<&str> = result.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["lent", "zebra", "ale", "cape"]);

        let points: Vec<usize> = result.entries.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![2, 0, 1, 2]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn zero_min_length_is_an_error() {
        assert!(list_scorable_words(&game(), 0).is_err());
        assert!(score_words(&game(), &["lent"], 0).is_err());
    }
}
