//! Board word-search game
//!
//! Finds dictionary words traceable as simple paths of adjacent cells, and scores
//! word lists against the board.

use super::explore::{Step, explore};
use crate::core::{Board, Lexicon, SearchError, normalize};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Board search engine
///
/// Owns its board and, once loaded, its lexicon. Each query walks the board with a
/// private path stack, so a shared `&WordSearchGame` can serve many readers.
#[derive(Debug, Clone, Default)]
pub struct WordSearchGame {
    lexicon: Option<Lexicon>,
    board: Board,
}

impl WordSearchGame {
    /// A game on the default 4×4 board with no lexicon loaded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A game on the default board with `lexicon` already in place
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Some(lexicon),
            board: Board::default(),
        }
    }

    /// Load the lexicon from a word file, replacing any previous one
    ///
    /// # Errors
    /// Returns `SearchError::InvalidSource` if the file cannot be read. The previous
    /// lexicon, if any, is kept in that case.
    pub fn load_lexicon<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SearchError> {
        self.lexicon = Some(Lexicon::load_from_file(path)?);
        Ok(())
    }

    /// Replace the board with `cells`, given in row-major order
    ///
    /// # Errors
    /// Returns `SearchError::NonSquareBoard` or `SearchError::InvalidArgument` for a
    /// malformed board; the current board is left untouched.
    pub fn set_board<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<(), SearchError> {
        self.board = Board::new(cells)?;
        Ok(())
    }

    /// Install an already-built board
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The loaded lexicon
    ///
    /// # Errors
    /// Returns `SearchError::NotLoaded` before a lexicon has been set.
    pub fn lexicon(&self) -> Result<&Lexicon, SearchError> {
        self.lexicon.as_ref().ok_or(SearchError::NotLoaded)
    }

    /// Whether `word` is in the lexicon, ignoring case
    ///
    /// # Errors
    /// Returns `SearchError::NotLoaded` before a lexicon has been set.
    pub fn is_valid_word(&self, word: &str) -> Result<bool, SearchError> {
        Ok(self.lexicon()?.contains(&normalize(word)))
    }

    /// Whether some lexicon word starts with `prefix`, ignoring case
    ///
    /// # Errors
    /// Returns `SearchError::NotLoaded` before a lexicon has been set.
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, SearchError> {
        Ok(self.lexicon()?.has_prefix(&normalize(prefix)))
    }

    /// Path of cell indices spelling `word`, or an empty path if it is not on the board
    ///
    /// Start cells are tried in row-major order and neighbours in ascending index
    /// order; the first complete match wins. The word need not be in the lexicon.
    ///
    /// # Errors
    /// Returns `SearchError::NotLoaded` before a lexicon has been set.
    ///
    /// # Examples
    /// ```
    /// use lexisearch::core::Lexicon;
    /// use lexisearch::solver::WordSearchGame;
    ///
    /// let mut game = WordSearchGame::with_lexicon(["ate"].into_iter().collect::<Lexicon>());
    /// game.set_board(&["A", "T", "E", "R"]).unwrap();
    ///
    /// assert_eq!(game.is_on_board("ATE").unwrap(), vec![0, 1, 2]);
    /// assert!(game.is_on_board("TEA!").unwrap().is_empty());
    /// ```
    pub fn is_on_board(&self, word: &str) -> Result<Vec<usize>, SearchError> {
        self.lexicon()?;
        Ok(self.find_word_path(&normalize(word)))
    }

    fn find_word_path(&self, word: &str) -> Vec<usize> {
        if word.is_empty() {
            return Vec::new();
        }

        (0..self.board.len())
            .find_map(|start| {
                explore(&self.board, start, |text, _| {
                    if text == word {
                        Step::Halt
                    } else if word.starts_with(text) {
                        Step::Descend
                    } else {
                        Step::Prune
                    }
                })
            })
            .unwrap_or_default()
    }

    /// Every lexicon word of at least `min_length` characters that is on the board
    ///
    /// # Errors
    /// - `SearchError::InvalidArgument` if `min_length` is zero
    /// - `SearchError::NotLoaded` before a lexicon has been set
    pub fn all_scorable_words(&self, min_length: usize) -> Result<BTreeSet<String>, SearchError> {
        check_min_length(min_length)?;
        let lexicon = self.lexicon()?;

        let mut found = BTreeSet::new();
        for start in 0..self.board.len() {
            explore(&self.board, start, |text, _| {
                if text.chars().count() >= min_length && lexicon.contains(text) {
                    found.insert(text.to_string());
                }
                if lexicon.has_prefix(text) {
                    Step::Descend
                } else {
                    Step::Prune
                }
            });
        }
        Ok(found)
    }

    /// Total score of `words` on this board
    ///
    /// Each distinct word that is long enough, in the lexicon, and on the board
    /// earns `1 + (length - min_length)` points. Anything else earns nothing.
    ///
    /// # Errors
    /// - `SearchError::InvalidArgument` if `min_length` is zero
    /// - `SearchError::NotLoaded` before a lexicon has been set
    pub fn score_for_words<I, S>(&self, words: I, min_length: usize) -> Result<usize, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_min_length(min_length)?;
        let lexicon = self.lexicon()?;

        let distinct: FxHashSet<String> = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .collect();

        Ok(distinct
            .iter()
            .filter_map(|word| {
                let length = word.chars().count();
                let scorable = length >= min_length
                    && lexicon.contains(word)
                    && !self.find_word_path(word).is_empty();
                scorable.then(|| 1 + length - min_length)
            })
            .sum())
    }
}

fn check_min_length(min_length: usize) -> Result<(), SearchError> {
    if min_length == 0 {
        return Err(SearchError::InvalidArgument(
            "minimum word length must be at least 1".to_string(),
        ));
    }
    Ok(())
}

impl fmt::Display for WordSearchGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "a", "al", "ale", "bent", "bet", "cap", "cape", "eel", "lea", "leap", "lent", "pal",
        "pale", "peal", "plea", "pope", "tent", "ten", "toy", "zebra",
    ];

    fn game() -> WordSearchGame {
        WordSearchGame::with_lexicon(WORDS.iter().collect())
    }

    fn words(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn queries_require_lexicon() {
        let game = WordSearchGame::new();
        assert!(matches!(game.is_on_board("lent"), Err(SearchError::NotLoaded)));
        assert!(matches!(game.all_scorable_words(3), Err(SearchError::NotLoaded)));
        assert!(matches!(
            game.score_for_words(["lent"], 3),
            Err(SearchError::NotLoaded)
        ));
        assert!(matches!(game.is_valid_word("lent"), Err(SearchError::NotLoaded)));
        assert!(matches!(game.is_valid_prefix("le"), Err(SearchError::NotLoaded)));
    }

    #[test]
    fn zero_min_length_rejected() {
        let game = game();
        assert!(matches!(
            game.all_scorable_words(0),
            Err(SearchError::InvalidArgument(_))
        ));
        assert!(matches!(
            game.score_for_words(["lent"], 0),
            Err(SearchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn missing_lexicon_file_keeps_state() {
        let mut game = game();
        assert!(game.load_lexicon("/no/such/lexicon.txt").is_err());
        assert!(game.is_valid_word("lent").unwrap());
    }

    #[test]
    fn bad_board_keeps_previous() {
        let mut game = game();
        assert!(matches!(
            game.set_board(&["a", "b", "c"]),
            Err(SearchError::NonSquareBoard(3))
        ));
        assert_eq!(game.board(), &Board::default());
    }

    #[test]
    fn word_and_prefix_checks_ignore_case() {
        let game = game();
        assert!(game.is_valid_word("LENT").unwrap());
        assert!(!game.is_valid_word("len").unwrap());
        assert!(game.is_valid_prefix("Le").unwrap());
        assert!(!game.is_valid_prefix("lx").unwrap());
    }

    #[test]
    fn finds_path_on_small_board() {
        let mut game = game();
        game.set_board(&["A", "T", "E", "R"]).unwrap();
        // A(0,0) T(1,0) E(0,1) R(1,1): every pair touches on a 2×2 board
        assert_eq!(game.is_on_board("ate").unwrap(), vec![0, 1, 2]);
        assert_eq!(game.is_on_board("tear").unwrap(), vec![1, 2, 0, 3]);
        assert!(game.is_on_board("tat").unwrap().is_empty());
        assert!(game.is_on_board("").unwrap().is_empty());
    }

    #[test]
    fn finds_path_on_default_board() {
        let game = game();
        let path = game.is_on_board("LENT").unwrap();
        assert!(game.board().is_path_for(&path, "lent"));
        assert!(game.is_on_board("POPE").unwrap().is_empty());
    }

    #[test]
    fn first_match_in_row_major_order_wins() {
        let mut game = game();
        game.set_board(&["b", "e", "e", "b"]).unwrap();
        assert_eq!(game.is_on_board("be").unwrap(), vec![0, 1]);
    }

    #[test]
    fn multi_letter_cells() {
        let mut game = game();
        game.set_board(&["qu", "i", "t", "e"]).unwrap();
        assert_eq!(game.is_on_board("quite").unwrap(), vec![0, 1, 2, 3]);
        assert!(game.is_on_board("q").unwrap().is_empty());
    }

    #[test]
    fn scorable_words_on_default_board() {
        let game = game();
        let found = game.all_scorable_words(4).unwrap();
        assert_eq!(words(&found), vec!["bent", "cape", "leap", "lent"]);

        for word in &found {
            assert!(word.chars().count() >= 4);
            let path = game.is_on_board(word).unwrap();
            assert!(game.board().is_path_for(&path, word));
        }
    }

    #[test]
    fn single_letter_words_need_min_length_one() {
        let game = game();
        assert!(game.all_scorable_words(1).unwrap().contains("a"));
        assert!(!game.all_scorable_words(2).unwrap().contains("a"));
    }

    #[test]
    fn three_letter_words_on_default_board() {
        let game = game();
        let found = game.all_scorable_words(3).unwrap();
        for word in ["ale", "cap", "eel", "lea", "toy"] {
            assert!(found.contains(word), "expected {word}");
        }
        for word in ["bet", "pal", "ten", "plea"] {
            assert!(!found.contains(word), "unexpected {word}");
        }
    }

    #[test]
    fn scorable_words_are_stable() {
        let game = game();
        assert_eq!(game.all_scorable_words(3).unwrap(), game.all_scorable_words(3).unwrap());
    }

    #[test]
    fn empty_board_scores_nothing() {
        let mut game = game();
        game.set_board::<&str>(&[]).unwrap();
        assert!(game.all_scorable_words(1).unwrap().is_empty());
        assert!(game.is_on_board("a").unwrap().is_empty());
    }

    #[test]
    fn scoring_rules() {
        let game = game();
        // lent and cape earn one point each at min length 4; plea is not on the board
        assert_eq!(game.score_for_words(["lent", "cape", "plea"], 4).unwrap(), 2);
        // lent: 1 + 1, ale: 1 at min length 3
        assert_eq!(game.score_for_words(["LENT", "ale"], 3).unwrap(), 3);
        // duplicates count once
        assert_eq!(game.score_for_words(["lent", "Lent", "lent"], 4).unwrap(), 1);
        // too short, not a word, not on the board
        assert_eq!(game.score_for_words(["ale", "lenp", "zebra", "pope"], 4).unwrap(), 0);
        assert_eq!(game.score_for_words(Vec::<String>::new(), 4).unwrap(), 0);
    }

    #[test]
    fn score_of_all_scorable_words() {
        let game = game();
        let found = game.all_scorable_words(3).unwrap();
        let expected: usize = found.iter().map(|w| 1 + w.chars().count() - 3).sum();
        assert_eq!(game.score_for_words(&found, 3).unwrap(), expected);
    }

    #[test]
    fn display_shows_board() {
        let mut game = game();
        game.set_board(&["a", "t", "e", "r"]).unwrap();
        assert_eq!(game.to_string(), "A T\nE R\n");
    }
}
