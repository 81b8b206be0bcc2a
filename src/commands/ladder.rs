//! Word-ladder commands

use crate::core::normalize;
use crate::solver::WordLadderGame;

/// Outcome of a shortest-ladder search
pub struct LadderResult {
    pub start: String,
    pub end: String,
    pub ladder: Vec<String>,
}

impl LadderResult {
    /// Number of single-letter changes, if a ladder was found
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.ladder.len().checked_sub(1)
    }
}

/// Neighbours of one word
pub struct NeighborsResult {
    pub word: String,
    pub is_word: bool,
    pub neighbors: Vec<String>,
}

/// One rung of a checked ladder
pub struct RungCheck {
    pub word: String,
    pub is_word: bool,
    /// Distance from the previous rung; `None` on the first rung or for unequal lengths
    pub distance: Option<usize>,
}

/// Verdict on a submitted ladder
pub struct CheckResult {
    pub valid: bool,
    pub rungs: Vec<RungCheck>,
}

/// Find a minimum-length ladder from `start` to `end`
#[must_use]
pub fn find_ladder(game: &WordLadderGame, start: &str, end: &str) -> LadderResult {
    LadderResult {
        start: normalize(start),
        end: normalize(end),
        ladder: game.min_ladder(start, end),
    }
}

/// List the lexicon neighbours of `word`
#[must_use]
pub fn list_neighbors(game: &WordLadderGame, word: &str) -> NeighborsResult {
    NeighborsResult {
        word: normalize(word),
        is_word: game.is_word(word),
        neighbors: game.neighbors(word).into_iter().map(str::to_string).collect(),
    }
}

/// Check `sequence` rung by rung
#[must_use]
pub fn check_ladder<S: AsRef<str>>(game: &WordLadderGame, sequence: &[S]) -> CheckResult {
    let rungs = sequence
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let word = word.as_ref();
            RungCheck {
                word: normalize(word),
                is_word: game.is_word(word),
                distance: i
                    .checked_sub(1)
                    .and_then(|prev| game.hamming_distance(sequence[prev].as_ref(), word)),
            }
        })
        .collect();

    CheckResult {
        valid: game.is_word_ladder(sequence),
        rungs,
    }
}
