//! Command implementations

pub mod board;
pub mod ladder;

pub use board::{
    DEFAULT_MIN_LENGTH, FindResult, ScoreResult, ScoredWord, WordsResult, find_word,
    list_scorable_words, score_words,
};
pub use ladder::{
    CheckResult, LadderResult, NeighborsResult, RungCheck, check_ladder, find_ladder,
    list_neighbors,
};
