//! Search engines
//!
//! Both engines walk an implicit graph too large to materialise and prune it with
//! lexicon lookups: paths of adjacent board cells, and words one letter apart.

pub mod board;
pub mod ladder;

pub use board::WordSearchGame;
pub use ladder::{WordLadderGame, hamming_distance};
