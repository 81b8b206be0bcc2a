//! Word-ladder graph and breadth-first ladder search

pub mod graph;
mod game;

pub use game::WordLadderGame;
pub use graph::{hamming_distance, is_adjacent, neighbors};
