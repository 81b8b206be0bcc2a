//! Board search engine
//!
//! Depth-first, prefix-pruned enumeration of word paths on a letter board.

pub mod explore;
mod game;

pub use explore::{Step, explore};
pub use game::WordSearchGame;
