//! Core domain types for lexicon-constrained search
//!
//! This module holds the data the search engines walk over: the lexicon, the grid
//! adjacency model, and the board. Nothing here searches or prints.

mod board;
mod error;
mod grid;
mod lexicon;

pub use board::{Board, Cell, DEFAULT_CELLS};
pub use error::SearchError;
pub use grid::{Grid, Position};
pub use lexicon::{Lexicon, normalize};
