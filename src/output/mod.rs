//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_find_result, print_ladder_result,
    print_neighbors_result, print_score_result, print_words_result,
};
