//! Lexicon-constrained graph search
//!
//! Two word games that walk implicit graphs too large to build and prune them with
//! lexicon lookups: a board word search and a shortest word-ladder finder.
//!
//! # Quick Start
//!
//! ```rust
//! use lexisearch::core::Lexicon;
//! use lexisearch::solver::{WordLadderGame, WordSearchGame};
//!
//! let lexicon: Lexicon = ["cold", "cord", "card", "ward", "warm", "lent"]
//!     .into_iter()
//!     .collect();
//!
//! // Board search on the default 4×4 board
//! let game = WordSearchGame::with_lexicon(lexicon.clone());
//! assert!(!game.is_on_board("lent").unwrap().is_empty());
//!
//! // Shortest ladder
//! let ladder = WordLadderGame::new(lexicon).min_ladder("cold", "warm");
//! assert_eq!(ladder, ["cold", "cord", "card", "ward", "warm"]);
//! ```

// Core domain types
pub mod core;

// Search engines
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
