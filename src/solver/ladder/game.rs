//! Word-ladder game
//!
//! Validates ladders and finds minimum-length ladders by breadth-first search over
//! the implicit Hamming-distance-one graph.

use super::graph::{self, is_adjacent};
use crate::core::{Lexicon, normalize};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Ladder search engine over an owned lexicon
#[derive(Debug, Clone)]
pub struct WordLadderGame {
    lexicon: Lexicon,
}

impl WordLadderGame {
    #[must_use]
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Number of distinct words in the lexicon
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.lexicon.len()
    }

    /// Whether `word` is in the lexicon, ignoring case
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.lexicon.contains(&normalize(word))
    }

    /// Hamming distance between two words, `None` for unequal lengths
    #[must_use]
    pub fn hamming_distance(&self, a: &str, b: &str) -> Option<usize> {
        graph::hamming_distance(&normalize(a), &normalize(b))
    }

    /// Lexicon words one letter away from `word`
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<&str> {
        graph::neighbors(&self.lexicon, &normalize(word))
    }

    /// Whether `sequence` is a valid word ladder
    ///
    /// The sequence must be non-empty, every element after the first must be a
    /// word, and consecutive elements must differ in exactly one position. The
    /// first element is not checked against the lexicon.
    #[must_use]
    pub fn is_word_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        let words: Vec<String> = sequence.iter().map(|w| normalize(w.as_ref())).collect();

        !words.is_empty()
            && words.iter().skip(1).all(|word| self.lexicon.contains(word))
            && words.windows(2).all(|pair| is_adjacent(&pair[0], &pair[1]))
    }

    /// A minimum-length ladder from `start` to `end`
    ///
    /// Returns an empty ladder if either word is missing from the lexicon, the
    /// lengths differ, or no ladder exists. When several minimum ladders exist,
    /// the one reached first in lexicon order is returned.
    ///
    /// # Examples
    /// ```
    /// use lexisearch::core::Lexicon;
    /// use lexisearch::solver::WordLadderGame;
    ///
    /// let lexicon: Lexicon = ["hit", "hot", "dot", "dog", "lot", "log", "cog"]
    ///     .into_iter()
    ///     .collect();
    /// let game = WordLadderGame::new(lexicon);
    ///
    /// let ladder = game.min_ladder("hit", "cog");
    /// assert_eq!(ladder.len(), 5);
    /// assert!(game.is_word_ladder(&ladder));
    /// ```
    #[must_use]
    pub fn min_ladder(&self, start: &str, end: &str) -> Vec<String> {
        let (Some(start), Some(end)) = (
            self.lexicon.get(&normalize(start)),
            self.lexicon.get(&normalize(end)),
        ) else {
            return Vec::new();
        };
        if start.chars().count() != end.chars().count() {
            return Vec::new();
        }
        if start == end {
            return vec![start.to_string()];
        }

        // Discovered word -> the word it was reached from
        let mut parents: FxHashMap<&str, &str> = FxHashMap::default();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for next in graph::neighbors(&self.lexicon, current) {
                if next == start || parents.contains_key(next) {
                    continue;
                }
                parents.insert(next, current);
                if next == end {
                    return backtrack(&parents, end);
                }
                queue.push_back(next);
            }
        }

        Vec::new()
    }
}

/// Follow parent links from `end` back to the root, then reverse
fn backtrack(parents: &FxHashMap<&str, &str>, end: &str) -> Vec<String> {
    let mut ladder = vec![end.to_string()];
    let mut current = end;
    while let Some(&previous) = parents.get(current) {
        ladder.push(previous.to_string());
        current = previous;
    }
    ladder.reverse();
    ladder
}
