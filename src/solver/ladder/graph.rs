//! Implicit word-ladder graph
//!
//! Nodes are lexicon words; an edge joins two words at Hamming distance one. The
//! graph is never materialised: neighbours are found by scanning the lexicon.

use crate::core::Lexicon;

/// Number of positions at which `a` and `b` differ
///
/// Compares characters, not bytes. Returns `None` when the lengths differ, since
/// the distance is undefined there.
///
/// # Examples
/// ```
/// use lexisearch::solver::hamming_distance;
///
/// assert_eq!(hamming_distance("abc", "abd"), Some(1));
/// assert_eq!(hamming_distance("abc", "abc"), Some(0));
/// assert_eq!(hamming_distance("abc", "ab"), None);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut distance = 0;

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => distance += usize::from(x != y),
            (None, None) => return Some(distance),
            _ => return None,
        }
    }
}

/// Whether `a` and `b` are one substitution apart
#[inline]
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    hamming_distance(a, b) == Some(1)
}

/// Every lexicon word one substitution away from `word`, in lexicon order
///
/// `word` itself need not be in the lexicon.
#[must_use]
pub fn neighbors<'a>(lexicon: &'a Lexicon, word: &str) -> Vec<&'a str> {
    lexicon
        .iter()
        .filter(|candidate| is_adjacent(candidate, word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_counts_differing_positions() {
        assert_eq!(hamming_distance("cold", "cord"), Some(1));
        assert_eq!(hamming_distance("cold", "warm"), Some(4));
        assert_eq!(hamming_distance("", ""), Some(0));
    }

    #[test]
    fn distance_undefined_for_unequal_lengths() {
        assert_eq!(hamming_distance("cat", "cats"), None);
        assert_eq!(hamming_distance("", "a"), None);
    }

    #[test]
    fn distance_is_symmetric_and_zero_only_for_equal() {
        let words = ["cat", "cot", "cog", "dog", "act", "tac"];
        for a in words {
            for b in words {
                assert_eq!(hamming_distance(a, b), hamming_distance(b, a));
                assert_eq!(hamming_distance(a, b) == Some(0), a == b);
            }
        }
    }

    #[test]
    fn distance_uses_characters() {
        assert_eq!(hamming_distance("café", "cafe"), Some(1));
    }

    #[test]
    fn neighbors_scan_lexicon() {
        let lexicon: Lexicon = ["cat", "cot", "cut", "cats", "dog", "cog", "at"]
            .into_iter()
            .collect();
        assert_eq!(neighbors(&lexicon, "cat"), vec!["cot", "cut"]);
        assert_eq!(neighbors(&lexicon, "cog"), vec!["cot", "dog"]);
        assert_eq!(neighbors(&lexicon, "bat"), vec!["cat"]);
        assert!(neighbors(&lexicon, "zzzzz").is_empty());
    }
}
