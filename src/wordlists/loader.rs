//! Lexicon loading utilities
//!
//! Resolves a word-list selector to a lexicon: the embedded list or a file.

use super::DEFAULT_WORDS;
use crate::core::{Lexicon, SearchError};
use std::path::Path;

/// Selector naming the embedded list
pub const DEFAULT_SELECTOR: &str = "default";

/// Lexicon built from the embedded default word list
///
/// # Examples
/// ```
/// use lexisearch::wordlists::loader::default_lexicon;
///
/// let lexicon = default_lexicon();
/// assert!(lexicon.contains("lent"));
/// ```
#[must_use]
pub fn default_lexicon() -> Lexicon {
    DEFAULT_WORDS.iter().collect()
}

/// Load the lexicon named by `selector`
///
/// `"default"` selects the embedded list; anything else is read as a file path.
///
/// # Errors
///
/// Returns `SearchError::InvalidSource` if the file cannot be read.
pub fn load_lexicon(selector: &str) -> Result<Lexicon, SearchError> {
    if selector == DEFAULT_SELECTOR {
        Ok(default_lexicon())
    } else {
        Lexicon::load_from_file(Path::new(selector))
    }
}
