//! Ordered word set backing both search games
//!
//! Words are stored lowercased in a `BTreeSet`, which gives exact membership and a
//! "smallest word not less than X" ceiling query for prefix checks.

use super::SearchError;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Bound;
use std::path::Path;

/// An immutable, case-normalised set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: BTreeSet<String>,
}

/// Normalise a word or cell label the way the lexicon stores it
#[inline]
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

impl Lexicon {
    /// Build a lexicon from a line-oriented reader
    ///
    /// The first whitespace-delimited token of each line is a word; trailing tokens
    /// and blank lines are ignored. Duplicates collapse.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidSource` if a line cannot be read.
    ///
    /// # Examples
    /// ```
    /// use lexisearch::core::Lexicon;
    ///
    /// let source = "Cat noun\ncot\n\ncat\n";
    /// let lexicon = Lexicon::from_reader(source.as_bytes()).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("cat"));
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SearchError> {
        Self::read_words(reader, Path::new("<reader>"))
    }

    /// Load a lexicon from a word file
    ///
    /// # Errors
    /// Returns `SearchError::InvalidSource` if the file cannot be opened or read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SearchError::InvalidSource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_words(BufReader::new(file), path)
    }

    fn read_words<R: BufRead>(reader: R, origin: &Path) -> Result<Self, SearchError> {
        let mut words = BTreeSet::new();
        for line in reader.lines() {
            let line = line.map_err(|source| SearchError::InvalidSource {
                path: origin.to_path_buf(),
                source,
            })?;
            if let Some(token) = line.split_whitespace().next() {
                words.insert(normalize(token));
            }
        }
        Ok(Self { words })
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership of an already-normalised word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The stored copy of `word`, if present
    ///
    /// Lets callers hold borrows tied to the lexicon rather than to their argument.
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Smallest stored word that is not less than `key`
    #[must_use]
    pub fn ceiling(&self, key: &str) -> Option<&str> {
        self.words
            .range::<str, _>((Bound::Included(key), Bound::Unbounded))
            .next()
            .map(String::as_str)
    }

    /// True iff some stored word starts with `prefix`
    ///
    /// Every word sharing a prefix sorts at or after the prefix itself, so the
    /// ceiling is the only candidate worth checking.
    ///
    /// # Examples
    /// ```
    /// use lexisearch::core::Lexicon;
    ///
    /// let lexicon: Lexicon = ["cart", "dog"].into_iter().collect();
    /// assert!(lexicon.has_prefix("car"));
    /// assert!(lexicon.has_prefix("cart"));
    /// assert!(!lexicon.has_prefix("cat"));
    /// ```
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.ceiling(prefix)
            .is_some_and(|word| word.starts_with(prefix))
    }

    /// Words in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| normalize(word.as_ref()))
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }
}
