//! Error type shared by the lexicon, board, and both search games

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised by invalid requests
///
/// "Nothing found" is never an error: an absent word, an unreachable ladder, or
/// a prefix with no completion are all reported as empty values.
#[derive(Debug)]
pub enum SearchError {
    /// A query needed a lexicon before one was loaded
    NotLoaded,
    /// A malformed argument, such as a zero minimum word length
    InvalidArgument(String),
    /// The word source could not be read
    InvalidSource { path: PathBuf, source: io::Error },
    /// A board whose cell count is not a perfect square
    NonSquareBoard(usize),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLoaded => write!(f, "No lexicon has been loaded"),
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
            Self::InvalidSource { path, source } => {
                write!(f, "Cannot read word source {}: {source}", path.display())
            }
            Self::NonSquareBoard(cells) => {
                write!(f, "Board must have a square number of cells, got {cells}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSource { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        assert_eq!(SearchError::NotLoaded.to_string(), "No lexicon has been loaded");
        assert_eq!(
            SearchError::NonSquareBoard(5).to_string(),
            "Board must have a square number of cells, got 5"
        );
        assert_eq!(
            SearchError::InvalidArgument("minimum length must be at least 1".into()).to_string(),
            "Invalid argument: minimum length must be at least 1"
        );
    }

    #[test]
    fn invalid_source_exposes_io_error() {
        let err = SearchError::InvalidSource {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("Cannot read word source missing.txt"));
        assert!(err.source().is_some());
        assert!(SearchError::NotLoaded.source().is_none());
    }
}
