// thaipron/core/src/error.rs
//
// Error types shared by the parser crates.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a data file: configuration, exception dictionary,
/// word list or snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("invalid word list {path}: {source}")]
    Fst {
        path: PathBuf,
        #[source]
        source: fst::Error,
    },

    #[error("invalid snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("invalid configuration {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Failure to parse a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No sequence of syllables covers the input. Carries the furthest
    /// character position that some syllable sequence from the start reaches.
    #[error("no pronunciation covers the input past character {0}")]
    Unparseable(usize),
}
