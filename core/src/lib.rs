//! thaipron-core
//!
//! Character classes, phonetic model, pronunciation graph and word lists
//! shared by the Thai pronunciation parser (`libthaipron`) and its tools.
//!
//! Public API:
//! - `Category` / `classify` - Orthographic class of a character
//! - `Syllable` / `Phonemes` - One reading of one span of input
//! - `PronunciationGraph` - DAG of all readings of a word
//! - `WordList` / `segment` - Word-boundary segmentation
//! - `ParserConfig` - Configuration and data file locations
//! - `LoadError` / `ParseError` - Error types
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod chars;
pub use chars::{classify, Category};

pub mod error;
pub use error::{LoadError, ParseError};

pub mod syllable;
pub use syllable::{
    Final, FinalSound, Initial, InitialKind, Phonemes, Reading, Syllable, Tone, Vowel,
};

pub mod graph;
pub use graph::PronunciationGraph;

pub mod trie;
pub use trie::TrieNode;

pub mod wordlist;
pub use wordlist::{default_word_list, WordList, WordSource};

pub mod segment;
pub use segment::{segment, WordSpan};

/// Parser configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Split input into words before building syllable graphs.
    pub word_break: bool,
    /// Exception dictionary to load (`.dic` text or `.bin` snapshot).
    pub exception_dict: Option<PathBuf>,
    /// Word list for segmentation (`.fst` or text); the built-in list when unset.
    pub word_list: Option<PathBuf>,
    /// Skip malformed dictionary lines with a warning instead of failing.
    pub skip_malformed: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            word_break: true,
            exception_dict: None,
            word_list: None,
            skip_malformed: true,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        toml::from_str(&content).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Input as a character vector, the unit every position refers to.
    pub fn to_chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }
}
