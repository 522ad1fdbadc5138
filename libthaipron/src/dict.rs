// thaipron/libthaipron/src/dict.rs
//
// Exception dictionary: irregular spellings with a fixed syllable breakdown.
//
// Text format, one entry per line, `#` comments and blank lines ignored:
//
//     สามารถ	สา-มารถ=มาด
//     ปรารถนา	ปรา=ปราด-รถ=ถะ-นา
//
// The pattern and its breakdown are separated by a tab. Each syllable is
// written `spelling` or `spelling=reading`; the spellings must concatenate to
// the pattern, and each reading (the spelling when none is given) must be a
// regularly spelled syllable.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{info, warn};

use thaipron_core::error::LoadError;
use thaipron_core::syllable::Phonemes;
use thaipron_core::trie::TrieNode;
use thaipron_core::utils::{normalize, to_chars};
use thaipron_core::wordlist::WordSource;

use crate::rules::SyllableRules;

/// One syllable of a stored breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableTemplate {
    /// Letters of the pattern this syllable covers.
    pub spelling: String,
    /// `spelling` length in characters.
    pub len: usize,
    pub phonemes: Phonemes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    pub pattern: String,
    pub syllables: Vec<SyllableTemplate>,
}

/// A line skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExceptionDict {
    entries: Vec<ExceptionEntry>,
    index: TrieNode<usize>,
    diagnostics: Vec<Diagnostic>,
}

impl ExceptionDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary file. `.bin` files are snapshots written by
    /// `save_bincode`; anything else is the text format.
    pub fn load<P: AsRef<Path>>(path: P, skip_malformed: bool) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) == Some("bin") {
            return Self::load_bincode(path);
        }
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let dict = Self::from_text(&content, skip_malformed)
            .map_err(|d| LoadError::malformed(path, d.line, d.reason))?;
        for d in &dict.diagnostics {
            warn!("{}:{}: skipped: {}", path.display(), d.line, d.reason);
        }
        info!(
            "loaded {} exception entries from {}",
            dict.len(),
            path.display()
        );
        Ok(dict)
    }

    /// Parse the text format. With `skip_malformed`, bad lines are recorded
    /// in `diagnostics()`; otherwise the first one is returned as the error.
    pub fn from_text(content: &str, skip_malformed: bool) -> Result<Self, Diagnostic> {
        let rules = SyllableRules::new();
        let mut dict = Self::new();
        for (n, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_line(&rules, line) {
                Ok(entry) => dict.insert(entry),
                Err(reason) => {
                    let d = Diagnostic { line: n + 1, reason };
                    if !skip_malformed {
                        return Err(d);
                    }
                    dict.diagnostics.push(d);
                }
            }
        }
        Ok(dict)
    }

    /// Add an entry, replacing any with the same pattern.
    pub fn insert(&mut self, entry: ExceptionEntry) {
        match self.index.get(&entry.pattern).copied() {
            Some(i) => self.entries[i] = entry,
            None => {
                self.index.insert(&entry.pattern, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Longest entry matching `text` at `start`: its breakdown and the
    /// number of characters matched.
    pub fn lookup(&self, text: &[char], start: usize) -> Option<(&[SyllableTemplate], usize)> {
        let (end, &i) = self.index.longest_prefix(text, start)?;
        Some((self.entries[i].syllables.as_slice(), end - start))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.pattern.as_str())
    }

    pub fn entries(&self) -> &[ExceptionEntry] {
        &self.entries
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot the parsed entries with bincode.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| LoadError::io(path, e))?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, &self.entries).map_err(|source| LoadError::Snapshot {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a snapshot produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
        let reader = BufReader::new(file);
        let entries: Vec<ExceptionEntry> =
            bincode::deserialize_from(reader).map_err(|source| LoadError::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;
        let mut dict = Self::new();
        for e in entries {
            dict.insert(e);
        }
        Ok(dict)
    }
}

impl WordSource for ExceptionDict {
    fn word_ends(&self, text: &[char], start: usize) -> Vec<usize> {
        self.index.word_ends(text, start)
    }
}

fn parse_line(rules: &SyllableRules, line: &str) -> Result<ExceptionEntry, String> {
    let (pattern, breakdown) = line
        .split_once('\t')
        .ok_or_else(|| "expected pattern<TAB>breakdown".to_string())?;
    let pattern = normalize(pattern);
    if pattern.is_empty() {
        return Err("empty pattern".into());
    }

    let mut syllables = Vec::new();
    let mut joined = String::new();
    for part in breakdown.trim().split('-') {
        let (spelling, reading) = match part.split_once('=') {
            Some((s, r)) => (normalize(s), normalize(r)),
            None => (normalize(part), normalize(part)),
        };
        if spelling.is_empty() || reading.is_empty() {
            return Err(format!("empty syllable in '{}'", breakdown.trim()));
        }
        let phonemes = rules
            .read_one(&to_chars(&reading))
            .ok_or_else(|| format!("'{reading}' is not a single regular syllable"))?;
        joined.push_str(&spelling);
        syllables.push(SyllableTemplate {
            len: spelling.chars().count(),
            spelling,
            phonemes,
        });
    }

    if joined != pattern {
        return Err(format!("syllables spell '{joined}', not '{pattern}'"));
    }
    Ok(ExceptionEntry { pattern, syllables })
}
