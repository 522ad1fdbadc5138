// thaipron/core/src/wordlist.rs
//
// Word list backed by an FST set, used to split a run of Thai text into
// words before syllable parsing.

use fst::{Set, SetBuilder, Streamer};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::trie::TrieNode;
use crate::utils::normalize;

/// Anything that can report which words start at a text position.
pub trait WordSource {
    /// Exclusive end positions of every word starting at `start`, shortest
    /// first.
    fn word_ends(&self, text: &[char], start: usize) -> Vec<usize>;
}

impl<V> WordSource for TrieNode<V> {
    fn word_ends(&self, text: &[char], start: usize) -> Vec<usize> {
        self.walk_prefixes(text, start)
            .into_iter()
            .map(|(end, _)| end)
            .collect()
    }
}

/// Sorted set of known words.
#[derive(Clone)]
pub struct WordList {
    set: Set<Vec<u8>>,
}

impl std::fmt::Debug for WordList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList").field("len", &self.len()).finish()
    }
}

static DEFAULT_WORDS: &str = include_str!("../data/words.txt");

static DEFAULT_LIST: Lazy<Arc<WordList>> = Lazy::new(|| {
    let list = WordList::from_words(DEFAULT_WORDS.lines()).unwrap_or_else(|e| {
        warn!("built-in word list unusable: {}", e);
        WordList::empty()
    });
    Arc::new(list)
});

/// The built-in word list, built on first use.
pub fn default_word_list() -> Arc<WordList> {
    Arc::clone(&DEFAULT_LIST)
}

impl WordList {
    pub fn empty() -> Self {
        Self { set: Set::default() }
    }

    /// Build from arbitrary words. Lines are normalized; blank lines and
    /// `#` comments are skipped; order and duplicates do not matter.
    pub fn from_words<I, S>(words: I) -> Result<Self, fst::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();
        let set = Set::from_iter(sorted)?;
        Ok(Self { set })
    }

    /// Load a plain text list, one word per line.
    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
        let mut words = Vec::new();
        for line in BufReader::new(file).lines() {
            words.push(line.map_err(|e| LoadError::io(path, e))?);
        }
        let list = Self::from_words(words).map_err(|source| LoadError::Fst {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Load a compiled `.fst` set.
    pub fn load_fst<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut f = File::open(path).map_err(|e| LoadError::io(path, e))?;
        let mut buf = Vec::new();
        f.read_to_end(&mut buf).map_err(|e| LoadError::io(path, e))?;
        let set = Set::new(buf).map_err(|source| LoadError::Fst {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded {} words from {}", set.len(), path.display());
        Ok(Self { set })
    }

    /// Load by extension: `.fst` files are compiled sets, anything else text.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("fst") => Self::load_fst(path),
            _ => Self::load_text(path),
        }
    }

    /// Write the compiled set.
    pub fn save_fst<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let mut out = File::create(path).map_err(|e| LoadError::io(path, e))?;
        out.write_all(self.set.as_fst().as_bytes())
            .map_err(|e| LoadError::io(path, e))?;
        Ok(())
    }

    /// Merge another source of words into a new list.
    pub fn union<I, S>(&self, extra: I) -> Result<Self, fst::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words();
        words.extend(extra.into_iter().map(|w| w.as_ref().to_string()));
        Self::from_words(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// All words in byte order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        let mut stream = self.set.stream();
        while let Some(k) = stream.next() {
            if let Ok(s) = std::str::from_utf8(k) {
                out.push(s.to_string());
            }
        }
        out
    }

    /// Build a list and write it as `.fst` in one step.
    pub fn compile<I, S, P>(words: I, out: P) -> Result<usize, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: AsRef<Path>,
    {
        let out = out.as_ref();
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();
        let file = File::create(out).map_err(|e| LoadError::io(out, e))?;
        let mut builder = SetBuilder::new(std::io::BufWriter::new(file)).map_err(|source| {
            LoadError::Fst {
                path: out.to_path_buf(),
                source,
            }
        })?;
        for w in &sorted {
            builder.insert(w).map_err(|source| LoadError::Fst {
                path: out.to_path_buf(),
                source,
            })?;
        }
        builder.finish().map_err(|source| LoadError::Fst {
            path: out.to_path_buf(),
            source,
        })?;
        Ok(sorted.len())
    }
}

impl WordSource for WordList {
    fn word_ends(&self, text: &[char], start: usize) -> Vec<usize> {
        let fst = self.set.as_fst();
        let mut node = fst.root();
        let mut ends = Vec::new();
        let mut buf = [0u8; 4];
        for (i, &c) in text.iter().enumerate().skip(start) {
            for &b in c.encode_utf8(&mut buf).as_bytes() {
                match node.find_input(b) {
                    Some(t) => node = fst.node(node.transition(t).addr),
                    None => return ends,
                }
            }
            if node.is_final() {
                ends.push(i + 1);
            }
        }
        ends
    }
}
