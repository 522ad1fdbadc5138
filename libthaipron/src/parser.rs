// thaipron/libthaipron/src/parser.rs
//
// Parser facade: owns the rule set, the exception dictionary and the word
// list, and turns a string into a pruned pronunciation graph.
// - With word break on, the whole input is read once and split into words
//   along that lattice; known words are then rebuilt on their own, so no
//   syllable crosses a word boundary
// - Loaded resources are shared read-only; `parse` takes `&self` and a
//   parser can serve any number of threads

use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use thaipron_core::error::{LoadError, ParseError};
use thaipron_core::graph::PronunciationGraph;
use thaipron_core::segment::segment;
use thaipron_core::utils::to_chars;
use thaipron_core::wordlist::{default_word_list, WordList, WordSource};
use thaipron_core::ParserConfig;

use crate::builder::GraphBuilder;
use crate::dict::ExceptionDict;
use crate::rules::SyllableRules;

#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    rules: SyllableRules,
    dict: Arc<ExceptionDict>,
    words: Arc<WordList>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Parser {
    /// Parser with the built-in word list and an empty exception
    /// dictionary.
    pub fn new(word_break: bool) -> Self {
        Self {
            config: ParserConfig {
                word_break,
                ..ParserConfig::default()
            },
            rules: SyllableRules::new(),
            dict: Arc::new(ExceptionDict::new()),
            words: default_word_list(),
        }
    }

    /// Parser with the resources named in `config` loaded.
    pub fn with_config(config: ParserConfig) -> Result<Self, LoadError> {
        let mut parser = Self::new(config.word_break);
        parser.config = config.clone();
        if let Some(path) = &config.word_list {
            parser.set_word_list(WordList::load(path)?);
        }
        if let Some(path) = &config.exception_dict {
            parser.load_exception_dictionary(path)?;
        }
        Ok(parser)
    }

    /// Replace the exception dictionary with the one at `path` (text, or a
    /// `.bin` snapshot). On error the current dictionary is kept.
    pub fn load_exception_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let dict = ExceptionDict::load(path.as_ref(), self.config.skip_malformed)?;
        info!(
            "exception dictionary ready: {} entries, {} lines skipped",
            dict.len(),
            dict.diagnostics().len()
        );
        self.set_exception_dictionary(dict);
        Ok(())
    }

    pub fn set_exception_dictionary(&mut self, dict: ExceptionDict) {
        self.dict = Arc::new(dict);
    }

    pub fn set_word_list(&mut self, words: WordList) {
        self.words = Arc::new(words);
    }

    pub fn exception_dictionary(&self) -> &ExceptionDict {
        &self.dict
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn word_break(&self) -> bool {
        self.config.word_break
    }

    /// Graph of every reading of `word`.
    ///
    /// Fails as a whole when any part of the input has no reading; the
    /// error carries a character position in `word`.
    pub fn parse(&self, word: &str) -> Result<PronunciationGraph, ParseError> {
        let text = to_chars(word);
        let builder = GraphBuilder::new(&self.rules, &self.dict);
        let lattice = builder.build(&text)?;
        if !self.config.word_break {
            return Ok(lattice);
        }

        let sources: [&dyn WordSource; 2] = [self.words.as_ref(), self.dict.as_ref()];
        let spans = segment(&text, &lattice, &sources);
        debug!("'{}' split into {} words", word, spans.len());

        let mut graph = PronunciationGraph::new(0);
        for span in spans {
            // unknown stretches keep the readings they had in context
            let alone = span.known.then(|| builder.build(&text[span.range.clone()]));
            let part = match alone {
                Some(Ok(part)) => part,
                _ => lattice.slice(span.range)?,
            };
            graph.append(part);
        }
        Ok(graph)
    }

    /// Parse independent inputs in parallel. Results are in input order.
    pub fn parse_batch<S>(&self, words: &[S]) -> Vec<Result<PronunciationGraph, ParseError>>
    where
        S: AsRef<str> + Sync,
    {
        words.par_iter().map(|w| self.parse(w.as_ref())).collect()
    }
}
