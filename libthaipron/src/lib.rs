//! libthaipron crate root
//!
//! Thai syllable and pronunciation parser built on `thaipron-core`.
//!
//! Public API exported here:
//! - `Parser` from `parser`, the entry point: `parse` and `parse_batch`
//! - `SyllableRules` from `rules`, the orthographic rule engine
//! - `ExceptionDict` from `dict`, irregular spellings
//! - `GraphBuilder` from `builder`
//! - `Render` and the adapters from `output`
//!
//! ```no_run
//! use libthaipron::{output::Render, DelimOutput, Parser};
//!
//! let parser = Parser::default();
//! let graph = parser.parse("ภาษาไทย").unwrap();
//! println!("{}", DelimOutput::default().render(&graph));
//! ```

pub mod builder;
pub mod dict;
pub mod output;
pub mod parser;
pub mod rules;

pub use builder::GraphBuilder;
pub use dict::{Diagnostic, ExceptionDict, ExceptionEntry, SyllableTemplate};
pub use output::{DelimOutput, GroupedJsonOutput, JsonOutput, OutputFormat, Render, RomanOutput};
pub use parser::Parser;
pub use rules::{Candidate, Rank, SyllableRules};

pub use thaipron_core::{
    LoadError, ParseError, ParserConfig, PronunciationGraph, Reading, Syllable,
};
