// thaipron/libthaipron/src/output/mod.rs
//
// Output adapters. Each renders a parsed graph to text on its own; the
// linear ones follow the primary path, the grouped one keeps every
// alternative.

use clap::ValueEnum;
use thaipron_core::graph::PronunciationGraph;
use thaipron_core::syllable::Syllable;

pub mod delim;
pub mod json;
pub mod roman;

pub use delim::DelimOutput;
pub use json::{GroupedJsonOutput, JsonOutput};
pub use roman::RomanOutput;

/// Turns a graph into text.
pub trait Render: Send + Sync {
    fn render(&self, graph: &PronunciationGraph) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Phonetic Thai, syllables joined by `-`.
    #[default]
    Delim,
    /// RTGS romanization.
    Roman,
    /// Primary path as a JSON array.
    Json,
    /// Every alternative, grouped by position, as JSON.
    Gjson,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Render> {
        match self {
            OutputFormat::Delim => Box::new(DelimOutput::default()),
            OutputFormat::Roman => Box::new(RomanOutput::default()),
            OutputFormat::Json => Box::new(JsonOutput),
            OutputFormat::Gjson => Box::new(GroupedJsonOutput),
        }
    }
}

/// Phonetic respelling of each syllable in `path`.
pub(crate) fn phonetic(path: &[&Syllable]) -> Vec<String> {
    path.iter().map(|s| s.to_thai()).collect()
}
