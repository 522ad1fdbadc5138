// thaipron/libthaipron/src/output/delim.rs

use thaipron_core::graph::PronunciationGraph;

use super::{phonetic, Render};

/// Primary reading in phonetic Thai, one delimiter between syllables.
#[derive(Debug, Clone)]
pub struct DelimOutput {
    pub delimiter: String,
}

impl Default for DelimOutput {
    fn default() -> Self {
        Self::new("-")
    }
}

impl DelimOutput {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }
}

impl Render for DelimOutput {
    fn render(&self, graph: &PronunciationGraph) -> String {
        phonetic(&graph.primary_path()).join(&self.delimiter)
    }
}
