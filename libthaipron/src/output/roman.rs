// thaipron/libthaipron/src/output/roman.rs

use thaipron_core::graph::PronunciationGraph;

use super::Render;

/// Primary reading romanized. Verbatim runs are copied unchanged.
#[derive(Debug, Clone)]
pub struct RomanOutput {
    pub delimiter: String,
}

impl Default for RomanOutput {
    fn default() -> Self {
        Self {
            delimiter: "-".to_string(),
        }
    }
}

impl Render for RomanOutput {
    fn render(&self, graph: &PronunciationGraph) -> String {
        graph
            .primary_path()
            .iter()
            .map(|s| s.romanization.as_str())
            .collect::<Vec<_>>()
            .join(&self.delimiter)
    }
}
