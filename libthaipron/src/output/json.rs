// thaipron/libthaipron/src/output/json.rs

use thaipron_core::graph::PronunciationGraph;

use super::{phonetic, Render};

/// Primary reading as a JSON array of phonetic syllables.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOutput;

impl Render for JsonOutput {
    fn render(&self, graph: &PronunciationGraph) -> String {
        serde_json::to_string(&phonetic(&graph.primary_path())).unwrap_or_else(|_| "[]".into())
    }
}

/// Every reading, grouped between the positions all readings share:
/// `[[alt, alt, ...], ...]` where each alternative is an array of syllables.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedJsonOutput;

impl Render for GroupedJsonOutput {
    fn render(&self, graph: &PronunciationGraph) -> String {
        let groups: Vec<Vec<Vec<String>>> = graph
            .groups()
            .iter()
            .map(|alts| alts.iter().map(|path| phonetic(path)).collect())
            .collect();
        serde_json::to_string(&groups).unwrap_or_else(|_| "[]".into())
    }
}
