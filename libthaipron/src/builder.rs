// thaipron/libthaipron/src/builder.rs
//
// Pronunciation graph builder.
// - Worklist of reachable positions, lowest first
// - Exception dictionary consulted before the rules at each position
// - Dead ends pruned once the worklist drains; a word with no complete
//   reading fails as a whole

use std::collections::BTreeSet;
use tracing::debug;

use thaipron_core::error::ParseError;
use thaipron_core::graph::PronunciationGraph;
use thaipron_core::syllable::Syllable;

use crate::dict::{ExceptionDict, SyllableTemplate};
use crate::rules::SyllableRules;

/// Builds one graph per contiguous span of text.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder<'a> {
    rules: &'a SyllableRules,
    dict: &'a ExceptionDict,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(rules: &'a SyllableRules, dict: &'a ExceptionDict) -> Self {
        Self { rules, dict }
    }

    /// Graph of every complete reading of `text`.
    ///
    /// Positions in the error are relative to `text`.
    pub fn build(&self, text: &[char]) -> Result<PronunciationGraph, ParseError> {
        let n = text.len();
        let mut graph = PronunciationGraph::new(n);
        if n == 0 {
            return Ok(graph);
        }

        let mut seen = vec![false; n + 1];
        // Interior nodes of a dictionary chain only continue the chain.
        let mut sealed = vec![false; n + 1];
        let mut worklist = BTreeSet::new();
        worklist.insert(0);
        seen[0] = true;

        while let Some(pos) = worklist.pop_first() {
            if pos == n || sealed[pos] {
                continue;
            }
            let ends = match self.dict.lookup(text, pos) {
                Some((templates, _)) => Self::add_chain(&mut graph, text, pos, templates, &mut sealed),
                None => self
                    .rules
                    .candidates(text, pos)
                    .into_iter()
                    .filter_map(|c| graph.add_edge(c.syllable).then_some(c.end))
                    .collect(),
            };
            for end in ends {
                if !seen[end] {
                    seen[end] = true;
                    worklist.insert(end);
                }
            }
        }

        let before = graph.edge_count();
        graph.prune()?;
        debug!(
            "built graph over {} chars: {} edges, {} pruned",
            n,
            graph.edge_count(),
            before - graph.edge_count()
        );
        Ok(graph)
    }

    /// Add the dictionary breakdown starting at `pos` as a chain of edges.
    /// Returns the chain's end, the only node it makes reachable from
    /// outside.
    fn add_chain(
        graph: &mut PronunciationGraph,
        text: &[char],
        pos: usize,
        templates: &[SyllableTemplate],
        sealed: &mut [bool],
    ) -> Vec<usize> {
        let mut at = pos;
        for (i, t) in templates.iter().enumerate() {
            let end = at + t.len;
            let spelling: String = text[at..end].iter().collect();
            graph.add_edge(Syllable::thai(at..end, spelling, t.phonemes.clone()));
            if i + 1 < templates.len() {
                sealed[end] = true;
            }
            at = end;
        }
        vec![at]
    }
}
