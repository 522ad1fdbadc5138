// thaipron/core/src/graph.rs
//
// Pronunciation graph: a DAG over character positions 0..=N of the input
// whose edges are syllables. Every path from 0 to N is one complete reading
// of the word.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::ParseError;
use crate::syllable::Syllable;

/// Cap on alternatives enumerated for a single group.
pub const MAX_GROUP_ALTERNATIVES: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphNodes")]
pub struct PronunciationGraph {
    /// `nodes[p]` holds the edges leaving position `p`, in preference order.
    /// Never empty: the terminal node is always present.
    nodes: Vec<Vec<Syllable>>,
}

#[derive(Deserialize)]
struct GraphNodes {
    nodes: Vec<Vec<Syllable>>,
}

impl TryFrom<GraphNodes> for PronunciationGraph {
    type Error = String;

    fn try_from(raw: GraphNodes) -> Result<Self, Self::Error> {
        let n = raw.nodes.len();
        if n == 0 {
            return Err("graph has no terminal node".to_string());
        }
        for (p, out) in raw.nodes.iter().enumerate() {
            if let Some(e) = out.iter().find(|e| e.start() != p || e.end() <= p || e.end() >= n) {
                return Err(format!("edge {}..{} misplaced at node {p}", e.start(), e.end()));
            }
        }
        Ok(Self { nodes: raw.nodes })
    }
}

impl Default for PronunciationGraph {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PronunciationGraph {
    /// Graph over an input of `len` characters with no edges yet.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![Vec::new(); len + 1],
        }
    }

    /// Number of characters in the input (the terminal node).
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an edge after any already leaving the same node. Zero-length
    /// edges, edges outside the graph and exact duplicates are ignored.
    pub fn add_edge(&mut self, syllable: Syllable) -> bool {
        let (from, to) = (syllable.start(), syllable.end());
        if from >= to || to > self.len() {
            return false;
        }
        let out = &mut self.nodes[from];
        if out.contains(&syllable) {
            return false;
        }
        out.push(syllable);
        true
    }

    pub fn edges_from(&self, pos: usize) -> &[Syllable] {
        self.nodes.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All edges, ordered by start position then preference.
    pub fn edges(&self) -> impl Iterator<Item = &Syllable> {
        self.nodes.iter().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Vec::len).sum()
    }

    /// Drop every edge not on some path from 0 to N.
    ///
    /// Fails with the furthest position reachable from 0 when no such path
    /// exists.
    pub fn prune(&mut self) -> Result<(), ParseError> {
        let n = self.len();

        let mut reachable = vec![false; n + 1];
        reachable[0] = true;
        for p in 0..n {
            if reachable[p] {
                for e in &self.nodes[p] {
                    reachable[e.end()] = true;
                }
            }
        }

        let mut alive = vec![false; n + 1];
        alive[n] = true;
        for p in (0..n).rev() {
            alive[p] = self.nodes[p].iter().any(|e| alive[e.end()]);
        }

        if !alive[0] {
            let furthest = (0..=n).rev().find(|&p| reachable[p]).unwrap_or(0);
            return Err(ParseError::Unparseable(furthest));
        }

        for p in 0..n {
            if reachable[p] {
                self.nodes[p].retain(|e| alive[e.end()]);
            } else {
                self.nodes[p].clear();
            }
        }
        Ok(())
    }

    /// Positions reachable from `from` by following edges.
    pub fn reachable_from(&self, from: usize) -> Vec<bool> {
        let n = self.len();
        let mut reachable = vec![false; n + 1];
        if from > n {
            return reachable;
        }
        reachable[from] = true;
        for p in from..n {
            if reachable[p] {
                for e in &self.nodes[p] {
                    reachable[e.end()] = true;
                }
            }
        }
        reachable
    }

    /// The edges lying inside `range`, re-based to start at 0 and pruned.
    pub fn slice(&self, range: Range<usize>) -> Result<PronunciationGraph, ParseError> {
        let (a, b) = (range.start, range.end.min(self.len()));
        let mut out = PronunciationGraph::new(b.saturating_sub(a));
        for p in a..b {
            for e in self.nodes[p].iter().filter(|e| e.end() <= b) {
                let mut edge = e.clone();
                edge.span = e.start() - a..e.end() - a;
                out.add_edge(edge);
            }
        }
        out.prune()
            .map_err(|ParseError::Unparseable(p)| ParseError::Unparseable(a + p))?;
        Ok(out)
    }

    /// Append `other` after this graph's terminal node.
    pub fn append(&mut self, other: PronunciationGraph) {
        let offset = self.len();
        self.nodes.pop();
        for out in other.nodes {
            self.nodes
                .push(out.into_iter().map(|s| s.shifted(offset)).collect());
        }
    }

    /// Preferred reading: from each node follow its first edge.
    ///
    /// Only meaningful on a pruned graph, where every first edge leads on
    /// to the terminal node.
    pub fn primary_path(&self) -> Vec<&Syllable> {
        let mut path = Vec::new();
        let mut pos = 0;
        while pos < self.len() {
            match self.nodes[pos].first() {
                Some(edge) => {
                    path.push(edge);
                    pos = edge.end();
                }
                None => break,
            }
        }
        path
    }

    /// Positions every reading passes through, including 0 and N.
    pub fn mandatory_cuts(&self) -> Vec<usize> {
        let n = self.len();
        let mut spanned = vec![false; n + 1];
        let mut visited = vec![false; n + 1];
        visited[0] = true;
        for e in self.edges() {
            visited[e.start()] = true;
            visited[e.end()] = true;
            for p in e.start() + 1..e.end() {
                spanned[p] = true;
            }
        }
        (0..=n).filter(|&p| visited[p] && !spanned[p]).collect()
    }

    /// Readings grouped between mandatory cut points. Each group lists its
    /// alternative syllable sequences; the first is the primary one.
    pub fn groups(&self) -> Vec<Vec<Vec<&Syllable>>> {
        let cuts = self.mandatory_cuts();
        cuts.windows(2)
            .map(|w| {
                let mut alts = Vec::new();
                let mut stack = Vec::new();
                self.collect_paths(w[0], w[1], &mut stack, &mut alts);
                alts
            })
            .collect()
    }

    fn collect_paths<'a>(
        &'a self,
        pos: usize,
        target: usize,
        stack: &mut Vec<&'a Syllable>,
        out: &mut Vec<Vec<&'a Syllable>>,
    ) {
        if out.len() >= MAX_GROUP_ALTERNATIVES {
            return;
        }
        if pos == target {
            out.push(stack.clone());
            return;
        }
        for e in &self.nodes[pos] {
            if e.end() <= target {
                stack.push(e);
                self.collect_paths(e.end(), target, stack, out);
                stack.pop();
            }
        }
    }

    /// Number of distinct readings from 0 to N.
    pub fn path_count(&self) -> u64 {
        let n = self.len();
        let mut count = vec![0u64; n + 1];
        count[n] = 1;
        for p in (0..n).rev() {
            count[p] = self.nodes[p]
                .iter()
                .fold(0u64, |acc, e| acc.saturating_add(count[e.end()]));
        }
        count[0]
    }
}
