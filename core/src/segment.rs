// thaipron/core/src/segment.rs
//
// Word-boundary segmentation by maximal matching over the syllable lattice.
//
// Runs of non-Thai characters are kept whole. Each Thai run is split with a
// shortest-path DP whose steps are either a known word or one syllable edge
// of the lattice. It first minimises syllables not covered by a known word,
// then the number of words. A known word is only taken when the lattice can
// read it on its own, so no word boundary falls inside a syllable. Adjacent
// unknown syllables are merged into a single span.

use std::ops::Range;
use tracing::debug;

use crate::chars::{classify, Category};
use crate::graph::PronunciationGraph;
use crate::wordlist::WordSource;

/// One span of the segmented input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub range: Range<usize>,
    /// Matched by a word source rather than left over between words.
    pub known: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cost {
    unknown: usize,
    words: usize,
}

#[derive(Debug, Clone, Copy)]
struct Step {
    prev: usize,
    known: bool,
}

/// Split `text` into contiguous spans that cover it exactly. `lattice` is
/// the pruned graph of every reading of `text`.
pub fn segment(
    text: &[char],
    lattice: &PronunciationGraph,
    sources: &[&dyn WordSource],
) -> Vec<WordSpan> {
    let mut out = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let other = classify(text[pos]) == Category::Other;
        let mut end = pos + 1;
        while end < text.len() && (classify(text[end]) == Category::Other) == other {
            end += 1;
        }
        if other {
            out.push(WordSpan {
                range: pos..end,
                known: false,
            });
        } else {
            out.extend(segment_run(text, pos..end, lattice, sources));
        }
        pos = end;
    }
    debug!("segmented {} chars into {} spans", text.len(), out.len());
    out
}

fn segment_run(
    text: &[char],
    run: Range<usize>,
    lattice: &PronunciationGraph,
    sources: &[&dyn WordSource],
) -> Vec<WordSpan> {
    let (a, b) = (run.start, run.end);
    let len = b - a;
    let mut best: Vec<Option<(Cost, Step)>> = vec![None; len + 1];
    best[0] = Some((Cost { unknown: 0, words: 0 }, Step { prev: 0, known: false }));

    fn relax(best: &mut [Option<(Cost, Step)>], at: usize, cost: Cost, step: Step) {
        match best[at] {
            Some((c, _)) if c <= cost => {}
            _ => best[at] = Some((cost, step)),
        }
    }

    for i in 0..len {
        let Some((cost, _)) = best[i] else { continue };
        let pos = a + i;

        let mut ends: Vec<usize> = sources
            .iter()
            .flat_map(|s| s.word_ends(text, pos))
            .filter(|&e| e <= b)
            .collect();
        if !ends.is_empty() {
            let reachable = lattice.reachable_from(pos);
            ends.sort_unstable_by(|x, y| y.cmp(x));
            ends.dedup();
            for e in ends.into_iter().filter(|&e| reachable[e]) {
                let c = Cost {
                    unknown: cost.unknown,
                    words: cost.words + 1,
                };
                relax(&mut best, e - a, c, Step { prev: i, known: true });
            }
        }

        for edge in lattice.edges_from(pos).iter().filter(|e| e.end() <= b) {
            let c = Cost {
                unknown: cost.unknown + 1,
                words: cost.words,
            };
            relax(&mut best, edge.end() - a, c, Step { prev: i, known: false });
        }
    }

    if best[len].is_none() {
        return vec![WordSpan {
            range: run,
            known: false,
        }];
    }

    let mut spans: Vec<WordSpan> = Vec::new();
    let mut at = len;
    while at > 0 {
        let Some((_, step)) = best[at] else { break };
        spans.push(WordSpan {
            range: a + step.prev..a + at,
            known: step.known,
        });
        at = step.prev;
    }
    spans.reverse();

    let mut merged: Vec<WordSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if !last.known && !span.known => last.range.end = span.range.end,
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::Syllable;
    use crate::wordlist::WordList;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Lattice with one edge per `(start, end)` pair.
    fn lattice(len: usize, edges: &[(usize, usize)]) -> PronunciationGraph {
        let mut g = PronunciationGraph::new(len);
        for &(from, to) in edges {
            g.add_edge(Syllable::verbatim(from..to, format!("{from}-{to}")));
        }
        g.prune().unwrap();
        g
    }

    fn words(text: &[char], spans: &[WordSpan]) -> Vec<String> {
        spans.iter().map(|s| text[s.range.clone()].iter().collect()).collect()
    }

    #[test]
    fn test_known_words() {
        let list = WordList::from_words(["อุดร", "รโหฐาน", "อุด"]).unwrap();
        let text = chars("อุดรรโหฐาน");
        // อุ ดร รโห ฐาน, or อุ ดอน ระ โห ฐาน
        let g = lattice(10, &[(0, 1), (1, 3), (3, 7), (1, 4), (4, 5), (5, 7), (7, 10)]);
        let spans = segment(&text, &g, &[&list]);
        assert_eq!(words(&text, &spans), vec!["อุดร", "รโหฐาน"]);
        assert!(spans.iter().all(|s| s.known));
    }

    #[test]
    fn test_unknown_runs_are_merged() {
        let list = WordList::from_words(["ชีวิต"]).unwrap();
        let text = chars("กุมบังชีวิต");
        let g = lattice(11, &[(0, 3), (3, 6), (6, 8), (8, 11)]);
        let spans = segment(&text, &g, &[&list]);
        assert_eq!(words(&text, &spans), vec!["กุมบัง", "ชีวิต"]);
        assert!(!spans[0].known);
        assert!(spans[1].known);
    }

    #[test]
    fn test_other_runs_stand_alone() {
        let list = WordList::from_words(["กรุงเทพ"]).unwrap();
        let text = chars("กรุงเทพฯ 10800");
        let g = lattice(14, &[(0, 4), (4, 7), (7, 14)]);
        let spans = segment(&text, &g, &[&list]);
        assert_eq!(words(&text, &spans), vec!["กรุงเทพ", "ฯ 10800"]);
    }

    #[test]
    fn test_word_must_end_on_a_syllable_boundary() {
        // การ์ด is one syllable, so การ cannot be cut off
        let list = WordList::from_words(["การ"]).unwrap();
        let text = chars("การ์ด");
        let g = lattice(5, &[(0, 5)]);
        assert_eq!(segment(&text, &g, &[&list]), vec![WordSpan { range: 0..5, known: false }]);
    }

    #[test]
    fn test_word_may_not_leave_part_of_a_syllable() {
        // เหมา is read whole; มา inside it would strand the leading vowel
        let list = WordList::from_words(["มา"]).unwrap();
        let text = chars("เหมา");
        let g = lattice(4, &[(0, 4)]);
        let spans = segment(&text, &g, &[&list]);
        assert_eq!(words(&text, &spans), vec!["เหมา"]);
    }

    #[test]
    fn test_fewer_unknown_syllables_win() {
        // มาตร is one syllable; the word มา would leave ตร to be read alone
        let list = WordList::from_words(["มา"]).unwrap();
        let text = chars("มาตร");
        let g = lattice(4, &[(0, 4), (0, 2), (2, 4)]);
        let spans = segment(&text, &g, &[&list]);
        assert_eq!(spans, vec![WordSpan { range: 0..4, known: false }]);
    }

    #[test]
    fn test_covers_input_exactly() {
        let list = WordList::from_words(["ไป", "มา"]).unwrap();
        let text = chars("ไปมาabcไป");
        let g = lattice(9, &[(0, 2), (2, 4), (4, 7), (7, 9)]);
        let spans = segment(&text, &g, &[&list]);
        let mut pos = 0;
        for s in &spans {
            assert_eq!(s.range.start, pos);
            pos = s.range.end;
        }
        assert_eq!(pos, text.len());
    }
}
