// thaipron/libthaipron/src/rules.rs
//
// Syllable rule engine.
//
// Given a position in a word, `SyllableRules::candidates` lists every
// syllable that can be spelled starting there, most preferred first. The
// engine knows Thai orthography only; it has no lexicon. Choosing between
// candidates is left to the graph, which keeps all of them that lead to a
// complete reading.

use phf::{phf_map, phf_set};
use thaipron_core::chars::{classify, is_final_capable, Category, THANTHAKHAT};
use thaipron_core::syllable::{
    Final, FinalSound, Initial, InitialKind, Phonemes, Syllable, Tone, Vowel,
};

/// Preference between candidates ending at the same position. Lower sorts
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Leading vowel moved onto the next consonant, front half.
    SplitLead,
    /// Onset borrowed from the previous coda.
    Linked,
    ClusterVowel,
    SimpleVowel,
    /// รร read as a vowel.
    RoHan,
    ImplicitFinal,
    /// Split front half with no matching tail.
    SplitFront,
    OpenOr,
    OpenA,
    Verbatim,
    /// Swallows a likely final into a cancelled group, or mutes a vowel that
    /// could open the next syllable. Sorts after every other candidate.
    Doubtful,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub end: usize,
    pub rank: Rank,
    pub syllable: Syllable,
}

// Second letters that ห silences into a leading onset.
static LEADING_HO: phf::Set<char> = phf_set! { 'ง', 'ญ', 'น', 'ม', 'ย', 'ร', 'ล', 'ว' };

// Clusters only recognised after a leading vowel (loanwords: เบรก, ดรีม, เฟรม).
static LOAN_CLUSTERS: phf::Set<&'static str> = phf_set! { "บร", "บล", "ดร", "ฟร", "ฟล" };

// Written pair to the single consonant that is pronounced.
static FALSE_CLUSTERS: phf::Map<&'static str, char> = phf_map! {
    "จร" => 'จ',
    "ซร" => 'ซ',
    "ศร" => 'ศ',
    "สร" => 'ส',
    "ทร" => 'ซ',
};

// Finals after which a written ร is silent (สมุทร, จักร, เพชร).
static MUTE_R_AFTER: phf::Set<char> = phf_set! { 'ก', 'ค', 'ช', 'ต', 'ท', 'ป' };

// Finals after which a written ิ or ุ is silent (ชาติ, เหตุ, โพธิ).
static MUTE_VOWEL_AFTER: phf::Set<char> = phf_set! { 'ต', 'ท', 'ธ', 'ถ', 'ร', 'ม', 'ส', 'ศ', 'ษ' };

fn is_true_cluster(a: char, b: char) -> bool {
    matches!(
        (a, b),
        ('ก' | 'ข' | 'ค', 'ร' | 'ล' | 'ว') | ('ต', 'ร') | ('ป' | 'พ', 'ร' | 'ล') | ('ผ', 'ล')
    )
}

fn pair(a: char, b: char) -> String {
    [a, b].iter().collect()
}

#[derive(Debug, Clone)]
struct Onset {
    initial: Initial,
    end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coda {
    /// No final consonant; cancelled letters may still follow.
    Open,
    Optional,
    Required,
    /// The vowel spelling already carries the coda (ำ ไ เา เย).
    Fixed(FinalSound, &'static str),
    /// Written รร; closes on its own as -an or takes a real final.
    RoHan,
}

/// A way of closing a syllable: where it ends and what it sounds like.
#[derive(Debug, Clone)]
struct Closing {
    end: usize,
    coda: Final,
    doubtful: bool,
}

impl Closing {
    fn new(end: usize, coda: Final, doubtful: bool) -> Self {
        Closing {
            end,
            coda,
            doubtful,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Nucleus {
    vowel: Vowel,
    implicit: bool,
    tone: Tone,
    end: usize,
    coda: Coda,
}

impl Nucleus {
    fn new(vowel: Vowel, tone: Tone, end: usize, coda: Coda) -> Self {
        Nucleus {
            vowel,
            implicit: false,
            tone,
            end,
            coda,
        }
    }
}

/// The orthographic rule set.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyllableRules;

impl SyllableRules {
    pub fn new() -> Self {
        SyllableRules
    }

    /// Every syllable starting at `start`. Doubtful readings go last; the
    /// rest are sorted by end position descending, then by rank.
    pub fn candidates(&self, text: &[char], start: usize) -> Vec<Candidate> {
        let mut scan = Scan {
            t: text,
            out: Vec::new(),
        };
        match scan.cat(start) {
            None => {}
            Some(Category::Other) => scan.verbatim(start),
            Some(Category::Consonant) => {
                scan.plain(start);
                scan.rulu_cluster(start);
                scan.linked_cluster(start);
                scan.split_tail(start);
                scan.open_implicit(start);
            }
            Some(Category::LeadingVowel) => {
                scan.with_leading(start);
                scan.split_front(start);
            }
            Some(Category::RuLu) => scan.rulu(start),
            Some(Category::AboveVowel | Category::BelowVowel) => scan.linked_vowel(start),
            Some(_) => {}
        }

        let mut out = scan.out;
        out.sort_by(|a, b| {
            let doubtful = |c: &Candidate| c.rank == Rank::Doubtful;
            doubtful(a)
                .cmp(&doubtful(b))
                .then(b.end.cmp(&a.end))
                .then(a.rank.cmp(&b.rank))
        });
        let mut unique: Vec<Candidate> = Vec::with_capacity(out.len());
        for c in out {
            if !unique.iter().any(|u| u.syllable == c.syllable) {
                unique.push(c);
            }
        }
        unique
    }

    /// Read `text` as exactly one syllable, if the rules allow it.
    pub fn read_one(&self, text: &[char]) -> Option<Phonemes> {
        self.candidates(text, 0)
            .into_iter()
            .find(|c| c.end == text.len())
            .and_then(|c| c.syllable.phonemes().cloned())
    }
}

struct Scan<'a> {
    t: &'a [char],
    out: Vec<Candidate>,
}

impl<'a> Scan<'a> {
    fn at(&self, i: usize) -> Option<char> {
        self.t.get(i).copied()
    }

    fn is(&self, i: usize, c: char) -> bool {
        self.at(i) == Some(c)
    }

    fn cat(&self, i: usize) -> Option<Category> {
        self.at(i).map(classify)
    }

    fn consonant(&self, i: usize) -> Option<char> {
        self.at(i).filter(|&c| classify(c) == Category::Consonant)
    }

    fn opens_or_end(&self, i: usize) -> bool {
        self.cat(i).map_or(true, Category::opens_syllable)
    }

    /// A consonant at `i` can close a syllable here: it is not carrying a
    /// vowel sign, tone or cancellation mark of its own.
    fn coda_position(&self, i: usize) -> bool {
        match self.consonant(i) {
            Some(c) if is_final_capable(c) => !self.cat(i + 1).is_some_and(Category::is_mark),
            _ => false,
        }
    }

    fn tone_at(&self, i: usize) -> (Tone, usize) {
        match self.at(i).and_then(Tone::from_mark) {
            Some(tone) => (tone, i + 1),
            None => (Tone::None, i),
        }
    }

    fn text(&self, range: std::ops::Range<usize>) -> String {
        self.t[range].iter().collect()
    }

    /// One letter group silenced by ์: C์, CC์, Cิ์, CCิ์ (and ุ).
    fn karan_group(&self, i: usize) -> Option<usize> {
        self.consonant(i)?;
        let short_vowel = |j: usize| matches!(self.at(j), Some('ิ' | 'ุ'));
        if self.is(i + 1, THANTHAKHAT) {
            return Some(i + 2);
        }
        if short_vowel(i + 1) && self.is(i + 2, THANTHAKHAT) {
            return Some(i + 3);
        }
        if self.consonant(i + 1).is_some() {
            if self.is(i + 2, THANTHAKHAT) {
                return Some(i + 3);
            }
            if short_vowel(i + 2) && self.is(i + 3, THANTHAKHAT) {
                return Some(i + 4);
            }
        }
        None
    }

    /// Consume any run of cancelled groups from `i`.
    fn karan(&self, mut i: usize) -> (usize, String) {
        let mut silent = String::new();
        while let Some(end) = self.karan_group(i) {
            silent.push_str(&self.text(i..end));
            i = end;
        }
        (i, silent)
    }

    /// A cancelled group at `i` that starts with two consonants (ทันต์,
    /// แพทย์). Right after a final the group is suspect unless its second
    /// letter is ร (จันทร์, ศาสตร์); with no final yet, it is suspect when
    /// its first letter could have been that final (ฤทธิ์).
    fn doubtful_karan(&self, i: usize, after_final: bool) -> bool {
        let Some(head) = self.consonant(i) else {
            return false;
        };
        if self.karan_group(i).is_none() || self.consonant(i + 1).is_none() {
            return false;
        }
        if after_final {
            !self.is(i + 1, 'ร')
        } else {
            is_final_capable(head)
        }
    }

    fn push(&mut self, start: usize, end: usize, rank: Rank, phonemes: Phonemes) {
        let spelling = self.text(start..end);
        self.out.push(Candidate {
            end,
            rank,
            syllable: Syllable::thai(start..end, spelling, phonemes),
        });
    }

    // ---- onsets ----

    fn onsets(&self, i: usize, after_leading: bool) -> Vec<Onset> {
        let Some(c) = self.consonant(i) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        if let Some(c2) = self.consonant(i + 1) {
            let letters = pair(c, c2);
            if is_true_cluster(c, c2) || (after_leading && LOAN_CLUSTERS.contains(letters.as_str()))
            {
                out.push(Onset {
                    initial: Initial::cluster(c, c2),
                    end: i + 2,
                });
            } else if let Some(&sound) = FALSE_CLUSTERS.get(letters.as_str()) {
                out.push(Onset {
                    initial: Initial {
                        kind: InitialKind::FalseCluster,
                        letters,
                        sound,
                        cluster: None,
                    },
                    end: i + 2,
                });
            } else if (c == 'ห' && LEADING_HO.contains(&c2)) || (c == 'อ' && c2 == 'ย') {
                out.push(Onset {
                    initial: Initial {
                        kind: InitialKind::Leading,
                        letters,
                        sound: c2,
                        cluster: None,
                    },
                    end: i + 2,
                });
            }
        }
        out.push(Onset {
            initial: Initial::simple(c),
            end: i + 1,
        });
        out
    }

    /// True when the two letters would be read as one onset after a
    /// leading vowel, which rules out moving that vowel between them.
    fn forms_onset(&self, a: char, b: char) -> bool {
        is_true_cluster(a, b)
            || LOAN_CLUSTERS.contains(pair(a, b).as_str())
            || FALSE_CLUSTERS.contains_key(pair(a, b).as_str())
            || (a == 'ห' && LEADING_HO.contains(&b))
            || (a == 'อ' && b == 'ย')
    }

    // ---- nuclei ----

    /// Vowels written without a leading vowel, after an onset ending at `j`.
    fn nuclei(&self, j: usize) -> Vec<Nucleus> {
        use Vowel::*;
        let mut out = Vec::new();
        let upper = match self.cat(j) {
            Some(Category::AboveVowel | Category::BelowVowel) => self.at(j),
            _ => None,
        };
        let (tone, pos) = self.tone_at(if upper.is_some() { j + 1 } else { j });

        match upper {
            None => {
                match self.at(pos) {
                    Some('ะ') => out.push(Nucleus::new(A, tone, pos + 1, Coda::Open)),
                    Some('า') => out.push(Nucleus::new(Aa, tone, pos + 1, Coda::Optional)),
                    Some('ำ') => {
                        out.push(Nucleus::new(A, tone, pos + 1, Coda::Fixed(FinalSound::M, "")))
                    }
                    Some('อ') => out.push(Nucleus::new(Orr, tone, pos + 1, Coda::Optional)),
                    Some('ว') => out.push(Nucleus::new(Uua, tone, pos + 1, Coda::Required)),
                    _ => {}
                }
                if tone == Tone::None && self.is(pos, 'ร') && self.is(pos + 1, 'ร') {
                    out.push(Nucleus::new(A, tone, pos + 2, Coda::RoHan));
                }
                out.push(Nucleus {
                    vowel: O,
                    implicit: true,
                    tone,
                    end: pos,
                    coda: Coda::Required,
                });
            }
            Some('ั') => {
                if self.is(pos, 'ว') {
                    if self.is(pos + 1, 'ะ') {
                        out.push(Nucleus::new(Ua, tone, pos + 2, Coda::Open));
                    } else {
                        out.push(Nucleus::new(Uua, tone, pos + 1, Coda::Open));
                    }
                } else {
                    out.push(Nucleus::new(A, tone, pos, Coda::Required));
                }
            }
            Some('ิ') => out.push(Nucleus::new(I, tone, pos, Coda::Optional)),
            Some('ี') => out.push(Nucleus::new(Ii, tone, pos, Coda::Optional)),
            Some('ึ') => out.push(Nucleus::new(Ue, tone, pos, Coda::Optional)),
            Some('ื') => {
                if self.is(pos, 'อ') {
                    out.push(Nucleus::new(Uee, tone, pos + 1, Coda::Open));
                } else {
                    out.push(Nucleus::new(Uee, tone, pos, Coda::Required));
                }
            }
            Some('ุ') => out.push(Nucleus::new(U, tone, pos, Coda::Optional)),
            Some('ู') => out.push(Nucleus::new(Uu, tone, pos, Coda::Optional)),
            Some('็') if tone == Tone::None => {
                if self.is(pos, 'อ') {
                    out.push(Nucleus::new(Or, tone, pos + 1, Coda::Required));
                } else {
                    out.push(Nucleus::new(Or, tone, pos, Coda::Open));
                }
            }
            Some('ํ') if self.is(pos, 'า') => {
                out.push(Nucleus::new(A, tone, pos + 1, Coda::Fixed(FinalSound::M, "")))
            }
            _ => {}
        }
        out
    }

    /// Vowels spelled with leading vowel `lv`, after an onset ending at `j`.
    fn leading_nuclei(&self, lv: char, j: usize) -> Vec<Nucleus> {
        use Vowel::*;
        let mut out = Vec::new();
        let upper = match self.cat(j) {
            Some(Category::AboveVowel | Category::BelowVowel) => self.at(j),
            _ => None,
        };
        let (tone, pos) = self.tone_at(if upper.is_some() { j + 1 } else { j });

        match (lv, upper) {
            ('เ', None) => {
                match self.at(pos) {
                    Some('ะ') => out.push(Nucleus::new(E, tone, pos + 1, Coda::Open)),
                    Some('า') if self.is(pos + 1, 'ะ') => {
                        out.push(Nucleus::new(Or, tone, pos + 2, Coda::Open))
                    }
                    Some('า') => {
                        out.push(Nucleus::new(A, tone, pos + 1, Coda::Fixed(FinalSound::W, "")))
                    }
                    Some('อ') if self.is(pos + 1, 'ะ') => {
                        out.push(Nucleus::new(Oe, tone, pos + 2, Coda::Open))
                    }
                    Some('อ') => out.push(Nucleus::new(Oee, tone, pos + 1, Coda::Optional)),
                    Some('ย') if self.coda_position(pos) => out.push(Nucleus::new(
                        Oee,
                        tone,
                        pos + 1,
                        Coda::Fixed(FinalSound::Y, "ย"),
                    )),
                    _ => {}
                }
                if !(self.is(pos, 'ย') && self.coda_position(pos)) {
                    out.push(Nucleus::new(Ee, tone, pos, Coda::Optional));
                }
            }
            ('เ', Some('ิ')) => out.push(Nucleus::new(Oe, tone, pos, Coda::Required)),
            ('เ', Some('ี')) if self.is(pos, 'ย') => {
                if self.is(pos + 1, 'ะ') {
                    out.push(Nucleus::new(Ia, tone, pos + 2, Coda::Open));
                } else {
                    out.push(Nucleus::new(Iia, tone, pos + 1, Coda::Optional));
                }
            }
            ('เ', Some('ื')) if self.is(pos, 'อ') => {
                if self.is(pos + 1, 'ะ') {
                    out.push(Nucleus::new(Uea, tone, pos + 2, Coda::Open));
                } else {
                    out.push(Nucleus::new(Ueea, tone, pos + 1, Coda::Optional));
                }
            }
            ('เ', Some('็')) if tone == Tone::None => {
                out.push(Nucleus::new(E, tone, pos, Coda::Required))
            }
            ('แ', None) => {
                if self.is(pos, 'ะ') {
                    out.push(Nucleus::new(Ae, tone, pos + 1, Coda::Open));
                } else {
                    out.push(Nucleus::new(Aee, tone, pos, Coda::Optional));
                }
            }
            ('แ', Some('็')) if tone == Tone::None => {
                out.push(Nucleus::new(Ae, tone, pos, Coda::Required))
            }
            ('โ', None) => {
                if self.is(pos, 'ะ') {
                    out.push(Nucleus::new(O, tone, pos + 1, Coda::Open));
                } else {
                    out.push(Nucleus::new(Oo, tone, pos, Coda::Optional));
                }
            }
            ('ใ' | 'ไ', None) => {
                out.push(Nucleus::new(A, tone, pos, Coda::Fixed(FinalSound::Y, "")))
            }
            _ => {}
        }
        out
    }

    // ---- codas ----

    /// Possible codas after an explicit nucleus.
    fn codas(&self, nuc: &Nucleus, lv: Option<char>) -> Vec<Closing> {
        let pos = nuc.end;
        let mut out = Vec::new();
        match nuc.coda {
            Coda::Open => {
                let (end, silent) = self.karan(pos);
                let doubtful = self.doubtful_karan(pos, false);
                out.push(Closing::new(end, Final::open().with_silent(silent), doubtful));
            }
            Coda::Fixed(sound, written) => {
                let (end, silent) = self.karan(pos);
                let doubtful = self.doubtful_karan(pos, true);
                out.push(Closing::new(
                    end,
                    Final::new(sound, written).with_silent(silent),
                    doubtful,
                ));
                // ไทย: a written ย after ไ adds nothing
                if lv == Some('ไ') && end == pos && self.is(pos, 'ย') && self.coda_position(pos) {
                    out.push(Closing::new(
                        pos + 1,
                        Final::new(sound, written).with_silent("ย"),
                        false,
                    ));
                }
            }
            Coda::Optional => {
                let (end, silent) = self.karan(pos);
                let doubtful = self.doubtful_karan(pos, false);
                out.push(Closing::new(end, Final::open().with_silent(silent), doubtful));
                out.extend(self.closed(pos, true));
            }
            Coda::Required => out.extend(self.closed(pos, true)),
            Coda::RoHan => {
                if self.coda_position(pos) {
                    out.extend(self.closed(pos, false));
                }
                let (end, silent) = self.karan(pos);
                if end > pos || self.opens_or_end(pos) {
                    let doubtful = self.doubtful_karan(pos, true);
                    out.push(Closing::new(
                        end,
                        Final::new(FinalSound::N, "รร").with_silent(silent),
                        doubtful,
                    ));
                }
            }
        }
        out
    }

    /// Codas with a written final consonant at `pos`, or after a cancelled
    /// group starting there. Silent ร and silent short vowels are only
    /// recognised after an explicit vowel.
    fn closed(&self, pos: usize, explicit: bool) -> Vec<Closing> {
        let mut out = Vec::new();
        self.close_at(pos, String::new(), explicit, false, &mut out);
        let (skipped, before) = self.karan(pos);
        if skipped > pos {
            let doubtful = self.doubtful_karan(pos, false);
            self.close_at(skipped, before, explicit, doubtful, &mut out);
        }
        out
    }

    fn close_at(
        &self,
        k0: usize,
        before: String,
        explicit: bool,
        doubtful: bool,
        out: &mut Vec<Closing>,
    ) {
        let Some(c) = self.consonant(k0).filter(|&c| is_final_capable(c)) else {
            return;
        };
        let Some(sound) = FinalSound::of_letter(c) else {
            return;
        };
        let next = k0 + 1;
        // the final may also open the next syllable (จัตุรัส)
        let links = MUTE_VOWEL_AFTER.contains(&c)
            && matches!(self.at(next), Some('ิ' | 'ี' | 'ุ' | 'ู'))
            && self.borrowable(next).is_some();

        if explicit
            && MUTE_VOWEL_AFTER.contains(&c)
            && matches!(self.at(next), Some('ิ' | 'ุ'))
            && self.opens_or_end(next + 1)
        {
            let opens_next = links && self.cat(next + 1).is_some_and(|k| k != Category::Other);
            let silent = format!("{before}{}", self.t[next]);
            out.push(Closing::new(
                next + 1,
                Final::new(sound, c.to_string()).with_silent(silent),
                doubtful || opens_next,
            ));
        }
        if links {
            out.push(Closing::new(
                next,
                Final::new(sound, c.to_string()).with_silent(before.clone()),
                doubtful,
            ));
        }

        if !self.coda_position(k0) {
            return;
        }
        let (end, after) = self.karan(next);
        out.push(Closing::new(
            end,
            Final::new(sound, c.to_string()).with_silent(format!("{before}{after}")),
            doubtful || self.doubtful_karan(next, true),
        ));

        if explicit
            && after.is_empty()
            && MUTE_R_AFTER.contains(&c)
            && self.is(next, 'ร')
            && self.opens_or_end(next + 1)
        {
            out.push(Closing::new(
                next + 1,
                Final::new(sound, c.to_string()).with_silent(format!("{before}ร")),
                doubtful,
            ));
        }
    }

    /// Codas closing an unwritten vowel. The vowel is short o, except that
    /// a final ร reads -ɔɔn when nothing but a boundary follows it.
    fn implicit_codas(&self, pos: usize) -> Vec<(Vowel, Closing)> {
        let Some(c) = self.consonant(pos) else {
            return Vec::new();
        };
        if c == 'ว' || !self.coda_position(pos) {
            return Vec::new();
        }
        let Some(sound) = FinalSound::of_letter(c) else {
            return Vec::new();
        };
        let next = pos + 1;
        let (end, silent) = self.karan(next);
        let doubtful = self.doubtful_karan(next, true);
        if c == 'ร' {
            let boundary = end > next
                || matches!(
                    self.cat(next),
                    None | Some(Category::LeadingVowel | Category::Other)
                );
            if boundary {
                let coda = Final::new(FinalSound::N, "ร").with_silent(silent);
                return vec![(Vowel::Orr, Closing::new(end, coda, doubtful))];
            }
            return Vec::new();
        }
        let coda = Final::new(sound, c.to_string()).with_silent(silent);
        vec![(Vowel::O, Closing::new(end, coda, doubtful))]
    }

    fn emit_nucleus(&mut self, start: usize, initial: &Initial, nuc: Nucleus, lv: Option<char>, rank: Rank) {
        if nuc.implicit {
            for (vowel, closing) in self.implicit_codas(nuc.end) {
                let ph = Phonemes {
                    initial: initial.clone(),
                    vowel,
                    implicit: true,
                    tone: nuc.tone,
                    coda: closing.coda,
                };
                let rank = if closing.doubtful { Rank::Doubtful } else { Rank::ImplicitFinal };
                self.push(start, closing.end, rank, ph);
            }
            return;
        }
        let rank = if nuc.coda == Coda::RoHan { Rank::RoHan } else { rank };
        for closing in self.codas(&nuc, lv) {
            let ph = Phonemes {
                initial: initial.clone(),
                vowel: nuc.vowel,
                implicit: false,
                tone: nuc.tone,
                coda: closing.coda,
            };
            let rank = if closing.doubtful { Rank::Doubtful } else { rank };
            self.push(start, closing.end, rank, ph);
        }
    }

    fn onset_rank(initial: &Initial) -> Rank {
        match initial.kind {
            InitialKind::Simple => Rank::SimpleVowel,
            _ => Rank::ClusterVowel,
        }
    }

    // ---- syllable shapes ----

    /// Consonant-initial syllables without a leading vowel.
    fn plain(&mut self, p: usize) {
        for onset in self.onsets(p, false) {
            let rank = Self::onset_rank(&onset.initial);
            for nuc in self.nuclei(onset.end) {
                // กว + unwritten vowel is ก + ัว, already listed by the simple onset
                if nuc.implicit && onset.initial.cluster == Some('ว') {
                    continue;
                }
                if nuc.coda == Coda::RoHan && onset.initial.kind != InitialKind::Simple {
                    continue;
                }
                self.emit_nucleus(p, &onset.initial, nuc, None, rank);
            }
        }
    }

    /// Syllables opening with a leading vowel at `p`.
    fn with_leading(&mut self, p: usize) {
        let Some(lv) = self.at(p) else { return };
        for onset in self.onsets(p + 1, true) {
            let rank = Self::onset_rank(&onset.initial);
            for nuc in self.leading_nuclei(lv, onset.end) {
                self.emit_nucleus(p, &onset.initial, nuc, Some(lv), rank);
            }
        }
    }

    /// `LV C1 C2...` read as C1+a followed by LV applied to C2 (เสลา, แสยะ).
    /// This is the front half, spanning the leading vowel and C1.
    fn split_front(&mut self, p: usize) {
        let (Some(c1), Some(c2)) = (self.consonant(p + 1), self.consonant(p + 2)) else {
            return;
        };
        if c1 == 'ห' || self.forms_onset(c1, c2) {
            return;
        }
        let tail = {
            let mut tail_scan = Scan {
                t: self.t,
                out: Vec::new(),
            };
            tail_scan.split_tail(p + 2);
            !tail_scan.out.is_empty()
        };
        let rank = if tail { Rank::SplitLead } else { Rank::SplitFront };
        let ph = Phonemes {
            initial: Initial::simple(c1),
            vowel: Vowel::A,
            implicit: true,
            tone: Tone::None,
            coda: Final::open(),
        };
        self.push(p, p + 2, rank, ph);
    }

    /// Back half of a split leading vowel: syllables at `q` that borrow the
    /// leading vowel written two letters earlier.
    fn split_tail(&mut self, q: usize) {
        if q < 2 || self.cat(q - 2) != Some(Category::LeadingVowel) {
            return;
        }
        let (Some(c1), Some(c2)) = (self.consonant(q - 1), self.consonant(q)) else {
            return;
        };
        if c1 == 'ห' || self.forms_onset(c1, c2) {
            return;
        }
        let lv = self.t[q - 2];
        for onset in self.onsets(q, true) {
            let rank = Self::onset_rank(&onset.initial);
            for nuc in self.leading_nuclei(lv, onset.end) {
                self.emit_nucleus(q, &onset.initial, nuc, Some(lv), rank);
            }
        }
    }

    /// The previous syllable's final is written once but also opens this
    /// one. True when `q` follows a consonant that itself follows a vowel
    /// sign or tone mark.
    fn borrowable(&self, q: usize) -> Option<char> {
        if q < 2 {
            return None;
        }
        let prev = self.consonant(q - 1).filter(|&c| is_final_capable(c))?;
        match self.cat(q - 2) {
            Some(c) if c.is_vowel_sign() || c == Category::Tone => Some(prev),
            _ => None,
        }
    }

    /// Linked onset before a short vowel sign (จัตุรัส, ปฏิบัติ).
    fn linked_vowel(&mut self, q: usize) {
        if !matches!(self.at(q), Some('ิ' | 'ี' | 'ุ' | 'ู')) {
            return;
        }
        let Some(prev) = self.borrowable(q) else { return };
        let initial = Initial {
            kind: InitialKind::Linked,
            letters: prev.to_string(),
            sound: prev,
            cluster: None,
        };
        for nuc in self.nuclei(q) {
            self.emit_nucleus(q, &initial, nuc, None, Rank::Linked);
        }
    }

    /// Linked onset forming a true cluster with the letter at `q` (อัตรา,
    /// ศัตรู).
    fn linked_cluster(&mut self, q: usize) {
        let Some(prev) = self.borrowable(q) else { return };
        let Some(c) = self.consonant(q) else { return };
        if !is_true_cluster(prev, c) {
            return;
        }
        let initial = Initial {
            kind: InitialKind::Linked,
            letters: pair(prev, c),
            sound: prev,
            cluster: Some(c),
        };
        for nuc in self.nuclei(q + 1) {
            if nuc.implicit || nuc.coda == Coda::RoHan {
                continue;
            }
            self.emit_nucleus(q, &initial, nuc, None, Rank::Linked);
        }
    }

    /// A lone consonant with an unwritten open vowel: -a, or -ɔɔ before ร
    /// and for บ.
    fn open_implicit(&mut self, p: usize) {
        let Some(c) = self.consonant(p) else { return };
        let next = self.cat(p + 1);
        if next.is_some_and(Category::is_mark) {
            return;
        }
        let open = |vowel| Phonemes {
            initial: Initial::simple(c),
            vowel,
            implicit: true,
            tone: Tone::None,
            coda: Final::open(),
        };

        if self.is(p + 1, 'ร') || (c == 'บ' && next == Some(Category::Consonant)) {
            self.push(p, p + 1, Rank::OpenOr, open(Vowel::Orr));
        }

        let starts_run = p == 0 || self.cat(p - 1) == Some(Category::Other);
        let allowed = match next {
            None | Some(Category::Other) => starts_run,
            Some(Category::Consonant | Category::LeadingVowel | Category::RuLu) => true,
            Some(_) => false,
        };
        if allowed {
            self.push(p, p + 1, Rank::OpenA, open(Vowel::A));
        }
    }

    /// ฤ and ฦ on their own.
    fn rulu(&mut self, p: usize) {
        let Some(r) = self.at(p) else { return };
        let sound = if r == 'ฤ' { 'ร' } else { 'ล' };
        let initial = Initial {
            kind: InitialKind::RuLu,
            letters: r.to_string(),
            sound,
            cluster: None,
        };
        if self.is(p + 1, 'ๅ') {
            let nuc = Nucleus::new(Vowel::Uee, Tone::None, p + 2, Coda::Open);
            self.emit_nucleus(p, &initial, nuc, None, Rank::SimpleVowel);
            return;
        }
        let open = Nucleus::new(Vowel::Ue, Tone::None, p + 1, Coda::Open);
        self.emit_nucleus(p, &initial, open, None, Rank::SimpleVowel);
        if r == 'ฤ' {
            for closing in self.closed(p + 1, false) {
                let ph = Phonemes {
                    initial: initial.clone(),
                    vowel: Vowel::I,
                    implicit: false,
                    tone: Tone::None,
                    coda: closing.coda,
                };
                let rank = if closing.doubtful { Rank::Doubtful } else { Rank::SimpleVowel };
                self.push(p, closing.end, rank, ph);
            }
        }
    }

    /// Consonant + ฤ/ฦ, read as a cluster with ร/ล (อังกฤษ, พฤหัส).
    fn rulu_cluster(&mut self, p: usize) {
        let Some(c) = self.consonant(p) else { return };
        let second = match self.at(p + 1) {
            Some('ฤ') => 'ร',
            Some('ฦ') => 'ล',
            _ => return,
        };
        let initial = Initial {
            kind: InitialKind::Cluster,
            letters: self.text(p..p + 2),
            sound: c,
            cluster: Some(second),
        };
        let open = Nucleus::new(Vowel::Ue, Tone::None, p + 2, Coda::Open);
        self.emit_nucleus(p, &initial, open, None, Rank::ClusterVowel);
        for closing in self.closed(p + 2, false) {
            let ph = Phonemes {
                initial: initial.clone(),
                vowel: Vowel::I,
                implicit: false,
                tone: Tone::None,
                coda: closing.coda,
            };
            let rank = if closing.doubtful { Rank::Doubtful } else { Rank::ClusterVowel };
            self.push(p, closing.end, rank, ph);
        }
    }

    /// A maximal run of non-Thai characters, passed through whole.
    fn verbatim(&mut self, p: usize) {
        let mut end = p + 1;
        while self.cat(end) == Some(Category::Other) {
            end += 1;
        }
        let spelling = self.text(p..end);
        self.out.push(Candidate {
            end,
            rank: Rank::Verbatim,
            syllable: Syllable::verbatim(p..end, spelling),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Phonetic respellings of the candidates at `start` covering the
    /// whole input.
    fn whole(s: &str) -> Vec<String> {
        let text = chars(s);
        SyllableRules
            .candidates(&text, 0)
            .into_iter()
            .filter(|c| c.end == text.len())
            .map(|c| c.syllable.to_thai())
            .collect()
    }

    fn first_whole(s: &str) -> String {
        whole(s).into_iter().next().unwrap_or_default()
    }

    #[test]
    fn test_simple_vowels() {
        assert_eq!(first_whole("ค่ะ"), "ค่ะ");
        assert_eq!(first_whole("ข้า"), "ข้า");
        assert_eq!(first_whole("ขำ"), "ขำ");
        assert_eq!(first_whole("ขึ้น"), "ขึ้น");
        assert_eq!(first_whole("ซื่อ"), "ซื่อ");
        assert_eq!(first_whole("ปู้ด"), "ปู้ด");
        assert_eq!(first_whole("ก่อ"), "ก่อ");
    }

    #[test]
    fn test_final_sounds_normalised() {
        assert_eq!(first_whole("ขืน"), "ขืน");
        assert_eq!(first_whole("วัน"), "วัน");
        assert_eq!(first_whole("มาด"), "มาด");
        assert_eq!(first_whole("ข้าง"), "ข้าง");
        assert_eq!(first_whole("กวง"), "กวง");
    }

    #[test]
    fn test_implicit_vowels() {
        assert_eq!(first_whole("ข้น"), "ข้น");
        assert_eq!(first_whole("พร"), "พอน");
        assert_eq!(first_whole("สรร"), "สัน");
        assert_eq!(first_whole("ธรรม"), "ธัม");
    }

    #[test]
    fn test_leading_vowels() {
        assert_eq!(first_whole("เป็น"), "เป็น");
        assert_eq!(first_whole("เลย"), "เลย");
        assert_eq!(first_whole("เกาะ"), "เกาะ");
        assert_eq!(first_whole("เกา"), "เกา");
        assert_eq!(first_whole("เสีย"), "เสีย");
        assert_eq!(first_whole("เกือบ"), "เกือบ");
        assert_eq!(first_whole("ไทย"), "ไท");
        assert_eq!(first_whole("ใคร่"), "ไคฺร่");
    }

    #[test]
    fn test_thanthakhat_groups() {
        assert_eq!(first_whole("ฟาร์ม"), "ฟาม");
        assert_eq!(first_whole("ฟอร์ม"), "ฟอม");
        assert_eq!(first_whole("จันทร์"), "จัน");
        assert_eq!(first_whole("ศาสตร์"), "ศาด");
        assert_eq!(first_whole("พีร์"), "พี");
    }

    #[test]
    fn test_silent_letters_after_final() {
        assert_eq!(first_whole("ชาติ"), "ชาด");
        assert!(whole("สมุทร").is_empty());
        let text = chars("มุทร");
        let c = &SyllableRules.candidates(&text, 0)[0];
        assert_eq!(c.end, 4);
        assert!(c.syllable.phonemes().unwrap().coda.is_muted());
    }

    #[test]
    fn test_final_before_cancelled_group() {
        assert_eq!(first_whole("ทันต์"), "ทัน");
        assert_eq!(first_whole("แพทย์"), "แพด");
        assert_eq!(first_whole("ฤทธิ์"), "ริด");
        assert_eq!(first_whole("สวรรค์"), "สวน");
        // a CC์ group right after the vowel stays available
        assert!(whole("แพทย์").contains(&"แพ".to_string()));
        let text = chars("ศาสตร์");
        let c = &SyllableRules.candidates(&text, 0)[0];
        assert_eq!(c.end, 6);
        assert_ne!(c.rank, Rank::Doubtful);
    }

    #[test]
    fn test_final_links_into_vowel() {
        let text = chars("จัตุรัส");
        let c = SyllableRules.candidates(&text, 0);
        assert_eq!(c[0].end, 3);
        assert_eq!(c[0].syllable.to_thai(), "จัด");
        // muting ุ is still listed, but only as a last resort
        let muted = c.iter().find(|c| c.end == 4).unwrap();
        assert_eq!(muted.rank, Rank::Doubtful);
        let linked = SyllableRules.candidates(&text, 3);
        assert_eq!(linked[0].rank, Rank::Linked);
        assert_eq!(linked[0].syllable.to_thai(), "ตุ");
    }

    #[test]
    fn test_rulu() {
        assert_eq!(first_whole("ฤๅ"), "รือ");
        assert_eq!(first_whole("กฤษ"), "กฺริด");
        let text = chars("ฤดู");
        let c = &SyllableRules.candidates(&text, 0)[0];
        assert_eq!(c.syllable.to_thai(), "รึ");
    }

    #[test]
    fn test_cluster_outranks_simple() {
        let text = chars("ครู");
        let c = &SyllableRules.candidates(&text, 0)[0];
        assert_eq!(c.end, 3);
        assert_eq!(c.rank, Rank::ClusterVowel);
    }

    #[test]
    fn test_no_candidates_at_marks() {
        let text = chars("ก่");
        assert!(SyllableRules.candidates(&text, 1).is_empty());
        let text = chars("ะ");
        assert!(SyllableRules.candidates(&text, 0).is_empty());
    }

    #[test]
    fn test_verbatim_run() {
        let text = chars("ab1ก");
        let c = SyllableRules.candidates(&text, 0);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].end, 3);
        assert!(c[0].syllable.is_verbatim());
    }

    #[test]
    fn test_read_one() {
        let p = SyllableRules.read_one(&chars("หวัด")).unwrap();
        assert_eq!(p.initial.kind, InitialKind::Leading);
        assert_eq!(p.romanize(), "wat");
        assert!(SyllableRules.read_one(&chars("สามารถ")).is_none());
    }
}
