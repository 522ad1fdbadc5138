// thaipron/core/src/syllable.rs
//
// Phonetic model of a single Thai syllable.
//
// A `Syllable` is one edge of the pronunciation graph: a span of the input,
// the spelling found there and how it reads. Readings carry the phonemes
// recognised by the rule engine (or taken from the exception dictionary);
// romanization and phonetic respelling are derived from those phonemes.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use crate::chars::PHINTHU;

/// How the onset of a syllable is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitialKind {
    Simple,
    /// Two sounded consonants: กร กล กว ...
    Cluster,
    /// Two written consonants with one sound: จร ซร ศร สร ทร.
    FalseCluster,
    /// Silent ห or อ carrying the tone class of the letter after it.
    Leading,
    /// The onset reuses the final consonant of the previous syllable.
    Linked,
    /// ฤ / ฦ read as ร / ล.
    RuLu,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Initial {
    pub kind: InitialKind,
    /// Onset letters as they appear in the spelling. For a linked onset this
    /// is the borrowed letter plus any cluster partner.
    pub letters: String,
    /// The letter whose sound opens the syllable.
    pub sound: char,
    /// Second consonant of a true cluster.
    pub cluster: Option<char>,
}

impl Initial {
    pub fn simple(c: char) -> Self {
        Initial {
            kind: InitialKind::Simple,
            letters: c.to_string(),
            sound: c,
            cluster: None,
        }
    }

    pub fn cluster(first: char, second: char) -> Self {
        Initial {
            kind: InitialKind::Cluster,
            letters: [first, second].iter().collect(),
            sound: first,
            cluster: Some(second),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vowel {
    A,
    Aa,
    I,
    Ii,
    Ue,
    Uee,
    U,
    Uu,
    E,
    Ee,
    Ae,
    Aee,
    O,
    Oo,
    /// Short open-o, as in เกาะ.
    Or,
    /// Long open-o, as in กอ.
    Orr,
    Oe,
    Oee,
    Ia,
    Iia,
    Uea,
    Ueea,
    Ua,
    Uua,
}

impl Vowel {
    pub fn is_long(self) -> bool {
        use Vowel::*;
        matches!(
            self,
            Aa | Ii | Uee | Uu | Ee | Aee | Oo | Orr | Oee | Iia | Ueea | Uua
        )
    }

    /// Romanized quality. Length is not marked.
    pub fn roman(self) -> &'static str {
        use Vowel::*;
        match self {
            A | Aa => "a",
            I | Ii => "i",
            Ue | Uee => "ue",
            U | Uu => "u",
            E | Ee => "e",
            Ae | Aee => "ae",
            O | Oo | Or | Orr => "o",
            Oe | Oee => "oe",
            Ia | Iia => "ia",
            Uea | Ueea => "uea",
            Ua | Uua => "ua",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    None,
    Ek,
    Tho,
    Tri,
    Chattawa,
}

impl Tone {
    pub fn from_mark(c: char) -> Option<Tone> {
        match c {
            '่' => Some(Tone::Ek),
            '้' => Some(Tone::Tho),
            '๊' => Some(Tone::Tri),
            '๋' => Some(Tone::Chattawa),
            _ => None,
        }
    }

    pub fn mark(self) -> Option<char> {
        match self {
            Tone::None => None,
            Tone::Ek => Some('่'),
            Tone::Tho => Some('้'),
            Tone::Tri => Some('๊'),
            Tone::Chattawa => Some('๋'),
        }
    }
}

/// Sound of a syllable coda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FinalSound {
    #[default]
    None,
    K,
    T,
    P,
    N,
    M,
    Ng,
    Y,
    W,
}

impl FinalSound {
    /// Sound a consonant makes in coda position. `None` for letters that
    /// cannot close a syllable.
    pub fn of_letter(c: char) -> Option<FinalSound> {
        let s = match c {
            'ก' | 'ข' | 'ฃ' | 'ค' | 'ฅ' | 'ฆ' => FinalSound::K,
            'ง' => FinalSound::Ng,
            'จ' | 'ช' | 'ซ' | 'ฌ' | 'ฎ' | 'ฏ' | 'ฐ' | 'ฑ' | 'ฒ' | 'ด' | 'ต' | 'ถ' | 'ท' | 'ธ'
            | 'ศ' | 'ษ' | 'ส' => FinalSound::T,
            'ญ' | 'ณ' | 'น' | 'ร' | 'ล' | 'ฬ' => FinalSound::N,
            'บ' | 'ป' | 'พ' | 'ฟ' | 'ภ' => FinalSound::P,
            'ม' => FinalSound::M,
            'ย' => FinalSound::Y,
            'ว' => FinalSound::W,
            _ => return None,
        };
        Some(s)
    }

    /// Canonical letter for phonetic respelling.
    pub fn letter(self) -> Option<char> {
        match self {
            FinalSound::None => None,
            FinalSound::K => Some('ก'),
            FinalSound::T => Some('ด'),
            FinalSound::P => Some('บ'),
            FinalSound::N => Some('น'),
            FinalSound::M => Some('ม'),
            FinalSound::Ng => Some('ง'),
            FinalSound::Y => Some('ย'),
            FinalSound::W => Some('ว'),
        }
    }

    pub fn roman(self) -> &'static str {
        match self {
            FinalSound::None => "",
            FinalSound::K => "k",
            FinalSound::T => "t",
            FinalSound::P => "p",
            FinalSound::N => "n",
            FinalSound::M => "m",
            FinalSound::Ng => "ng",
            FinalSound::Y => "i",
            FinalSound::W => "o",
        }
    }
}

/// Coda of a syllable: its sound, the letters spelling it and any letters
/// written after it that are not pronounced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Final {
    pub sound: FinalSound,
    pub written: String,
    pub silent: String,
}

impl Final {
    pub fn open() -> Self {
        Final::default()
    }

    pub fn new(sound: FinalSound, written: impl Into<String>) -> Self {
        Final {
            sound,
            written: written.into(),
            silent: String::new(),
        }
    }

    pub fn with_silent(mut self, silent: impl Into<String>) -> Self {
        self.silent = silent.into();
        self
    }

    /// True when written letters after the coda are not pronounced.
    pub fn is_muted(&self) -> bool {
        !self.silent.is_empty()
    }
}

/// Complete phonetic reading of one syllable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phonemes {
    pub initial: Initial,
    pub vowel: Vowel,
    /// The vowel is not written and was supplied by the reader.
    pub implicit: bool,
    pub tone: Tone,
    #[serde(rename = "final")]
    pub coda: Final,
}

static INITIAL_ROMAN: phf::Map<char, &'static str> = phf_map! {
    'ก' => "k",
    'ข' => "kh", 'ฃ' => "kh", 'ค' => "kh", 'ฅ' => "kh", 'ฆ' => "kh",
    'ง' => "ng",
    'จ' => "ch", 'ฉ' => "ch", 'ช' => "ch", 'ฌ' => "ch",
    'ซ' => "s", 'ศ' => "s", 'ษ' => "s", 'ส' => "s",
    'ญ' => "y", 'ย' => "y",
    'ฎ' => "d", 'ด' => "d",
    'ฏ' => "t", 'ต' => "t",
    'ฐ' => "th", 'ฑ' => "th", 'ฒ' => "th", 'ถ' => "th", 'ท' => "th", 'ธ' => "th",
    'ณ' => "n", 'น' => "n",
    'บ' => "b",
    'ป' => "p",
    'ผ' => "ph", 'พ' => "ph", 'ภ' => "ph",
    'ฝ' => "f", 'ฟ' => "f",
    'ม' => "m",
    'ร' => "r",
    'ล' => "l", 'ฬ' => "l",
    'ว' => "w",
    'ห' => "h", 'ฮ' => "h",
    'อ' => "",
};

/// Romanized onset letter. Unknown letters romanize to nothing.
pub fn roman_initial(c: char) -> &'static str {
    INITIAL_ROMAN.get(&c).copied().unwrap_or("")
}

impl Phonemes {
    /// RTGS-style romanization.
    pub fn romanize(&self) -> String {
        let mut out = String::from(roman_initial(self.initial.sound));
        if let Some(c) = self.initial.cluster {
            out.push_str(roman_initial(c));
        }
        out.push_str(self.vowel.roman());
        out.push_str(self.coda.sound.roman());
        out
    }

    /// Phonetic respelling in Thai script, one syllable, with clusters
    /// marked by phinthu and the coda written with its canonical letter.
    pub fn to_thai(&self) -> String {
        use Vowel::*;

        let init = self.initial_letters();
        let tone: String = self.tone.mark().into_iter().collect();
        let fin = self.coda.sound.letter();
        let f: String = fin.into_iter().collect();
        let has_final = fin.is_some();

        // Vowel spellings that carry their own coda (ำ ไ เา) leave the
        // written final empty.
        let vowel_coda = self.coda.written.is_empty();
        match (self.vowel, self.coda.sound) {
            (A, FinalSound::M) if vowel_coda => return format!("{init}{tone}ำ"),
            (A, FinalSound::Y) if vowel_coda => return format!("ไ{init}{tone}"),
            (A, FinalSound::W) if vowel_coda => return format!("เ{init}{tone}า"),
            (Oee, FinalSound::Y) => return format!("เ{init}{tone}ย"),
            _ => {}
        }

        match self.vowel {
            A if has_final => format!("{init}ั{tone}{f}"),
            A => format!("{init}{tone}ะ"),
            Aa => format!("{init}{tone}า{f}"),
            I => format!("{init}ิ{tone}{f}"),
            Ii => format!("{init}ี{tone}{f}"),
            Ue => format!("{init}ึ{tone}{f}"),
            Uee if has_final => format!("{init}ื{tone}{f}"),
            Uee => format!("{init}ื{tone}อ"),
            U => format!("{init}ุ{tone}{f}"),
            Uu => format!("{init}ู{tone}{f}"),
            E if has_final && tone.is_empty() => format!("เ{init}็{f}"),
            E if has_final => format!("เ{init}{tone}{f}"),
            E => format!("เ{init}{tone}ะ"),
            Ee => format!("เ{init}{tone}{f}"),
            Ae if has_final && tone.is_empty() => format!("แ{init}็{f}"),
            Ae if has_final => format!("แ{init}{tone}{f}"),
            Ae => format!("แ{init}{tone}ะ"),
            Aee => format!("แ{init}{tone}{f}"),
            O if has_final => format!("{init}{tone}{f}"),
            O => format!("โ{init}{tone}ะ"),
            Oo => format!("โ{init}{tone}{f}"),
            Or if has_final && tone.is_empty() => format!("{init}็อ{f}"),
            Or if has_final => format!("{init}{tone}อ{f}"),
            Or => format!("เ{init}{tone}าะ"),
            Orr => format!("{init}{tone}อ{f}"),
            Oe if has_final => format!("เ{init}ิ{tone}{f}"),
            Oe => format!("เ{init}{tone}อะ"),
            Oee if has_final => format!("เ{init}ิ{tone}{f}"),
            Oee => format!("เ{init}{tone}อ"),
            Ia if has_final => format!("เ{init}ี{tone}ย{f}"),
            Ia => format!("เ{init}ี{tone}ยะ"),
            Iia => format!("เ{init}ี{tone}ย{f}"),
            Uea if has_final => format!("เ{init}ื{tone}อ{f}"),
            Uea => format!("เ{init}ื{tone}อะ"),
            Ueea => format!("เ{init}ื{tone}อ{f}"),
            Ua if has_final => format!("{init}{tone}ว{f}"),
            Ua => format!("{init}ั{tone}วะ"),
            Uua if has_final => format!("{init}{tone}ว{f}"),
            Uua => format!("{init}ั{tone}ว"),
        }
    }

    fn initial_letters(&self) -> String {
        match self.initial.kind {
            InitialKind::Leading => self.initial.letters.clone(),
            _ => match self.initial.cluster {
                Some(second) => [self.initial.sound, PHINTHU, second].iter().collect(),
                None => self.initial.sound.to_string(),
            },
        }
    }
}

/// How a syllable reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reading {
    Thai(Phonemes),
    /// Non-Thai run copied through unchanged.
    Verbatim,
}

/// One edge of a pronunciation graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    /// Character range of the input this syllable spells.
    pub span: Range<usize>,
    pub spelling: String,
    pub reading: Reading,
    pub romanization: String,
}

impl Syllable {
    pub fn thai(span: Range<usize>, spelling: impl Into<String>, phonemes: Phonemes) -> Self {
        let romanization = phonemes.romanize();
        Syllable {
            span,
            spelling: spelling.into(),
            reading: Reading::Thai(phonemes),
            romanization,
        }
    }

    pub fn verbatim(span: Range<usize>, spelling: impl Into<String>) -> Self {
        let spelling = spelling.into();
        Syllable {
            span,
            romanization: spelling.clone(),
            spelling,
            reading: Reading::Verbatim,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Number of input characters covered.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn phonemes(&self) -> Option<&Phonemes> {
        match &self.reading {
            Reading::Thai(p) => Some(p),
            Reading::Verbatim => None,
        }
    }

    pub fn is_verbatim(&self) -> bool {
        matches!(self.reading, Reading::Verbatim)
    }

    /// Same syllable moved `offset` characters to the right.
    pub fn shifted(mut self, offset: usize) -> Self {
        self.span = self.span.start + offset..self.span.end + offset;
        self
    }

    /// Phonetic respelling in Thai script; verbatim runs are returned as-is.
    pub fn to_thai(&self) -> String {
        match &self.reading {
            Reading::Thai(p) => p.to_thai(),
            Reading::Verbatim => self.spelling.clone(),
        }
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_thai())
    }
}
