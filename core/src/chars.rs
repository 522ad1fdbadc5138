// thaipron/core/src/chars.rs
//
// Character classes of the Thai block.
//
// Every rule in the syllable engine is phrased in terms of these classes, so
// classification is total: anything outside the Thai letters and marks is
// `Category::Other` and passes through the parser verbatim.

use serde::{Deserialize, Serialize};

/// Orthographic class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Consonant,
    /// เ แ โ ใ ไ, written before the consonant they follow in speech.
    LeadingVowel,
    AboveVowel,
    BelowVowel,
    FollowingVowel,
    Tone,
    /// Cancellation mark ์, silences the letters it sits on.
    Thanthakhat,
    /// ฤ and ฦ, which behave as consonant plus inherent vowel.
    RuLu,
    Other,
}

pub const THANTHAKHAT: char = '\u{0E4C}';
pub const PHINTHU: char = 'ฺ';

/// Classify one character.
pub fn classify(c: char) -> Category {
    match c {
        // ก..ฮ minus ฤ (0E24) and ฦ (0E26)
        '\u{0E01}'..='\u{0E23}' | '\u{0E25}' | '\u{0E27}'..='\u{0E2E}' => Category::Consonant,
        '\u{0E24}' | '\u{0E26}' => Category::RuLu,
        // ะ า ำ ๅ
        '\u{0E30}' | '\u{0E32}' | '\u{0E33}' | '\u{0E45}' => Category::FollowingVowel,
        // ั ิ ี ึ ื ็ ํ
        '\u{0E31}' | '\u{0E34}'..='\u{0E37}' | '\u{0E47}' | '\u{0E4D}' => Category::AboveVowel,
        // ุ ู ฺ
        '\u{0E38}'..='\u{0E3A}' => Category::BelowVowel,
        // เ แ โ ใ ไ
        '\u{0E40}'..='\u{0E44}' => Category::LeadingVowel,
        // ่ ้ ๊ ๋
        '\u{0E48}'..='\u{0E4B}' => Category::Tone,
        '\u{0E4C}' => Category::Thanthakhat,
        _ => Category::Other,
    }
}

impl Category {
    /// Above, below and following vowel signs. Leading vowels are excluded
    /// because they start a syllable rather than continue one.
    pub fn is_vowel_sign(self) -> bool {
        matches!(
            self,
            Category::AboveVowel | Category::BelowVowel | Category::FollowingVowel
        )
    }

    /// True for classes that can only continue a syllable, never open one.
    pub fn is_mark(self) -> bool {
        self.is_vowel_sign() || matches!(self, Category::Tone | Category::Thanthakhat)
    }

    /// True for classes a syllable may begin with.
    pub fn opens_syllable(self) -> bool {
        matches!(
            self,
            Category::Consonant | Category::LeadingVowel | Category::RuLu | Category::Other
        )
    }
}

pub fn is_consonant(c: char) -> bool {
    classify(c) == Category::Consonant
}

/// Consonants that may close a syllable. The remaining letters only ever
/// appear as initials.
pub fn is_final_capable(c: char) -> bool {
    is_consonant(c) && !matches!(c, 'ฉ' | 'ผ' | 'ฝ' | 'ห' | 'อ' | 'ฮ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_range() {
        for c in ['ก', 'ข', 'ง', 'ร', 'ล', 'ว', 'ห', 'ฬ', 'อ', 'ฮ'] {
            assert_eq!(classify(c), Category::Consonant, "{c}");
        }
    }

    #[test]
    fn test_rulu_is_not_consonant() {
        assert_eq!(classify('ฤ'), Category::RuLu);
        assert_eq!(classify('ฦ'), Category::RuLu);
        assert!(!is_consonant('ฤ'));
    }

    #[test]
    fn test_vowel_classes() {
        assert_eq!(classify('เ'), Category::LeadingVowel);
        assert_eq!(classify('ไ'), Category::LeadingVowel);
        assert_eq!(classify('ะ'), Category::FollowingVowel);
        assert_eq!(classify('ำ'), Category::FollowingVowel);
        assert_eq!(classify('ๅ'), Category::FollowingVowel);
        assert_eq!(classify('ั'), Category::AboveVowel);
        assert_eq!(classify('็'), Category::AboveVowel);
        assert_eq!(classify('ุ'), Category::BelowVowel);
        assert_eq!(classify('ฺ'), Category::BelowVowel);
    }

    #[test]
    fn test_marks() {
        assert_eq!(classify('่'), Category::Tone);
        assert_eq!(classify('๋'), Category::Tone);
        assert_eq!(classify('์'), Category::Thanthakhat);
        assert!(Category::Tone.is_mark());
        assert!(!Category::LeadingVowel.is_mark());
    }

    #[test]
    fn test_everything_else_is_other() {
        for c in ['ฯ', 'ๆ', '๑', '฿', 'a', '1', ' ', '@', '中'] {
            assert_eq!(classify(c), Category::Other, "{c:?}");
        }
    }

    #[test]
    fn test_final_capable() {
        assert!(is_final_capable('ก'));
        assert!(is_final_capable('ร'));
        assert!(!is_final_capable('ห'));
        assert!(!is_final_capable('อ'));
        assert!(!is_final_capable('ผ'));
        assert!(!is_final_capable('ฤ'));
    }
}
