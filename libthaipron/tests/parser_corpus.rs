// Corpus vectors for the syllable parser.
//
// Purpose:
// - Every word in these lists must parse with and without word break, and
//   its primary reading must spell the word back with contiguous syllables.
// - Grouped by the orthographic feature each list exercises.
// - Primary readings are pinned for the words whose preferred reading is
//   easy to get wrong.
//
// File: thaipron/libthaipron/tests/parser_corpus.rs

use libthaipron::{Parser, PronunciationGraph};

/// Single consonant onsets with every plain vowel and final.
const SIMPLE: &[&str] = &[
    "กง", "กัง", "หงส์", "ข้น", "กวง", "ก่อ", "ก้อน", "ช็อป", "ฟอร์ม", "พร", "ภรณ์", "สรร", "ธรรม",
    "สวรรค์", "ค่ะ", "ค่ะส์", "วัน", "จันทร์", "ทันต์", "มั่ว", "ชัวร์", "ผัวะ", "จั๊วะ", "ข้า",
    "พาร์", "ข้าง", "ฟาร์ม", "ศาสตร์", "ขำ", "ค่ำ", "ขำส์", "สิ", "ซิ่น", "ฟิล์ม", "ที่", "พีร์",
    "อึ", "ขึ้น", "ซื่อ", "ขืน", "ผื่น", "ดุ", "คุก", "ดู", "ปู้ด",
];

const CLUSTERS: &[&str] = &[
    "กรง", "กรงส์", "คลาด", "ตราด", "ปลอบ", "ขวาน", "ควาย", "ขวิด", "สราญ", "สรวง", "จริง", "สมัน",
    "สมร",
];

/// A final that also opens the next syllable.
const LINKED: &[&str] = &["อัตรา", "มาตรา", "จักรี", "จัตุรัส"];

const COMPLICATED: &[&str] = &["อุปสรรค", "อัปสร", "วิศวกร"];

/// Unwritten -ɔɔ and -a vowels.
const IMPLICIT_O: &[&str] = &[
    "กรกฎ", "ครหา", "จระเข้", "จรลี", "ทรชน", "ทรมาน", "ธรณี", "นรชาติ", "นรสีห์", "บดี", "บดินทร์",
    "อธิบดี", "นฤบดินทร์", "บรบือ", "บริบูรณ์", "บริเวณ", "บริษัท", "ปรโลก", "ภรณี", "มรณะ", "มรดก",
    "สรพงษ์", "สรยุทธ์", "สรศักดิ์", "หรคุณ", "หรดี", "อรสา", "อรดี",
];

const CROSSING: &[&str] = &["อุดรรัถยา", "อุดรรโหฐาน"];

const SARA_E: &[&str] = &[
    "เก", "เท่", "เพล", "เก่ง", "เล่ห์", "เสน่ห์", "เถลไถล", "เตะ", "เป๊ะ", "เละส์", "เผละ",
    "เสเพล", "เหล่", "เกว๋", "เชวง", "เป็น",
];

const SARA_OE: &[&str] = &[
    "เธอ", "เสนอ", "เปอร์เซ็นต์", "เลอะ", "เปรอะ", "เกิด", "เกิร์ต", "เปิ่น", "เพลิน", "เคลิ้ม",
    "เสริม", "เลย", "เม้ย", "เมย์", "เหมย", "เชลย", "เบรยล์",
];

const SARA_IA: &[&str] = &[
    "เซียะ", "เปี๊ยะ", "เปรี๊ยะ", "เกี๊ยะส์", "เสีย", "เชียร์", "เพลีย", "เสียด", "เพี้ยน",
    "เสนียด", "เฟียร์ตส์",
];

const SARA_UEA: &[&str] = &[
    "ละเวือะ", "เกื๊อะ", "เคือะส์", "เกือบ", "เลื่อน", "เกลือ", "เกลือก", "เสมือน", "เถลือกถลน",
    "เหมือน", "เวือร์ต",
];

const SARA_AW: &[&str] = &["เกา", "เกลา", "เสลา", "เหมา", "เสาร์"];

const SARA_AU: &[&str] = &["เกาะ", "เพลาะ", "เสนาะ", "เหมาะ", "เคราะห์"];

const SARA_AE: &[&str] = &[
    "แก", "แก่", "แชร์", "แฟร์มาต์", "แกล", "แก้ม", "แพทย์", "แสม", "แตะ", "แป๊ะ", "แกละ", "แสยะ",
    "แหล่", "แกว่ง", "แพลง", "แสลง", "แข็ง",
];

const SARA_O: &[&str] = &[
    "โต", "โอ่", "โฟร์", "โละ", "โป๊ะ", "โพละ", "โกน", "โล้น", "โสน", "โกลน", "โขดง",
];

const SARA_AI: &[&str] = &["ใจ", "ใช้", "ใคร", "ใคร่", "ไก", "ไล่", "ไพล่", "ไฉน", "ไดร์"];

const RULU: &[&str] = &[
    "อังกฤษ", "ตฤณ", "ทฤษฎี", "ปฤจฉา", "สฤษดิ์", "ศฤงคาร", "คฤนถ์", "คฤหัสถ์", "คฤโฆษ", "นฤพาน",
    "นฤมิต", "พฤกษ์", "พฤฒาจารย์", "พฤหัส", "มฤค", "หฤทัย", "หฤหรรษ์", "หฤโหด", "ฤดี", "ฤดู",
    "ฤทัย", "ฤชา", "ฤคเวท", "ฤกษณะ", "ฤต", "ฤทธิ์", "ฤณ", "ฤษยา", "ฤๅษี", "ฦๅสาย",
];

/// Written letters after a final that are not pronounced.
const MUTE: &[&str] = &[
    "จักร", "สมัคร", "เพชร", "วัตร", "เมตร", "มาตร", "บพิตร", "มิตร", "จิตร", "ปริตร", "มูตร",
    "โคตร", "โพธิ", "โพธิ์", "โพธิสาร", "สมุทร", "กอปร", "สมบัติ", "ชาติ", "ชาติพันธุ์", "ประวัติ",
    "ประวัติศาสตร์", "ธาตุ", "เกตุ", "เหตุ", "เมรุ", "พยาธิ", "ขัดสมาธิ",
];

const EXCEPTIONS: &[&str] = &["สามารถปรารถนาได้", "ได้ปรารถนาเป็นสามารถ", "สวัสดิการ", "สวัสดิ์"];

const LONG: &[&str] = &["กุมบังเหียนชีวิตประชาชน", "กองบัญชาการทหารสูงสุด"];

/// Punctuation, digits and Latin text mixed with Thai.
const NON_WORDS: &[&str] = &["กรุงเทพฯ", "กรุงเทพฯ 10800 ประเทศไทย", "งูๆ ปลาๆ", "@ปื๊ด", "a"];

fn assert_covers(word: &str, graph: &PronunciationGraph) {
    let path = graph.primary_path();
    let mut pos = 0;
    for s in &path {
        assert_eq!(s.start(), pos, "gap or overlap in '{}'", word);
        assert!(s.end() > s.start());
        pos = s.end();
    }
    assert_eq!(pos, word.chars().count(), "primary path of '{}' stops early", word);
    let spelled: String = path.iter().map(|s| s.spelling.as_str()).collect();
    assert_eq!(spelled, word);
}

fn parse_all(words: &[&str]) {
    for word_break in [true, false] {
        let parser = Parser::new(word_break);
        for w in words {
            let graph = parser
                .parse(w)
                .unwrap_or_else(|e| panic!("'{}' failed (word_break={}): {}", w, word_break, e));
            assert_covers(w, &graph);
        }
    }
}

fn reading(parser: &Parser, word: &str) -> String {
    let g = parser.parse(word).unwrap();
    let parts: Vec<String> = g.primary_path().iter().map(|s| s.to_thai()).collect();
    parts.join("-")
}

/// Expect the same primary reading with and without word break.
fn assert_reads(word: &str, expected: &str) {
    for word_break in [true, false] {
        let got = reading(&Parser::new(word_break), word);
        assert_eq!(got, expected, "'{}' word_break={}", word, word_break);
    }
}

#[test]
fn corpus_simple() {
    parse_all(SIMPLE);
}

#[test]
fn corpus_clusters() {
    parse_all(CLUSTERS);
}

#[test]
fn corpus_linked() {
    parse_all(LINKED);
}

#[test]
fn corpus_complicated() {
    parse_all(COMPLICATED);
}

#[test]
fn corpus_implicit_o() {
    parse_all(IMPLICIT_O);
}

#[test]
fn corpus_crossing() {
    parse_all(CROSSING);
}

#[test]
fn corpus_sara_e() {
    parse_all(SARA_E);
}

#[test]
fn corpus_sara_oe() {
    parse_all(SARA_OE);
}

#[test]
fn corpus_sara_ia() {
    parse_all(SARA_IA);
}

#[test]
fn corpus_sara_uea() {
    parse_all(SARA_UEA);
}

#[test]
fn corpus_sara_aw() {
    parse_all(SARA_AW);
}

#[test]
fn corpus_sara_au() {
    parse_all(SARA_AU);
}

#[test]
fn corpus_sara_ae() {
    parse_all(SARA_AE);
}

#[test]
fn corpus_sara_o() {
    parse_all(SARA_O);
}

#[test]
fn corpus_sara_ai() {
    parse_all(SARA_AI);
}

#[test]
fn corpus_rulu() {
    parse_all(RULU);
}

#[test]
fn corpus_mute() {
    parse_all(MUTE);
}

#[test]
fn corpus_exceptions() {
    parse_all(EXCEPTIONS);
}

#[test]
fn corpus_long() {
    parse_all(LONG);
}

#[test]
fn corpus_non_words() {
    parse_all(NON_WORDS);
}

#[test]
fn primary_readings() {
    assert_reads("มะละกอ", "มะ-ละ-กอ");
    assert_reads("ชาติ", "ชาด");
    assert_reads("ศาสตร์", "ศาด");
    assert_reads("ธรรม", "ธัม");
}

#[test]
fn linked_primary_readings() {
    assert_reads("อัตรา", "อัด-ตฺรา");
    assert_reads("มาตรา", "มาด-ตฺรา");
    assert_reads("จักรี", "จัก-กฺรี");
    assert_reads("จัตุรัส", "จัด-ตุ-รัด");
}

#[test]
fn linked_vowel_keeps_both_readings() {
    for word_break in [true, false] {
        let g = Parser::new(word_break).parse("จัตุรัส").unwrap();
        assert!(g.path_count() >= 2);
        assert!(!g.edges_from(3).is_empty());
    }
}

#[test]
fn mute_primary_readings() {
    assert_reads("ชาติ", "ชาด");
    assert_reads("ธาตุ", "ธาด");
    assert_reads("มาตร", "มาด");
    assert_reads("จักร", "จัก");
    assert_reads("เพชร", "เพด");
    assert_reads("สมุทร", "สะ-มุด");
}

#[test]
fn mute_finals_are_muted() {
    for word_break in [true, false] {
        let parser = Parser::new(word_break);
        let muted_at = |w: &str, i: usize| -> bool {
            let g = parser.parse(w).unwrap();
            g.primary_path()[i].phonemes().unwrap().coda.is_muted()
        };
        for w in ["ชาติ", "ธาตุ", "มาตร", "จักร", "เพชร"] {
            assert!(muted_at(w, 0), "'{}' word_break={}", w, word_break);
        }
        assert!(muted_at("สมุทร", 1));
    }
}

#[test]
fn ordinary_finals_are_not_muted() {
    let parser = Parser::new(false);
    for w in ["จักรี", "มาตรา", "อัตรา"] {
        let g = parser.parse(w).unwrap();
        let first = g.primary_path()[0];
        assert!(!first.phonemes().unwrap().coda.is_muted(), "'{}' muted", w);
        assert_eq!(first.len(), 3, "'{}'", w);
    }
}

#[test]
fn final_is_read_before_cancelled_group() {
    assert_reads("ทันต์", "ทัน");
    assert_reads("แพทย์", "แพด");
    assert_reads("ฤทธิ์", "ริด");
    assert_reads("บริบูรณ์", "บอ-ริ-บูน");
    assert_reads("สรพงษ์", "สอ-ระ-พง");
    assert_reads("สวัสดิ์", "สะ-วัด");
}

#[test]
fn mute_vowel_links_into_next_syllable() {
    assert_eq!(reading(&Parser::new(false), "ชาติพันธุ์"), "ชาด-ติ-พัน");
}
