use odu_core::language::Transliterator;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const VIRAMA: char = '\u{0CCD}';
const NUKTA: char = '\u{0CBC}';
const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

/// Kannada to ISO 15919 romanization
#[derive(Debug, Clone, Copy, Default)]
pub struct KannadaTransliterator;

impl KannadaTransliterator {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for KannadaTransliterator {
    fn transliterate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        // A consonant was written and its inherent vowel is still owed
        let mut pending_vowel = false;

        for c in text.chars() {
            if let Some(sign) = vowel_sign(c) {
                out.push_str(sign);
                pending_vowel = false;
                continue;
            }

            match c {
                VIRAMA => {
                    pending_vowel = false;
                    continue;
                }
                NUKTA | ZWJ | ZWNJ | '\u{0CD5}' | '\u{0CD6}' => continue,
                _ => {}
            }

            if pending_vowel {
                out.push('a');
                pending_vowel = false;
            }

            if let Some(consonant) = consonant(c) {
                out.push_str(consonant);
                pending_vowel = true;
            } else if let Some(vowel) = independent_vowel(c) {
                out.push_str(vowel);
            } else if let Some(other) = other_sign(c) {
                out.push_str(other);
            } else {
                out.push(c);
            }
        }

        if pending_vowel {
            out.push('a');
        }

        out
    }

    fn pronounce(&self, text: &str) -> String {
        let plain: String = self
            .transliterate(text)
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .nfc()
            .collect();

        plain
            .split(' ')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

fn consonant(c: char) -> Option<&'static str> {
    let latin = match c {
        'ಕ' => "k",
        'ಖ' => "kh",
        'ಗ' => "g",
        'ಘ' => "gh",
        'ಙ' => "ṅ",
        'ಚ' => "c",
        'ಛ' => "ch",
        'ಜ' => "j",
        'ಝ' => "jh",
        'ಞ' => "ñ",
        'ಟ' => "ṭ",
        'ಠ' => "ṭh",
        'ಡ' => "ḍ",
        'ಢ' => "ḍh",
        'ಣ' => "ṇ",
        'ತ' => "t",
        'ಥ' => "th",
        'ದ' => "d",
        'ಧ' => "dh",
        'ನ' => "n",
        'ಪ' => "p",
        'ಫ' => "ph",
        'ಬ' => "b",
        'ಭ' => "bh",
        'ಮ' => "m",
        'ಯ' => "y",
        'ರ' => "r",
        'ಱ' => "ṟ",
        'ಲ' => "l",
        'ವ' => "v",
        'ಶ' => "ś",
        'ಷ' => "ṣ",
        'ಸ' => "s",
        'ಹ' => "h",
        'ಳ' => "ḷ",
        'ೞ' => "ḻ",
        _ => return None,
    };
    Some(latin)
}

fn independent_vowel(c: char) -> Option<&'static str> {
    let latin = match c {
        'ಅ' => "a",
        'ಆ' => "ā",
        'ಇ' => "i",
        'ಈ' => "ī",
        'ಉ' => "u",
        'ಊ' => "ū",
        'ಋ' => "r̥",
        'ೠ' => "r̥̄",
        'ಌ' => "l̥",
        'ೡ' => "l̥̄",
        'ಎ' => "e",
        'ಏ' => "ē",
        'ಐ' => "ai",
        'ಒ' => "o",
        'ಓ' => "ō",
        'ಔ' => "au",
        _ => return None,
    };
    Some(latin)
}

fn vowel_sign(c: char) -> Option<&'static str> {
    let latin = match c {
        '\u{0CBE}' => "ā",
        '\u{0CBF}' => "i",
        '\u{0CC0}' => "ī",
        '\u{0CC1}' => "u",
        '\u{0CC2}' => "ū",
        '\u{0CC3}' => "r̥",
        '\u{0CC4}' => "r̥̄",
        '\u{0CC6}' => "e",
        '\u{0CC7}' => "ē",
        '\u{0CC8}' => "ai",
        '\u{0CCA}' => "o",
        '\u{0CCB}' => "ō",
        '\u{0CCC}' => "au",
        '\u{0CE2}' => "l̥",
        '\u{0CE3}' => "l̥̄",
        _ => return None,
    };
    Some(latin)
}

fn other_sign(c: char) -> Option<&'static str> {
    let latin = match c {
        '\u{0C82}' => "ṁ",
        '\u{0C83}' => "ḥ",
        '\u{0CBD}' => "'",
        '೦' => "0",
        '೧' => "1",
        '೨' => "2",
        '೩' => "3",
        '೪' => "4",
        '೫' => "5",
        '೬' => "6",
        '೭' => "7",
        '೮' => "8",
        '೯' => "9",
        _ => return None,
    };
    Some(latin)
}
