// Character classification and Unicode utilities for Akkadian transliteration
//
// All morpheme text is held in NFC. Length marks are added by appending the
// combining mark and recomposing, so that `a` + U+0304 and `ā` compare equal
// regardless of how the input was composed.

use unicode_normalization::UnicodeNormalization;

// ---------------------------------------------------------------------------
// Transliteration alphabet
// ---------------------------------------------------------------------------

/// COMBINING MACRON (vowel length).
pub const MACRON: char = '\u{0304}';

/// COMBINING CIRCUMFLEX ACCENT (contracted vowel length).
pub const CIRCUMFLEX: char = '\u{0302}';

/// Consonants that are never lost: b d g ḫ y k l m n p q r s ṣ š t ṭ w z.
///
/// `w` and `y` appear here and in [`WEAK_CONSONANTS`]; which behaviour wins
/// depends on the rule doing the classification.
pub const STRONG_CONSONANTS: &[char] = &[
    'b', 'd', 'g', '\u{1E2B}', 'y', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', '\u{1E63}',
    '\u{0161}', 't', '\u{1E6D}', 'w', 'z',
];

/// Consonants subject to loss: ʾ h ḥ ʿ w y.
pub const WEAK_CONSONANTS: &[char] = &['\u{02BE}', 'h', '\u{1E25}', '\u{02BF}', 'w', 'y'];

/// Vowels, short then long (macron) then contracted (circumflex).
pub const VOWELS: &[char] = &[
    'a', 'e', 'u', 'i', '\u{0101}', '\u{0113}', '\u{016B}', '\u{012B}', '\u{00E2}', '\u{00EA}',
    '\u{00FB}', '\u{00EE}',
];

/// Short vowels: a e u i.
pub const SHORT_VOWELS: &[char] = &['a', 'e', 'u', 'i'];

/// Aleph (ʾ, U+02BE MODIFIER LETTER RIGHT HALF RING).
pub const ALEPH: char = '\u{02BE}';

/// Ayin (ʿ, U+02BF MODIFIER LETTER LEFT HALF RING).
pub const AYIN: char = '\u{02BF}';

/// ḥ (U+1E25).
pub const H_DOT: char = '\u{1E25}';

/// š (U+0161).
pub const SHIN: char = '\u{0161}';

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

pub fn is_strong_consonant(c: char) -> bool {
    STRONG_CONSONANTS.contains(&c)
}

pub fn is_weak_consonant(c: char) -> bool {
    WEAK_CONSONANTS.contains(&c)
}

/// Check whether a character is a consonant of the transliteration alphabet.
pub fn is_consonant(c: char) -> bool {
    is_strong_consonant(c) || is_weak_consonant(c)
}

/// Check whether a (composed) character is a vowel of any length.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_short_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(&c)
}

/// Check whether `s` is exactly one short vowel.
pub fn is_single_short_vowel(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_short_vowel(c))
}

/// Check whether `s` is exactly one consonant.
pub fn is_single_consonant(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_consonant(c))
}

/// Check whether `s` is a geminated consonant written as exactly two equal letters.
pub fn is_geminate(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), None) if a == b && is_consonant(a)
    )
}

/// First character of `s` satisfies `pred`.
pub fn starts_with(s: &str, pred: impl Fn(char) -> bool) -> bool {
    s.chars().next().is_some_and(pred)
}

/// Last character of `s` satisfies `pred`.
pub fn ends_with(s: &str, pred: impl Fn(char) -> bool) -> bool {
    s.chars().next_back().is_some_and(pred)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

pub fn nfc(s: &str) -> String {
    s.nfc().collect()
}

pub fn nfd(s: &str) -> String {
    s.nfd().collect()
}

/// Append a macron to the last vowel of `s` (`a` → `ā`).
pub fn lengthen(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push_str(s);
    out.push(MACRON);
    nfc(&out)
}

/// The circumflexed (contracted) form of a bare vowel (`u` → `û`).
pub fn circumflex(vowel: char) -> String {
    [vowel, CIRCUMFLEX].iter().collect::<String>().nfc().collect()
}

/// The vowel quality of a character, with length marks removed (`ā` → `a`).
pub fn base_letter(c: char) -> char {
    let mut buf = [0u8; 4];
    c.encode_utf8(&mut buf).nfd().next().unwrap_or(c)
}

/// Drop vowel length (macron and circumflex), keeping every other mark.
///
/// Transliterations frequently leave long vowels unmarked, so the index keys
/// its fuzzy lookups on this form.
pub fn fold_vowel_length(s: &str) -> String {
    s.nfd()
        .filter(|&c| c != MACRON && c != CIRCUMFLEX)
        .nfc()
        .collect()
}

/// Collapse doubled consonants (`iparras` → `iparas`).
///
/// Applied one consonant at a time, left to right over non-overlapping pairs,
/// so a tripled consonant keeps two letters.
pub fn fold_gemination(s: &str) -> String {
    let mut folded = s.to_string();
    for &c in STRONG_CONSONANTS.iter().chain(WEAK_CONSONANTS) {
        let pair: String = [c, c].iter().collect();
        if folded.contains(&pair) {
            folded = folded.replace(&pair, &c.to_string());
        }
    }
    folded
}

/// Rewrite a written `n` before a consonant as assimilated (`inddin` → `iddin`),
/// so that spellings which preserve an etymological `n` match generated forms.
pub fn normalize_n_assimilation(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == 'n' && i + 1 < chars.len() && is_consonant(chars[i + 1]) {
            out.push(chars[i + 1]);
            out.push(chars[i + 1]);
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Replace every `a` (of any length) with `e` of the same length.
pub fn colour_a_to_e(s: &str) -> String {
    s.nfd().map(|c| if c == 'a' { 'e' } else { c }).nfc().collect()
}
