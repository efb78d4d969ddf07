// Vowel colouring, contraction, lengthening and syncope

use std::sync::LazyLock;

use regex::Regex;

use kamil_core::character::{
    AYIN, H_DOT, SHORT_VOWELS, STRONG_CONSONANTS, WEAK_CONSONANTS, base_letter, circumflex,
    colour_a_to_e, ends_with, is_short_vowel, is_vowel, lengthen,
};
use kamil_core::{Feature, Gender, Label, Morpheme, Number, Person, Radical};

use super::Sequence;
use crate::Result;

// ---------------------------------------------------------------------------
// e-colouring
// ---------------------------------------------------------------------------

/// Affixes whose `a` is not coloured.
fn keeps_a(m: &Morpheme) -> bool {
    let plural_suffix = m.text == "\u{0101}"
        && (m.functions
            == [
                Feature::Person(Person::Third),
                Feature::Gender(Gender::F),
                Feature::Number(Number::Pl),
            ]
            || m.functions == [Feature::Person(Person::Second), Feature::Number(Number::Pl)]);
    plural_suffix
        || m.functions == [Feature::Label(Label::Conj)]
        || m.functions == [Feature::Label(Label::Vent)]
        || m.is_object()
}

/// `a` → `e` throughout the form when it contains ʿ or ḥ, or a first
/// radical `y` (the glide of I-w roots).
pub fn colour(mut sequence: Sequence) -> Result<Sequence> {
    let triggered = sequence.morphemes.iter().any(|m| {
        m.text.contains(AYIN)
            || m.text.contains(H_DOT)
            || (m.text == "y" && m.has(&Feature::Radical(Radical::First)))
    });
    if triggered {
        for m in sequence.morphemes.iter_mut().filter(|m| !keeps_a(m)) {
            m.text = colour_a_to_e(&m.text);
        }
    }
    Ok(sequence)
}

// ---------------------------------------------------------------------------
// Contraction
// ---------------------------------------------------------------------------

/// The result of two adjacent vowels meeting.
///
/// `e`/`i` before `a` stay uncontracted; `ā`/`ē` before `i` give `ê`;
/// anything else gives the circumflexed second vowel.
pub fn contract_vowels(first: char, second: char) -> String {
    let (a, b) = (base_letter(first), base_letter(second));
    if matches!(a, 'e' | 'i') && b == 'a' {
        [first, second].iter().collect()
    } else if matches!(first, '\u{0101}' | '\u{0113}') && b == 'i' {
        "\u{00EA}".to_string()
    } else {
        circumflex(b)
    }
}

/// Merge a vowel-final morpheme with the next overt vowel-initial one.
///
/// The merged morpheme takes over the features of everything it swallowed,
/// silent morphemes in between included.
pub fn contract(mut sequence: Sequence) -> Result<Sequence> {
    let mut i = 0;
    while i < sequence.morphemes.len() {
        let (k, next) = sequence.next_overt(i);
        let current = &sequence.morphemes[i].text;
        let last = current.chars().next_back().filter(|&c| is_vowel(c));
        let first = next.chars().next().filter(|&c| is_vowel(c));
        if let (Some(v1), Some(v2)) = (last, first) {
            let contraction = contract_vowels(v1, v2);
            if contraction.chars().ne([v1, v2]) {
                let mut text: String = current.chars().take(current.chars().count() - 1).collect();
                text.push_str(&contraction);
                text.extend(next.chars().skip(1));
                let absorbed: Vec<Feature> = sequence.morphemes[i + 1..=k]
                    .iter()
                    .flat_map(|m| m.functions.iter().cloned())
                    .collect();
                let merged = &mut sequence.morphemes[i];
                merged.text = text;
                merged.absorb_functions(&absorbed);
                sequence.morphemes.drain(i + 1..=k);
            }
        }
        i += 1;
    }
    Ok(sequence)
}

// ---------------------------------------------------------------------------
// Lengthening
// ---------------------------------------------------------------------------

/// A short vowel is lengthened before `-ma` and before object suffixes.
pub fn lengthen_before_enclitics(mut sequence: Sequence) -> Result<Sequence> {
    for i in 0..sequence.morphemes.len() {
        let m = &sequence.morphemes[i];
        if !(m.has_label(Label::Conj) || m.is_object()) {
            continue;
        }
        if let (Some(j), previous) = sequence.previous_overt(i) {
            if ends_with(&previous, is_short_vowel) {
                sequence.morphemes[j].text = lengthen(&previous);
            }
        }
    }
    Ok(sequence)
}

// ---------------------------------------------------------------------------
// Syncope
// ---------------------------------------------------------------------------

static SYNCOPE: LazyLock<Regex> = LazyLock::new(|| {
    let v: String = SHORT_VOWELS.iter().collect();
    let c: String = STRONG_CONSONANTS.iter().chain(WEAK_CONSONANTS).collect();
    Regex::new(&format!("(?:[{v}][{c}])+([{v}])[{c}][^{c}]"))
        .expect("syncope pattern is a valid regex")
});

/// Drop the first short vowel in an open syllable that follows another
/// open syllable (`inparisū` → `inparsū`). Object suffixes are exempt.
pub fn syncopate(mut sequence: Sequence) -> Result<Sequence> {
    let text: String = sequence.morphemes.iter().map(|m| m.text.as_str()).collect();
    let Some(vowel) = SYNCOPE.captures(&text).and_then(|caps| caps.get(1)) else {
        return Ok(sequence);
    };
    let target = text[..vowel.start()].chars().count();
    let mut offset = 0;
    for m in &mut sequence.morphemes {
        let len = m.text.chars().count();
        if target < offset + len {
            if !m.is_object() {
                let at = target - offset;
                m.text = m
                    .text
                    .chars()
                    .enumerate()
                    .filter(|&(n, _)| n != at)
                    .map(|(_, c)| c)
                    .collect();
            }
            break;
        }
        offset += len;
    }
    Ok(sequence)
}
