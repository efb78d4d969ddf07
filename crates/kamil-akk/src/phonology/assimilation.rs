// Consonant assimilation across morpheme boundaries

use kamil_core::character::{SHIN, ends_with, is_consonant, starts_with};
use kamil_core::{Feature, Label, Radical};

use super::Sequence;
use crate::Result;

fn replace_first(s: &str, c: char) -> String {
    std::iter::once(c).chain(s.chars().skip(1)).collect()
}

fn replace_last(s: &mut String, c: char) {
    s.pop();
    s.push(c);
}

/// The `t` of `-ta-`/`-tan-` takes on a preceding dental or sibilant
/// (`iṣtabat` → `iṣṣabat`).
pub fn assimilate_t(mut sequence: Sequence) -> Result<Sequence> {
    for i in 0..sequence.morphemes.len() {
        let m = &sequence.morphemes[i];
        if !(m.is_t_infix() && m.text.starts_with('t')) {
            continue;
        }
        let (_, previous) = sequence.previous_overt(i);
        if let Some(c) = previous.chars().next_back().filter(|c| matches!(c, 'd' | '\u{1E6D}' | 's' | '\u{1E63}')) {
            sequence.morphemes[i].text = replace_first(&sequence.morphemes[i].text, c);
        }
    }
    Ok(sequence)
}

/// A dental or sibilant and the `š` of an object suffix both become `s`
/// (`iṣbat-šu` → `iṣbassu`).
pub fn assimilate_object_sh(mut sequence: Sequence) -> Result<Sequence> {
    for i in 0..sequence.morphemes.len() {
        let m = &sequence.morphemes[i];
        if !(m.is_object() && m.text.starts_with(SHIN)) {
            continue;
        }
        let (j, previous) = sequence.previous_overt(i);
        let Some(j) = j else { continue };
        if ends_with(&previous, |c| {
            matches!(c, 'd' | 't' | '\u{1E6D}' | 's' | '\u{1E63}' | 'z' | SHIN)
        }) {
            replace_last(&mut sequence.morphemes[j].text, 's');
            sequence.morphemes[i].text = replace_first(&sequence.morphemes[i].text, 's');
        }
    }
    Ok(sequence)
}

/// `bm` → `mm`.
pub fn assimilate_b(mut sequence: Sequence) -> Result<Sequence> {
    for i in 0..sequence.morphemes.len() {
        let (_, next) = sequence.next_overt(i);
        if sequence.morphemes[i].text.ends_with('b') && next.starts_with('m') {
            replace_last(&mut sequence.morphemes[i].text, 'm');
        }
    }
    Ok(sequence)
}

/// The final `m` of the ventive and of dative suffixes assimilates to a
/// following consonant (`iprusam-šu` → `iprusaššu`).
pub fn assimilate_ventive_m(mut sequence: Sequence) -> Result<Sequence> {
    for i in 0..sequence.morphemes.len() {
        let m = &sequence.morphemes[i];
        if !((m.has_label(Label::Vent) || m.functions.iter().any(Feature::is_dative))
            && m.text.ends_with('m'))
        {
            continue;
        }
        let (_, next) = sequence.next_overt(i);
        if let Some(c) = next.chars().next().filter(|&c| is_consonant(c)) {
            replace_last(&mut sequence.morphemes[i].text, c);
        }
    }
    Ok(sequence)
}

/// `n` assimilates to a following consonant, except for a first radical
/// `n` before the second radical in the N stem with `-t-`/`-tan-`.
pub fn assimilate_n(mut sequence: Sequence) -> Result<Sequence> {
    let protected = sequence.underlying_has(Label::Pass)
        && (sequence.underlying_has(Label::T) || sequence.underlying_has(Label::Tan));
    for i in 0..sequence.morphemes.len() {
        if !sequence.morphemes[i].text.ends_with('n') {
            continue;
        }
        let (k, next) = sequence.next_overt(i);
        if !starts_with(&next, is_consonant) {
            continue;
        }
        let keeps_n = protected
            && sequence.morphemes[i].has(&Feature::Radical(Radical::First))
            && sequence.morphemes[k].has(&Feature::Radical(Radical::Second));
        if keeps_n {
            continue;
        }
        if let Some(c) = next.chars().next() {
            replace_last(&mut sequence.morphemes[i].text, c);
        }
    }
    Ok(sequence)
}
