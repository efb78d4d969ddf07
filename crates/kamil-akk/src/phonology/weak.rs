// Cluster simplification and loss of weak consonants

use kamil_core::character::{
    ends_with, fold_vowel_length, is_consonant, is_geminate, is_short_vowel, is_single_consonant,
    is_single_short_vowel, is_strong_consonant, is_vowel, is_weak_consonant, lengthen, starts_with,
};
use kamil_core::{Feature, Label};

use super::Sequence;
use crate::{KamilError, Result};

/// `-tan-` before a consonant cluster: `tan` → `ta` before a strong
/// consonant, and a weak consonant after it is dropped instead.
pub fn simplify_clusters(mut sequence: Sequence) -> Result<Sequence> {
    for i in 0..sequence.morphemes.len() {
        if sequence.morphemes[i].text != "tan" {
            continue;
        }
        let (k, next) = sequence.next_overt(i);
        let (_, next_2) = sequence.next_overt(k);
        let joined = format!("{next}{next_2}");
        let mut lookahead = joined.chars();
        let (Some(first), Some(second)) = (lookahead.next(), lookahead.next()) else {
            continue;
        };
        if !is_consonant(second) {
            continue;
        }
        if is_strong_consonant(first) {
            sequence.morphemes[i].text = "ta".to_string();
        } else if is_weak_consonant(first) {
            sequence.morphemes[k].text.clear();
        }
    }
    Ok(sequence)
}

fn unexpected(sequence: &Sequence, expected: &'static str, found: &str) -> KamilError {
    KamilError::UnexpectedEnvironment {
        expected,
        found: found.to_string(),
        form: sequence.describe(),
    }
}

/// Drop weak consonants (ʾ h ḥ ʿ w y), with compensatory lengthening or
/// vowel contraction depending on the environment.
pub fn lose_weak_consonants(mut sequence: Sequence) -> Result<Sequence> {
    for i in 0..sequence.morphemes.len() {
        let mut chars = sequence.morphemes[i].text.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) if a == b && is_weak_consonant(a) => {
                lose_geminate(&mut sequence, i, a)?;
            }
            (Some(a), None, None) if is_weak_consonant(a) => {
                lose_single(&mut sequence, i, a);
            }
            _ => {}
        }
    }
    Ok(sequence)
}

/// A doubled weak second radical, as in the durative `ikawwan`.
fn lose_geminate(sequence: &mut Sequence, i: usize, weak: char) -> Result<()> {
    let (j, previous) = sequence.previous_overt(i);
    let (k, next) = sequence.next_overt(i);
    let (l, next_2) = sequence.next_overt(k);
    let (_, next_3) = sequence.next_overt(l);

    let j = match j {
        Some(j) if ends_with(&previous, is_short_vowel) => j,
        _ => return Err(unexpected(sequence, "end with a short vowel", &previous)),
    };
    if !is_single_short_vowel(&next) {
        return Err(unexpected(sequence, "be a short vowel", &next));
    }
    if !is_single_consonant(&next_2) {
        return Err(unexpected(sequence, "be a consonant", &next_2));
    }

    let d_stem = sequence.morphemes[i].has_label(Label::D);
    let after_a = ends_with(&previous, |c| c == 'a');
    let m = &mut sequence.morphemes;
    if starts_with(&next_3, is_vowel) {
        if !d_stem && after_a {
            match weak {
                'w' => m[k].text = "u".to_string(),
                'y' => m[k].text = "i".to_string(),
                _ => {}
            }
        }
        m[i].text.clear();
        m[j].text.pop();
        m[l].text = next_2.repeat(2);
    } else if d_stem {
        m[j].text.pop();
        m[i].text.clear();
        m[k].text = lengthen(&next);
    } else if weak == 'w' && after_a {
        m[j].text.pop();
        m[i].text = "\u{016B}".to_string();
    } else if weak == 'y' && after_a {
        m[j].text.pop();
        m[i].text = "\u{012B}".to_string();
    } else {
        m[i].text.clear();
    }
    Ok(())
}

/// A single weak consonant.
fn lose_single(sequence: &mut Sequence, i: usize, weak: char) {
    let (j, previous) = sequence.previous_overt(i);
    let (k, next) = sequence.next_overt(i);
    let (l, next_2) = sequence.next_overt(k);
    let len = sequence.morphemes.len();

    // CʾV > CV̄
    if ends_with(&previous, is_consonant) && k < len {
        sequence.morphemes[i].text.clear();
        sequence.morphemes[k].text = lengthen(&next);
    }

    let hlk_after_prefix = sequence.root == "hlk"
        && j.is_some_and(|j| sequence.morphemes[j].functions.iter().any(Feature::is_person));

    if ends_with(&previous, is_vowel)
        && (next == "a" || next == "e")
        && is_geminate(&next_2)
        && (weak != 'w' || !sequence.underlying_has(Label::D))
    {
        // VʾaCC > VCC
        for m in &mut sequence.morphemes[i..l] {
            m.text.clear();
        }
    } else if ends_with(&previous, |c| c == 'a') && starts_with(&next, |c| c == 'a') {
        // aʾa > ā
        if let Some(j) = j {
            sequence.morphemes[j].text.pop();
        }
        sequence.morphemes[i].text = match weak {
            'w' => "\u{016B}",
            'y' => "\u{012B}",
            _ => "\u{0101}",
        }
        .to_string();
        sequence.morphemes[k].text = next.chars().skip(1).collect();
    } else if hlk_after_prefix && (next == "ta" || next == "tan") {
        sequence.morphemes[i].text = "t".to_string();
    } else if hlk_after_prefix && next_2 == "i" {
        sequence.morphemes[i].text = next;
    } else if ends_with(&fold_vowel_length(&previous), is_short_vowel)
        && starts_with(&fold_vowel_length(&next), is_consonant)
    {
        // VʾC > V̄C
        if let Some(j) = j.filter(|_| ends_with(&previous, is_short_vowel)) {
            sequence.morphemes[j].text = lengthen(&previous);
        }
        sequence.morphemes[i].text.clear();
    } else if weak != 'w' {
        sequence.morphemes[i].text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::test_support::{bare, texts};
    use kamil_core::Morpheme;

    #[test]
    fn tan_before_strong_cluster() {
        let s = simplify_clusters(bare("prs", &["i", "p", "tan", "r", "a", "s"])).unwrap();
        assert_eq!(texts(&s)[2], "tan");
        let s = simplify_clusters(bare("prs", &["i", "tan", "p", "r", "a", "s"])).unwrap();
        assert_eq!(texts(&s)[1], "ta");
    }

    #[test]
    fn tan_before_weak_cluster_drops_the_weak_consonant() {
        let s = simplify_clusters(bare("ʾḫz", &["i", "tan", "ʾ", "ḫ", "i", "z"])).unwrap();
        assert_eq!(texts(&s), ["i", "tan", "", "ḫ", "i", "z"]);
    }

    #[test]
    fn aleph_between_a_vowels_contracts() {
        // iša-ʾ-al, as in the durative of šʾl written without gemination
        let s = lose_weak_consonants(bare("šʾl", &["i", "ša", "ʾ", "al"])).unwrap();
        assert_eq!(texts(&s), ["i", "š", "ā", "l"]);
    }

    #[test]
    fn weak_first_radical_lengthens_prefix_vowel() {
        let s = lose_weak_consonants(bare("ʾḫz", &["i", "ʾ", "ḫ", "u", "z"])).unwrap();
        assert_eq!(texts(&s), ["ī", "", "ḫ", "u", "z"]);
    }

    #[test]
    fn weak_before_geminate_is_absorbed() {
        let s = lose_weak_consonants(bare("ʾḫz", &["i", "ʾ", "a", "ḫḫ", "a", "z"])).unwrap();
        assert_eq!(texts(&s), ["i", "", "", "ḫḫ", "a", "z"]);
    }

    #[test]
    fn weak_after_consonant_lengthens_next_vowel() {
        let s = lose_weak_consonants(bare("bnʾ", &["i", "b", "n", "ʾ", "u"])).unwrap();
        assert_eq!(texts(&s), ["i", "b", "n", "", "ū"]);
    }

    #[test]
    fn geminate_w_contracts_to_long_u() {
        let s = lose_weak_consonants(bare("kwn", &["i", "ka", "ww", "a", "n"])).unwrap();
        assert_eq!(texts(&s), ["i", "k", "ū", "a", "n"]);
    }

    #[test]
    fn geminate_weak_before_vowel_doubles_next_consonant() {
        let s = lose_weak_consonants(bare("kwn", &["i", "ka", "ww", "a", "n", "ū"])).unwrap();
        assert_eq!(texts(&s), ["i", "k", "", "u", "nn", "ū"]);
    }

    #[test]
    fn geminate_in_d_stem_lengthens_vowel() {
        let mut seq = bare("kwn", &["u", "ka", "ww", "i", "n"]);
        seq.morphemes[2] = Morpheme::new("ww", [Feature::Label(Label::D)]);
        let s = lose_weak_consonants(seq).unwrap();
        assert_eq!(texts(&s), ["u", "k", "", "ī", "n"]);
    }

    #[test]
    fn geminate_needs_vowel_context() {
        let err = lose_weak_consonants(bare("kwn", &["i", "k", "ww", "a", "n"])).unwrap_err();
        assert!(matches!(
            err,
            KamilError::UnexpectedEnvironment { expected: "end with a short vowel", .. }
        ));
        let err = lose_weak_consonants(bare("kwn", &["i", "ka", "ww", "ā", "n"])).unwrap_err();
        assert!(matches!(
            err,
            KamilError::UnexpectedEnvironment { expected: "be a short vowel", .. }
        ));
    }

    #[test]
    fn hlk_assimilates_after_prefix() {
        let mut seq = bare("hlk", &["i", "h", "l", "i", "k"]);
        seq.morphemes[0] = Morpheme::new("i", [Feature::Person(kamil_core::Person::Third)]);
        let s = lose_weak_consonants(seq).unwrap();
        assert_eq!(texts(&s), ["i", "l", "l", "i", "k"]);

        let mut seq = bare("hlk", &["i", "h", "ta", "l", "a", "k"]);
        seq.morphemes[0] = Morpheme::new("i", [Feature::Person(kamil_core::Person::Third)]);
        let s = lose_weak_consonants(seq).unwrap();
        assert_eq!(texts(&s)[1], "t");
    }

    #[test]
    fn intervocalic_w_survives() {
        let s = lose_weak_consonants(bare("ʾwr", &["u", "w", "i", "r"])).unwrap();
        assert_eq!(texts(&s), ["u", "w", "i", "r"]);
    }
}
