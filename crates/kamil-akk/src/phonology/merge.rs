// Fold the radicals and everything between them into one root morpheme

use kamil_core::{Feature, Morpheme, Radical};

use super::Sequence;
use crate::{KamilError, Result};

/// Replace the span from the first to the third radical with a single
/// morpheme glossed with the root.
///
/// A `-t-`/`-tan-` inside the span becomes an infix of the merged morpheme
/// at the position where it stood. One that carries the first radical
/// (after contraction) is root material.
pub fn merge_root(mut sequence: Sequence) -> Result<Sequence> {
    let find = |from: usize, radical: Radical| {
        sequence.morphemes[from..]
            .iter()
            .position(|m| m.has(&Feature::Radical(radical)))
            .map(|p| p + from)
            .ok_or_else(|| KamilError::MissingRadical {
                radical,
                form: sequence.describe(),
            })
    };
    let start = find(0, Radical::First)?;
    let end = find(start, Radical::Third)?;

    let mut text = String::new();
    let mut functions = vec![Feature::Root(sequence.root.clone())];
    let mut infixes = Vec::new();
    for m in sequence.morphemes.drain(start..=end) {
        if m.is_t_infix() && !m.has(&Feature::Radical(Radical::First)) {
            let kept: Vec<Feature> = m.functions.into_iter().filter(|f| !f.is_radical()).collect();
            infixes.push((text.chars().count(), Morpheme::new(m.text, kept)));
        } else {
            text.push_str(&m.text);
            for f in m.functions {
                if !functions.contains(&f) {
                    functions.push(f);
                }
            }
        }
    }
    functions.retain(|f| !f.is_radical());

    sequence
        .morphemes
        .insert(start, Morpheme::new(text, functions).with_infixes(infixes));
    Ok(sequence)
}
