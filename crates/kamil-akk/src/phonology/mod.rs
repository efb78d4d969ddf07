//! Sound changes from the underlying to the surface form.
//!
//! The cascade is a fixed, ordered list of [`Pass`]es. Each pass takes the
//! whole [`Sequence`] and returns the rewritten one; later passes see the
//! output of earlier ones, so the order in [`PASSES`] is part of the
//! grammar. Morphemes whose text is deleted stay in place with empty text
//! so their features still show in the gloss.

mod assimilation;
mod merge;
mod vowels;
mod weak;

use std::collections::BTreeSet;

use kamil_core::{Feature, Label, Morpheme};

use crate::Result;

/// A morpheme sequence being rewritten, with the root it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub root: String,
    pub morphemes: Vec<Morpheme>,
    underlying_functions: BTreeSet<Feature>,
}

impl Sequence {
    /// Start a rewrite; the features of `morphemes` are recorded as the
    /// underlying feature set and are not updated by later changes.
    pub fn new(root: impl Into<String>, morphemes: Vec<Morpheme>) -> Self {
        let underlying_functions = morphemes
            .iter()
            .flat_map(|m| m.functions.iter().cloned())
            .collect();
        Self {
            root: root.into(),
            morphemes,
            underlying_functions,
        }
    }

    /// Features of the form before any rewriting.
    pub fn underlying_functions(&self) -> &BTreeSet<Feature> {
        &self.underlying_functions
    }

    pub(crate) fn underlying_has(&self, label: Label) -> bool {
        self.underlying_functions.contains(&Feature::Label(label))
    }

    /// Concatenated morpheme text, infixes included.
    pub fn text(&self) -> String {
        self.morphemes.iter().map(Morpheme::plain_text).collect()
    }

    /// Hyphenated breakdown used in error messages.
    pub(crate) fn describe(&self) -> String {
        self.morphemes
            .iter()
            .map(Morpheme::object_language)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// The first morpheme after `i` with non-empty text.
    ///
    /// Returns its index and text, or an index past the end and an empty
    /// string when there is none.
    pub(crate) fn next_overt(&self, i: usize) -> (usize, String) {
        let start = i + 1;
        match self.morphemes.iter().enumerate().skip(start).find(|(_, m)| !m.text.is_empty()) {
            Some((k, m)) => (k, m.text.clone()),
            None => (start.max(self.morphemes.len()), String::new()),
        }
    }

    /// The last morpheme before `i` with non-empty text.
    pub(crate) fn previous_overt(&self, i: usize) -> (Option<usize>, String) {
        self.morphemes[..i.min(self.morphemes.len())]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, m)| !m.text.is_empty())
            .map_or((None, String::new()), |(j, m)| (Some(j), m.text.clone()))
    }
}

/// A single sound change.
pub type Pass = fn(Sequence) -> Result<Sequence>;

/// The sound changes in application order.
pub const PASSES: [(&str, Pass); 12] = [
    ("cluster simplification", weak::simplify_clusters),
    ("vowel colouring", vowels::colour),
    ("weak consonant loss", weak::lose_weak_consonants),
    ("vowel contraction", vowels::contract),
    ("lengthening before enclitics", vowels::lengthen_before_enclitics),
    ("t assimilation", assimilation::assimilate_t),
    ("object š assimilation", assimilation::assimilate_object_sh),
    ("b assimilation", assimilation::assimilate_b),
    ("ventive m assimilation", assimilation::assimilate_ventive_m),
    ("syncope", vowels::syncopate),
    ("n assimilation", assimilation::assimilate_n),
    ("root merge", merge::merge_root),
];

/// Run every pass in order.
pub fn rewrite(sequence: Sequence) -> Result<Sequence> {
    PASSES.iter().try_fold(sequence, |sequence, (name, pass)| {
        log::trace!("{name}: {}", sequence.describe());
        pass(sequence)
    })
}
