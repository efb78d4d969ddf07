// Decomposition: a surface form with its reconstruction and gloss

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use kamil_core::{Feature, Morpheme};

use crate::Result;
use crate::phonology::{self, Sequence};

/// A finite verb form split into morphemes.
///
/// Holds the surface morphemes after every sound change, a copy of the
/// underlying morphemes (the reconstruction), and the union of the features
/// carried by the surface morphemes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Decomposition {
    root: String,
    reconstructed: Vec<Morpheme>,
    morphemes: Vec<Morpheme>,
    functions: BTreeSet<Feature>,
}

impl Decomposition {
    /// Run `underlying` through the sound changes.
    pub fn new(root: &str, underlying: Vec<Morpheme>) -> Result<Self> {
        let reconstructed = underlying
            .iter()
            .map(|m| Morpheme::new(m.text.clone(), m.functions.iter().cloned()))
            .collect();
        let surface = phonology::rewrite(Sequence::new(root, underlying))?;
        let functions = surface
            .morphemes
            .iter()
            .flat_map(|m| m.functions.iter().cloned())
            .collect();
        Ok(Self {
            root: surface.root,
            reconstructed,
            morphemes: surface.morphemes,
            functions,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    /// The underlying morphemes, before any sound change.
    pub fn reconstructed(&self) -> &[Morpheme] {
        &self.reconstructed
    }

    pub fn functions(&self) -> &BTreeSet<Feature> {
        &self.functions
    }

    /// The surface form.
    pub fn text(&self) -> String {
        self.morphemes.iter().map(Morpheme::plain_text).collect()
    }

    /// The underlying form, e.g. `ibanniʾū` for `ibannû`.
    pub fn reconstruction(&self) -> String {
        self.reconstructed.iter().map(Morpheme::plain_text).collect()
    }

    /// Hyphenated morpheme breakdown, e.g. `i-parras-∅`.
    pub fn object_language(&self) -> String {
        self.morphemes
            .iter()
            .map(Morpheme::object_language)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Hyphenated interlinear gloss, e.g. `3-√prs.IMPFV-3.SG`.
    pub fn gloss(&self) -> String {
        self.morphemes
            .iter()
            .map(Morpheme::gloss)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// The key under which this form is stored in the index; two
    /// decompositions with the same key are the same analysis.
    pub fn gloss_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text();
        let reconstruction = self.reconstruction();
        write!(f, "{}  ({text}", self.object_language())?;
        if reconstruction != text {
            write!(f, " < *{reconstruction}")?;
        }
        write!(f, ")\n{}", self.gloss())
    }
}
