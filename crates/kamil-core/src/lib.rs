//! Shared types for Akkadian verb morphology.
//!
//! - [`features`] -- Closed vocabulary of grammatical features
//! - [`morpheme`] -- Morphemes with text, features and infixes
//! - [`character`] -- Transliteration alphabet, normalization and folding

pub mod character;
pub mod features;
pub mod morpheme;

pub use features::{
    Agreement, Feature, FeatureParseError, Gender, Label, Number, ObjectCase, Person, Radical,
    Stem,
};
pub use morpheme::Morpheme;
