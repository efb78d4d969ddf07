//! Akkadian finite verb synthesis and recognition.
//!
//! A [`Verb`] plus a [`FormSpec`] is turned into an underlying morpheme
//! sequence, which the [`phonology`] cascade rewrites into the attested
//! surface form. The resulting [`Decomposition`] keeps both, along with an
//! interlinear gloss. [`ReverseIndex`] runs the same machinery in bulk to
//! recognize observed words.
//!
//! # Architecture
//!
//! - [`affixes`] -- Personal, modal and pronominal affix tables
//! - [`verb`] -- Lexeme parameters and the synthesizer
//! - [`phonology`] -- Ordered sound-change passes
//! - [`decomposition`] -- Surface form, reconstruction and gloss
//! - [`lexicon`] -- Built-in lexicon and lexicon file parsing
//! - [`index`] -- Lazy surface-text to gloss index

pub mod affixes;
pub mod decomposition;
pub mod index;
pub mod lexicon;
pub mod phonology;
pub mod verb;

pub use decomposition::Decomposition;
pub use index::{IndexOptions, ReverseIndex, distinguishing_functions};
pub use verb::{Aspect, FormSpec, Infix, Verb};

use kamil_core::{ObjectCase, Person, Radical};

/// Error type for synthesis and sound-change failures.
///
/// These signal inconsistent input or lexical data for a single form; a
/// batch that hits one should skip that form and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KamilError {
    /// A sound-change pass found its trigger in an environment it cannot
    /// handle.
    #[error("{found:?} should {expected} in {form}")]
    UnexpectedEnvironment {
        expected: &'static str,
        found: String,
        form: String,
    },

    #[error("could not find {radical} in {form}")]
    MissingRadical { radical: Radical, form: String },

    #[error("invalid root {0:?}: expected three consonants")]
    InvalidRoot(String),

    #[error("invalid theme vowel {0:?}: expected one of a, e, i, u")]
    InvalidThemeVowel(String),

    /// A gloss-only person such as `1|3` was used as an inflection input.
    #[error("cannot inflect for person {0}")]
    InvalidPerson(Person),

    #[error("{0} object of the second or third person needs a gender")]
    MissingGender(ObjectCase),
}

pub type Result<T> = std::result::Result<T, KamilError>;
