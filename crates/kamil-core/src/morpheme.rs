// Morpheme: a piece of surface text tagged with the features it realizes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::features::{Feature, Label};

/// A morpheme: surface text, the features it realizes, and any infixed
/// morphemes.
///
/// `text` may be empty; such a silent morpheme still glosses its features.
/// Infix offsets are character positions within `text` and are only
/// attached once no further rewriting of `text` will happen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Morpheme {
    pub text: String,
    pub functions: Vec<Feature>,
    pub infixes: Vec<(usize, Morpheme)>,
}

impl Morpheme {
    pub fn new(text: impl Into<String>, functions: impl IntoIterator<Item = Feature>) -> Self {
        Self {
            text: text.into(),
            functions: functions.into_iter().collect(),
            infixes: Vec::new(),
        }
    }

    /// A morpheme with no overt text.
    pub fn silent(functions: impl IntoIterator<Item = Feature>) -> Self {
        Self::new(String::new(), functions)
    }

    pub fn with_infixes(mut self, infixes: Vec<(usize, Morpheme)>) -> Self {
        self.infixes = infixes;
        self
    }

    /// Check whether the morpheme realizes `feature`.
    pub fn has(&self, feature: &Feature) -> bool {
        self.functions.contains(feature)
    }

    pub fn has_label(&self, label: Label) -> bool {
        self.functions.contains(&Feature::Label(label))
    }

    /// Check whether the morpheme is a pronominal object suffix.
    pub fn is_object(&self) -> bool {
        self.functions.iter().any(Feature::is_object)
    }

    /// Check whether the morpheme is the `-t-` or `-tan-` infix.
    pub fn is_t_infix(&self) -> bool {
        self.has_label(Label::T) || self.has_label(Label::Tan)
    }

    /// Append the features of `other` not already present.
    pub fn absorb_functions(&mut self, other: &[Feature]) {
        for f in other {
            if !self.functions.contains(f) {
                self.functions.push(f.clone());
            }
        }
    }

    /// The surface text with infixes spliced in.
    pub fn plain_text(&self) -> String {
        self.splice(&self.text, |infix| infix.plain_text())
    }

    /// The text as shown in a morpheme-by-morpheme breakdown: `∅` for a
    /// silent morpheme and `⟨…⟩` around infixes.
    pub fn object_language(&self) -> String {
        let base = if self.text.is_empty() { "\u{2205}" } else { &self.text };
        self.splice(base, |infix| format!("\u{27E8}{}\u{27E9}", infix.object_language()))
    }

    /// The interlinear gloss: features joined by `.`, with infix glosses
    /// after the first feature.
    pub fn gloss(&self) -> String {
        let joined = |fs: &[Feature]| {
            fs.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(".")
        };
        if self.infixes.is_empty() {
            return joined(self.functions.as_slice());
        }
        let mut out = self
            .functions
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        for (_, infix) in &self.infixes {
            out.push('\u{27E8}');
            out.push_str(&infix.gloss());
            out.push('\u{27E9}');
        }
        out.push_str(&joined(self.functions.get(1..).unwrap_or(&[])));
        out
    }

    /// Insert the rendering of each infix at its offset, last offset first
    /// so earlier offsets stay valid.
    fn splice(&self, base: &str, render: impl Fn(&Morpheme) -> String) -> String {
        let mut chars: Vec<char> = base.chars().collect();
        let mut ordered: Vec<&(usize, Morpheme)> = self.infixes.iter().collect();
        ordered.sort_by(|a, b| b.0.cmp(&a.0));
        for (offset, infix) in ordered {
            let at = (*offset).min(chars.len());
            let tail = chars.split_off(at);
            chars.extend(render(infix).chars());
            chars.extend(tail);
        }
        chars.into_iter().collect()
    }
}
