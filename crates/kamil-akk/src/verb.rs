// Verb lexemes and synthesis of underlying morpheme sequences

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use kamil_core::character::{is_consonant, is_short_vowel, is_weak_consonant, nfc};
use kamil_core::{Agreement, Feature, Gender, Label, Morpheme, Number, ObjectCase, Person, Radical, Stem};

use crate::affixes;
use crate::decomposition::Decomposition;
use crate::{KamilError, Result};

// ---------------------------------------------------------------------------
// Form parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Aspect {
    /// Imperfective (present-future), e.g. `iparras`.
    Durative,
    /// Preterite, e.g. `iprus`.
    Perfective,
}

impl Aspect {
    pub const ALL: [Aspect; 2] = [Aspect::Durative, Aspect::Perfective];
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aspect::Durative => write!(f, "durative"),
            Aspect::Perfective => write!(f, "perfective"),
        }
    }
}

/// The `-t-` (perfect, reflexive) and `-tan-` (iterative) infixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Infix {
    T,
    Tan,
}

impl Infix {
    pub fn label(self) -> Label {
        match self {
            Infix::T => Label::T,
            Infix::Tan => Label::Tan,
        }
    }
}

impl fmt::Display for Infix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.label(), f)
    }
}

/// Inflectional choices for one finite form.
///
/// Built with [`FormSpec::new`] and the chained setters:
///
/// ```
/// use kamil_akk::{FormSpec, Infix};
/// use kamil_core::{Agreement, Gender, Number, Person, Stem};
///
/// let spec = FormSpec::new(Person::Third, Gender::M, Number::Sg)
///     .stem(Stem::D)
///     .infix(Infix::T)
///     .direct_object(Agreement::new(Person::Third, Gender::F, Number::Sg));
/// assert_eq!(spec.stem, Stem::D);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormSpec {
    pub person: Person,
    pub gender: Gender,
    pub number: Number,
    pub stem: Stem,
    pub infix: Option<Infix>,
    pub subjunctive: bool,
    pub connective: bool,
    pub ventive: bool,
    pub direct_object: Option<Agreement>,
    pub indirect_object: Option<Agreement>,
}

impl FormSpec {
    /// A plain G-stem form for the given subject.
    pub fn new(person: Person, gender: Gender, number: Number) -> Self {
        Self {
            person,
            gender,
            number,
            stem: Stem::G,
            infix: None,
            subjunctive: false,
            connective: false,
            ventive: false,
            direct_object: None,
            indirect_object: None,
        }
    }

    pub fn stem(mut self, stem: Stem) -> Self {
        self.stem = stem;
        self
    }

    pub fn infix(mut self, infix: impl Into<Option<Infix>>) -> Self {
        self.infix = infix.into();
        self
    }

    pub fn subjunctive(mut self, on: bool) -> Self {
        self.subjunctive = on;
        self
    }

    pub fn connective(mut self, on: bool) -> Self {
        self.connective = on;
        self
    }

    pub fn ventive(mut self, on: bool) -> Self {
        self.ventive = on;
        self
    }

    pub fn direct_object(mut self, object: impl Into<Option<Agreement>>) -> Self {
        self.direct_object = object.into();
        self
    }

    pub fn indirect_object(mut self, object: impl Into<Option<Agreement>>) -> Self {
        self.indirect_object = object.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.person.is_simple() {
            return Err(KamilError::InvalidPerson(self.person));
        }
        let objects = [
            (ObjectCase::Accusative, self.direct_object),
            (ObjectCase::Dative, self.indirect_object),
        ];
        for (case, object) in objects {
            let Some(object) = object else { continue };
            if !object.person.is_simple() {
                return Err(KamilError::InvalidPerson(object.person));
            }
            if object.person != Person::First && object.gender.is_none() {
                return Err(KamilError::MissingGender(case));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Verb
// ---------------------------------------------------------------------------

/// A verb lexeme: a triconsonantal root with its durative and perfective
/// theme vowels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Verb {
    root: String,
    durative_vowel: char,
    perfective_vowel: char,
}

fn theme_vowel(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_short_vowel(c) => Ok(c),
        _ => Err(KamilError::InvalidThemeVowel(s.to_string())),
    }
}

impl Verb {
    /// Create a verb from its root and theme vowels, e.g. `("prs", "a", "u")`.
    ///
    /// The root is normalized to NFC and must be exactly three consonants.
    pub fn new(root: &str, durative_vowel: &str, perfective_vowel: &str) -> Result<Self> {
        let root = nfc(root);
        if root.chars().count() != 3 || !root.chars().all(is_consonant) {
            return Err(KamilError::InvalidRoot(root));
        }
        Ok(Self {
            durative_vowel: theme_vowel(durative_vowel)?,
            perfective_vowel: theme_vowel(perfective_vowel)?,
            root,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn durative_vowel(&self) -> char {
        self.durative_vowel
    }

    pub fn perfective_vowel(&self) -> char {
        self.perfective_vowel
    }

    fn radicals(&self) -> [char; 3] {
        let mut chars = self.root.chars();
        // Verb::new guarantees three characters.
        let mut next = || chars.next().unwrap_or_default();
        [next(), next(), next()]
    }

    /// Build the underlying (pre-sound-change) morpheme sequence of a form.
    ///
    /// A first singular object forces the ventive, and the ventive in turn
    /// suppresses the subjunctive.
    pub fn synthesize(&self, aspect: Aspect, spec: &FormSpec) -> Result<Vec<Morpheme>> {
        spec.validate()?;
        let [r1, r2, r3] = self.radicals();
        let (person, gender, number, stem) = (spec.person, spec.gender, spec.number, spec.stem);
        let perfective = aspect == Aspect::Perfective;
        let infix = spec.infix;
        let n_or_sh = matches!(stem, Stem::N | Stem::Sh);
        let weak_final = is_weak_consonant(r3);

        let first_singular_object = spec.direct_object.is_some_and(|o| o.is_first_singular())
            || spec.indirect_object.is_some_and(|o| o.is_first_singular());
        let ventive = spec.ventive || first_singular_object;
        let subjunctive = spec.subjunctive && !ventive;

        let d_prefix = matches!(stem, Stem::D | Stem::Sh)
            || (r1 == 'w' && (self.durative_vowel == 'a' || weak_final));

        let mut morphemes = Vec::with_capacity(14);
        morphemes.push(if d_prefix {
            affixes::personal_prefix_d(person, number)
        } else {
            affixes::personal_prefix(person, number)
        });

        match stem {
            Stem::N => morphemes.push(Morpheme::new("n", [Feature::Label(Label::Pass)])),
            Stem::Sh => morphemes.push(Morpheme::new(
                if infix.is_some() { "\u{0161}" } else { "\u{0161}a" },
                [Feature::Label(Label::Caus)],
            )),
            Stem::G | Stem::D => {}
        }

        // N and Š put the infix before the first radical, G and D after it.
        let infix_morpheme = |infix: Infix| {
            let text = match infix {
                Infix::T => "ta",
                Infix::Tan if n_or_sh && !perfective => "tana",
                Infix::Tan => "tan",
            };
            Morpheme::new(text, [Feature::Label(infix.label())])
        };
        if n_or_sh {
            morphemes.extend(infix.map(&infix_morpheme));
        }

        morphemes.push(if r1 == 'w' && self.durative_vowel != 'a' && !weak_final {
            Morpheme::new("y", [Feature::Radical(Radical::First)])
        } else if stem == Stem::N && is_weak_consonant(r1) {
            Morpheme::new(
                "n",
                [Feature::Radical(Radical::First), Feature::Label(Label::Pass)],
            )
        } else {
            Morpheme::new(r1.to_string(), [Feature::Radical(Radical::First)])
        });

        if !n_or_sh {
            morphemes.extend(infix.map(&infix_morpheme));
        }

        let sh_unlike_g = stem == Stem::Sh && !is_weak_consonant(r1);

        if perfective {
            if matches!(stem, Stem::D | Stem::N) && infix.is_none() {
                morphemes.push(Morpheme::new("a", [Feature::Label(Label::Pftv)]));
            }
        } else if infix != Some(Infix::T) && !sh_unlike_g {
            morphemes.push(Morpheme::new("a", [Feature::Label(Label::Impfv)]));
        }

        let doubled: String = [r2, r2].iter().collect();
        morphemes.push(if stem == Stem::D {
            Morpheme::new(
                doubled,
                [Feature::Radical(Radical::Second), Feature::Label(Label::D)],
            )
        } else if !perfective && !sh_unlike_g && !(stem == Stem::N && infix == Some(Infix::Tan)) {
            Morpheme::new(
                doubled,
                [Feature::Radical(Radical::Second), Feature::Label(Label::Impfv)],
            )
        } else {
            Morpheme::new(r2.to_string(), [Feature::Radical(Radical::Second)])
        });

        let stem_vowel = if perfective {
            let vowel = if matches!(stem, Stem::D | Stem::Sh) || (stem == Stem::N && infix.is_none())
            {
                'i'
            } else if infix.is_some() {
                self.durative_vowel
            } else {
                self.perfective_vowel
            };
            Morpheme::new(vowel.to_string(), [Feature::Label(Label::Pftv)])
        } else {
            let vowel = if matches!(stem, Stem::D | Stem::Sh)
                || (stem == Stem::N && self.durative_vowel != 'i' && !weak_final)
            {
                'a'
            } else {
                self.durative_vowel
            };
            Morpheme::new(vowel.to_string(), [Feature::Label(Label::Impfv)])
        };
        morphemes.push(stem_vowel);

        morphemes.push(Morpheme::new(r3.to_string(), [Feature::Radical(Radical::Third)]));

        let suffix = affixes::personal_suffix(person, gender, number, d_prefix);
        let silent_suffix = suffix.text.is_empty();
        morphemes.push(suffix);

        if subjunctive && silent_suffix {
            morphemes.push(affixes::subjunctive());
        }
        if ventive {
            morphemes.push(affixes::ventive(person, gender, number));
        }
        if let Some(object) = spec.indirect_object {
            morphemes.extend(affixes::dative(object));
        }
        if let Some(object) = spec.direct_object {
            morphemes.push(affixes::accusative(object));
        }
        if spec.connective {
            morphemes.push(affixes::connective());
        }
        Ok(morphemes)
    }

    /// Synthesize a form and run it through the sound changes.
    pub fn finite_form(&self, aspect: Aspect, spec: &FormSpec) -> Result<Decomposition> {
        Decomposition::new(&self.root, self.synthesize(aspect, spec)?)
    }

    pub fn durative(&self, spec: &FormSpec) -> Result<Decomposition> {
        self.finite_form(Aspect::Durative, spec)
    }

    pub fn perfective(&self, spec: &FormSpec) -> Result<Decomposition> {
        self.finite_form(Aspect::Perfective, spec)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\u{221A}{} ({}/{})",
            self.root, self.durative_vowel, self.perfective_vowel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prs() -> Verb {
        Verb::new("prs", "a", "u").unwrap()
    }

    fn third_masc() -> FormSpec {
        FormSpec::new(Person::Third, Gender::M, Number::Sg)
    }

    fn texts(morphemes: &[Morpheme]) -> Vec<&str> {
        morphemes.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn rejects_bad_lexical_data() {
        assert_eq!(
            Verb::new("pr", "a", "u"),
            Err(KamilError::InvalidRoot("pr".into()))
        );
        assert_eq!(
            Verb::new("p1s", "a", "u"),
            Err(KamilError::InvalidRoot("p1s".into()))
        );
        assert_eq!(
            Verb::new("prs", "ā", "u"),
            Err(KamilError::InvalidThemeVowel("ā".into()))
        );
    }

    #[test]
    fn root_is_normalized() {
        let v = Verb::new("s\u{0323}bt", "a", "a").unwrap();
        assert_eq!(v.root(), "\u{1E63}bt");
        assert_eq!(v.to_string(), "√ṣbt (a/a)");
    }

    #[test]
    fn durative_template() {
        let m = prs().synthesize(Aspect::Durative, &third_masc()).unwrap();
        assert_eq!(texts(&m), ["i", "p", "a", "rr", "a", "s", ""]);
        assert!(m[3].has_label(Label::Impfv));
    }

    #[test]
    fn perfective_template() {
        let m = prs().synthesize(Aspect::Perfective, &third_masc()).unwrap();
        assert_eq!(texts(&m), ["i", "p", "r", "u", "s", ""]);
    }

    #[test]
    fn d_stem_takes_u_prefix() {
        let spec = third_masc().stem(Stem::D);
        let m = prs().synthesize(Aspect::Perfective, &spec).unwrap();
        assert_eq!(texts(&m), ["u", "p", "a", "rr", "i", "s", ""]);
        assert_eq!(m[0].gloss(), "1|3.SG");
    }

    #[test]
    fn n_stem_infix_precedes_first_radical() {
        let v = Verb::new("ndn", "i", "i").unwrap();
        let spec = third_masc().stem(Stem::N).infix(Infix::Tan);
        let m = v.synthesize(Aspect::Perfective, &spec).unwrap();
        assert_eq!(texts(&m), ["i", "n", "tan", "n", "d", "i", "n", ""]);
    }

    #[test]
    fn g_stem_infix_follows_first_radical() {
        let spec = third_masc().infix(Infix::T);
        let m = prs().synthesize(Aspect::Perfective, &spec).unwrap();
        assert_eq!(texts(&m), ["i", "p", "ta", "r", "a", "s", ""]);
    }

    #[test]
    fn first_singular_object_forces_ventive() {
        let me = Agreement::new(Person::First, Gender::M, Number::Sg);
        let spec = third_masc().subjunctive(true).direct_object(me);
        let m = prs().synthesize(Aspect::Perfective, &spec).unwrap();
        assert!(m.iter().any(|m| m.has_label(Label::Vent)));
        assert!(!m.iter().any(|m| m.has_label(Label::Subj)));
    }

    #[test]
    fn subjunctive_only_after_silent_suffix() {
        let spec = FormSpec::new(Person::Third, Gender::M, Number::Pl).subjunctive(true);
        let m = prs().synthesize(Aspect::Perfective, &spec).unwrap();
        assert!(!m.iter().any(|m| m.has_label(Label::Subj)));
    }

    #[test]
    fn suffix_order() {
        let spec = third_masc()
            .ventive(true)
            .indirect_object(Agreement::new(Person::Third, Gender::F, Number::Sg))
            .direct_object(Agreement::new(Person::Third, Gender::M, Number::Sg))
            .connective(true);
        let m = prs().synthesize(Aspect::Perfective, &spec).unwrap();
        assert_eq!(&texts(&m)[6..], ["am", "šim", "šu", "ma"]);
    }

    #[test]
    fn rejects_gloss_only_person() {
        let spec = FormSpec::new(Person::FirstOrThird, Gender::M, Number::Sg);
        assert_eq!(
            prs().synthesize(Aspect::Durative, &spec),
            Err(KamilError::InvalidPerson(Person::FirstOrThird))
        );
    }

    #[test]
    fn object_needs_gender() {
        let object = Agreement {
            person: Person::Third,
            gender: None,
            number: Number::Sg,
        };
        let spec = third_masc().direct_object(object);
        assert_eq!(
            prs().synthesize(Aspect::Durative, &spec),
            Err(KamilError::MissingGender(ObjectCase::Accusative))
        );
    }

    #[test]
    fn i_w_root_glide() {
        let v = Verb::new("wšb", "a", "i").unwrap();
        let m = v.synthesize(Aspect::Durative, &third_masc()).unwrap();
        assert_eq!(m[0].text, "u");
        let v = Verb::new("wṣʾ", "i", "i").unwrap();
        let m = v.synthesize(Aspect::Durative, &third_masc()).unwrap();
        assert_eq!(m[0].text, "u");
        assert_eq!(m[1].text, "w");
        let v = Verb::new("wrd", "i", "i").unwrap();
        let m = v.synthesize(Aspect::Durative, &third_masc()).unwrap();
        assert_eq!(texts(&m)[..2], ["i", "y"]);
    }
}
