// Grammatical features realized by morphemes
//
// Every morpheme carries an ordered list of `Feature`s. The vocabulary is
// closed: persons, genders, numbers, stems, radical slots, object agreement,
// and a fixed set of modal/aspectual labels. Equality and hashing are by
// value.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error returned when parsing a feature from its gloss notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureParseError {
    #[error("unknown person: {0:?}")]
    Person(String),
    #[error("unknown gender: {0:?}")]
    Gender(String),
    #[error("unknown number: {0:?}")]
    Number(String),
    #[error("unknown stem: {0:?}")]
    Stem(String),
    #[error("expected PERSON.GENDER.NUMBER, got {0:?}")]
    Agreement(String),
}

/// Grammatical person.
///
/// `FirstOrThird` is never a synthesis input. It only appears in glosses of
/// D-stem prefixes and suffixes, where 1SG and 3SG are homophonous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Person {
    First,
    Second,
    Third,
    FirstOrThird,
}

impl Person {
    /// The three persons a verb can be inflected for.
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    /// Check whether this is a single person rather than a gloss disjunction.
    pub fn is_simple(self) -> bool {
        !matches!(self, Person::FirstOrThird)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Person::First => "1",
            Person::Second => "2",
            Person::Third => "3",
            Person::FirstOrThird => "1|3",
        })
    }
}

impl FromStr for Person {
    type Err = FeatureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Person::First),
            "2" => Ok(Person::Second),
            "3" => Ok(Person::Third),
            "1|3" => Ok(Person::FirstOrThird),
            _ => Err(FeatureParseError::Person(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::M, Gender::F];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::M => "M",
            Gender::F => "F",
        })
    }
}

impl FromStr for Gender {
    type Err = FeatureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" | "m" => Ok(Gender::M),
            "F" | "f" => Ok(Gender::F),
            _ => Err(FeatureParseError::Gender(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    Sg,
    Pl,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Sg, Number::Pl];
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Number::Sg => "SG",
            Number::Pl => "PL",
        })
    }
}

impl FromStr for Number {
    type Err = FeatureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SG" | "sg" => Ok(Number::Sg),
            "PL" | "pl" => Ok(Number::Pl),
            _ => Err(FeatureParseError::Number(s.to_string())),
        }
    }
}

/// Derivational stem: basic (G), intensive (D), causative (Š), passive (N).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stem {
    #[default]
    G,
    D,
    Sh,
    N,
}

impl Stem {
    pub const ALL: [Stem; 4] = [Stem::G, Stem::D, Stem::Sh, Stem::N];
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stem::G => "G",
            Stem::D => "D",
            Stem::Sh => "\u{0160}",
            Stem::N => "N",
        })
    }
}

impl FromStr for Stem {
    type Err = FeatureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(Stem::G),
            "D" => Ok(Stem::D),
            "\u{0160}" | "Sh" | "S" => Ok(Stem::Sh),
            "N" => Ok(Stem::N),
            _ => Err(FeatureParseError::Stem(s.to_string())),
        }
    }
}

/// Modal, aspectual and derivational markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    /// Ventive, motion toward the speaker.
    Vent,
    /// The `-t-` infix.
    T,
    /// The `-tan-` infix.
    Tan,
    Pass,
    Caus,
    Pftv,
    Impfv,
    /// D-stem gemination of the second radical.
    D,
    Subj,
    /// The connective `-ma`.
    Conj,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Label::Vent => "VENT",
            Label::T => "t",
            Label::Tan => "tan",
            Label::Pass => "PASS",
            Label::Caus => "CAUS",
            Label::Pftv => "PFTV",
            Label::Impfv => "IMPFV",
            Label::D => "D",
            Label::Subj => "SUBJ",
            Label::Conj => "CONJ",
        })
    }
}

/// Root consonant slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Radical {
    First,
    Second,
    Third,
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Radical::First => "R\u{2081}",
            Radical::Second => "R\u{2082}",
            Radical::Third => "R\u{2083}",
        })
    }
}

/// Which pronominal suffix slot an object occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectCase {
    /// Direct object.
    Accusative,
    /// Indirect object.
    Dative,
}

impl fmt::Display for ObjectCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ObjectCase::Accusative => "ACC",
            ObjectCase::Dative => "DAT",
        })
    }
}

/// Person, gender and number of a subject or object.
///
/// `gender` is `None` where the language does not distinguish it (first
/// person object suffixes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Agreement {
    pub person: Person,
    pub gender: Option<Gender>,
    pub number: Number,
}

impl Agreement {
    pub fn new(person: Person, gender: Gender, number: Number) -> Self {
        Self {
            person,
            gender: Some(gender),
            number,
        }
    }

    /// Every person × gender × number combination (first person included
    /// once per gender, as callers iterate subjects that way).
    pub fn all() -> impl Iterator<Item = Agreement> {
        Number::ALL.into_iter().flat_map(|number| {
            Person::ALL.into_iter().flat_map(move |person| {
                Gender::ALL
                    .into_iter()
                    .map(move |gender| Agreement::new(person, gender, number))
            })
        })
    }

    /// Check whether this is the first person singular.
    pub fn is_first_singular(&self) -> bool {
        self.person == Person::First && self.number == Number::Sg
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.person)?;
        if let Some(gender) = self.gender {
            write!(f, ".{gender}")?;
        }
        write!(f, ".{}", self.number)
    }
}

impl FromStr for Agreement {
    type Err = FeatureParseError;

    /// Parse `P.G.N` (e.g. `3.F.SG`) or, for the first person, `1.N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [p, g, n] => Ok(Agreement::new(p.parse()?, g.parse()?, n.parse()?)),
            [p, n] => Ok(Agreement {
                person: p.parse()?,
                gender: None,
                number: n.parse()?,
            }),
            _ => Err(FeatureParseError::Agreement(s.to_string())),
        }
    }
}

/// A grammatical feature, as carried by a morpheme and shown in its gloss.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Feature {
    Person(Person),
    Gender(Gender),
    Number(Number),
    Label(Label),
    Radical(Radical),
    /// Pronominal object agreement; the slot and its own person/gender/number.
    Object(ObjectCase, Agreement),
    /// Identity of a merged root morpheme, e.g. `√prs`.
    Root(String),
}

impl Feature {
    pub fn is_object(&self) -> bool {
        matches!(self, Feature::Object(..))
    }

    pub fn is_dative(&self) -> bool {
        matches!(self, Feature::Object(ObjectCase::Dative, _))
    }

    pub fn is_person(&self) -> bool {
        matches!(self, Feature::Person(_))
    }

    pub fn is_radical(&self) -> bool {
        matches!(self, Feature::Radical(_))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Person(p) => fmt::Display::fmt(p, f),
            Feature::Gender(g) => fmt::Display::fmt(g, f),
            Feature::Number(n) => fmt::Display::fmt(n, f),
            Feature::Label(l) => fmt::Display::fmt(l, f),
            Feature::Radical(r) => fmt::Display::fmt(r, f),
            Feature::Object(case, agreement) => write!(f, "{case}.{agreement}"),
            Feature::Root(root) => write!(f, "\u{221A}{root}"),
        }
    }
}

impl From<Person> for Feature {
    fn from(p: Person) -> Self {
        Feature::Person(p)
    }
}

impl From<Gender> for Feature {
    fn from(g: Gender) -> Self {
        Feature::Gender(g)
    }
}

impl From<Number> for Feature {
    fn from(n: Number) -> Self {
        Feature::Number(n)
    }
}

impl From<Label> for Feature {
    fn from(l: Label) -> Self {
        Feature::Label(l)
    }
}

impl From<Radical> for Feature {
    fn from(r: Radical) -> Self {
        Feature::Radical(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn gloss_notation() {
        assert_eq!(Person::FirstOrThird.to_string(), "1|3");
        assert_eq!(Stem::Sh.to_string(), "Š");
        assert_eq!(Label::Tan.to_string(), "tan");
        assert_eq!(Label::Impfv.to_string(), "IMPFV");
        assert_eq!(Radical::Second.to_string(), "R₂");
        assert_eq!(Feature::Root("prs".into()).to_string(), "√prs");
    }

    #[test]
    fn object_gloss_omits_missing_gender() {
        let acc = Feature::Object(
            ObjectCase::Accusative,
            Agreement::new(Person::Third, Gender::F, Number::Sg),
        );
        assert_eq!(acc.to_string(), "ACC.3.F.SG");
        let dat = Feature::Object(
            ObjectCase::Dative,
            Agreement {
                person: Person::First,
                gender: None,
                number: Number::Pl,
            },
        );
        assert_eq!(dat.to_string(), "DAT.1.PL");
    }

    #[test]
    fn equality_is_by_value() {
        let a = Feature::Object(
            ObjectCase::Dative,
            Agreement::new(Person::Second, Gender::M, Number::Sg),
        );
        let b = Feature::Object(
            ObjectCase::Dative,
            Agreement::new(Person::Second, Gender::M, Number::Sg),
        );
        assert_eq!(a, b);
        let set: HashSet<Feature> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(
            Feature::Object(
                ObjectCase::Accusative,
                Agreement::new(Person::Second, Gender::M, Number::Sg)
            ),
            Feature::Object(
                ObjectCase::Dative,
                Agreement::new(Person::Second, Gender::M, Number::Sg)
            ),
        );
    }

    #[test]
    fn parse_agreement() {
        assert_eq!(
            "3.F.SG".parse::<Agreement>(),
            Ok(Agreement::new(Person::Third, Gender::F, Number::Sg))
        );
        assert_eq!(
            "1.PL".parse::<Agreement>(),
            Ok(Agreement {
                person: Person::First,
                gender: None,
                number: Number::Pl
            })
        );
        assert!("4.F.SG".parse::<Agreement>().is_err());
        assert!("3".parse::<Agreement>().is_err());
    }

    #[test]
    fn parse_stem() {
        assert_eq!("Š".parse::<Stem>(), Ok(Stem::Sh));
        assert_eq!("Sh".parse::<Stem>(), Ok(Stem::Sh));
        assert!("X".parse::<Stem>().is_err());
    }

    #[test]
    fn all_agreements() {
        let all: Vec<Agreement> = Agreement::all().collect();
        assert_eq!(all.len(), 12);
        assert!(all.iter().all(|a| a.gender.is_some()));
        assert_eq!(all.iter().filter(|a| a.is_first_singular()).count(), 2);
    }

    #[test]
    fn feature_predicates() {
        assert!(Feature::Radical(Radical::First).is_radical());
        assert!(Feature::Person(Person::Third).is_person());
        assert!(!Feature::Label(Label::Vent).is_object());
        assert!(
            Feature::Object(
                ObjectCase::Dative,
                Agreement::new(Person::Third, Gender::M, Number::Pl)
            )
            .is_dative()
        );
        assert!(!Person::FirstOrThird.is_simple());
    }
}
