// Personal, modal and pronominal affixes of the finite verb
//
// Each function returns the morpheme for one slot of the template, tagged
// with the features it expresses. Person values are assumed to be simple
// (1, 2 or 3); the synthesizer rejects `1|3` before reaching these tables.

use kamil_core::{Agreement, Feature, Gender, Label, Morpheme, Number, ObjectCase, Person};

// ---------------------------------------------------------------------------
// Subject agreement
// ---------------------------------------------------------------------------

/// Personal prefix of the G and N stems: `a-`/`ni-`, `ta-`, `i-`.
pub fn personal_prefix(person: Person, number: Number) -> Morpheme {
    match person {
        Person::First => Morpheme::new(
            if number == Number::Sg { "a" } else { "ni" },
            [Feature::Person(person), Feature::Number(number)],
        ),
        Person::Second => Morpheme::new("ta", [Feature::Person(person)]),
        Person::Third | Person::FirstOrThird => Morpheme::new("i", [Feature::Person(person)]),
    }
}

/// Personal prefix of the D and Š stems (and of some I-w roots): `u-`,
/// `tu-`, `nu-`.
///
/// `u-` is shared by the first and third singular, so it is glossed `1|3`.
pub fn personal_prefix_d(person: Person, number: Number) -> Morpheme {
    match (person, number) {
        (Person::First, Number::Pl) => {
            Morpheme::new("nu", [Feature::Person(person), Feature::Number(number)])
        }
        (Person::Second, _) => Morpheme::new("tu", [Feature::Person(person)]),
        (_, Number::Pl) => Morpheme::new("u", [Feature::Person(person), Feature::Number(number)]),
        (_, Number::Sg) => Morpheme::new(
            "u",
            [Feature::Person(Person::FirstOrThird), Feature::Number(number)],
        ),
    }
}

/// Personal suffix: `-ī`, `-ā`, `-ū` or a silent morpheme.
///
/// `d_prefix` tells whether the form took the `u-` prefix series, in which
/// case a silent first or third singular suffix is glossed `1|3`.
pub fn personal_suffix(person: Person, gender: Gender, number: Number, d_prefix: bool) -> Morpheme {
    let pgn = [
        Feature::Person(person),
        Feature::Gender(gender),
        Feature::Number(number),
    ];
    let pn = [Feature::Person(person), Feature::Number(number)];
    match (person, gender, number) {
        (Person::Second, Gender::F, Number::Sg) => Morpheme::new("\u{012B}", pgn),
        (Person::Second, _, Number::Pl) => Morpheme::new("\u{0101}", pn),
        (Person::Third, Gender::F, Number::Pl) => Morpheme::new("\u{0101}", pgn),
        (Person::Third, Gender::M, Number::Pl) => Morpheme::new("\u{016B}", pgn),
        _ if d_prefix
            && number == Number::Sg
            && matches!(person, Person::First | Person::Third) =>
        {
            Morpheme::silent([Feature::Person(Person::FirstOrThird), Feature::Number(number)])
        }
        (Person::First, _, _) => Morpheme::silent([Feature::Person(person)]),
        (Person::Second, _, Number::Sg) => Morpheme::silent(pgn),
        _ => Morpheme::silent(pn),
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

pub fn subjunctive() -> Morpheme {
    Morpheme::new("u", [Feature::Label(Label::Subj)])
}

/// Ventive: `-nim` after a plural suffix, `-m` after `-ī`, `-am` otherwise.
pub fn ventive(person: Person, gender: Gender, number: Number) -> Morpheme {
    let text = if number == Number::Pl && person != Person::First {
        "nim"
    } else if person == Person::Second && gender == Gender::F {
        "m"
    } else {
        "am"
    };
    Morpheme::new(text, [Feature::Label(Label::Vent)])
}

pub fn connective() -> Morpheme {
    Morpheme::new("ma", [Feature::Label(Label::Conj)])
}

// ---------------------------------------------------------------------------
// Pronominal objects
// ---------------------------------------------------------------------------

/// Object agreement as glossed: the first person has no gender distinction.
fn object_feature(case: ObjectCase, object: Agreement) -> Feature {
    let gender = match object.person {
        Person::First => None,
        _ => object.gender,
    };
    Feature::Object(
        case,
        Agreement {
            person: object.person,
            gender,
            number: object.number,
        },
    )
}

/// Accusative (direct object) suffix.
pub fn accusative(object: Agreement) -> Morpheme {
    let feminine = object.gender == Some(Gender::F);
    let text = match (object.person, object.number) {
        (Person::Second, Number::Sg) if feminine => "ki",
        (Person::Second, Number::Sg) => "ka",
        (Person::Third, Number::Sg) if feminine => "\u{0161}i",
        (Person::Third, Number::Sg) => "\u{0161}u",
        (Person::Second, Number::Pl) if feminine => "kin\u{0101}ti",
        (Person::Second, Number::Pl) => "kun\u{016B}ti",
        (Person::Third, Number::Pl) if feminine => "\u{0161}in\u{0101}ti",
        (Person::Third, Number::Pl) => "\u{0161}un\u{016B}ti",
        (_, Number::Sg) => "ni",
        (_, Number::Pl) => "ni\u{0101}ti",
    };
    Morpheme::new(text, [object_feature(ObjectCase::Accusative, object)])
}

/// Dative (indirect object) suffix.
///
/// Returns `None` for the first singular, which is carried by the ventive
/// alone.
pub fn dative(object: Agreement) -> Option<Morpheme> {
    let feminine = object.gender == Some(Gender::F);
    let text = match (object.person, object.number) {
        (Person::Second, Number::Sg) if feminine => "kim",
        (Person::Second, Number::Sg) => "kum",
        (Person::Third, Number::Sg) if feminine => "\u{0161}im",
        (Person::Third, Number::Sg) => "\u{0161}um",
        (Person::Second, Number::Pl) if feminine => "kin\u{0101}\u{0161}im",
        (Person::Second, Number::Pl) => "kun\u{016B}\u{0161}im",
        (Person::Third, Number::Pl) if feminine => "\u{0161}in\u{0101}\u{0161}im",
        (Person::Third, Number::Pl) => "\u{0161}un\u{016B}\u{0161}im",
        (_, Number::Sg) => return None,
        (_, Number::Pl) => "ni\u{0101}\u{0161}im",
    };
    Some(Morpheme::new(text, [object_feature(ObjectCase::Dative, object)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feminine(person: Person, number: Number) -> Agreement {
        Agreement::new(person, Gender::F, number)
    }

    #[test]
    fn d_prefix_glosses_ambiguous_singular() {
        let m = personal_prefix_d(Person::Third, Number::Sg);
        assert_eq!(m.text, "u");
        assert_eq!(m.gloss(), "1|3.SG");
        assert_eq!(personal_prefix_d(Person::First, Number::Pl).text, "nu");
        assert_eq!(personal_prefix_d(Person::Third, Number::Pl).gloss(), "3.PL");
    }

    #[test]
    fn g_prefixes() {
        assert_eq!(personal_prefix(Person::First, Number::Sg).text, "a");
        assert_eq!(personal_prefix(Person::First, Number::Pl).text, "ni");
        assert_eq!(personal_prefix(Person::Second, Number::Pl).gloss(), "2");
    }

    #[test]
    fn silent_suffix_glosses() {
        let m = personal_suffix(Person::Third, Gender::M, Number::Sg, false);
        assert_eq!(m.text, "");
        assert_eq!(m.gloss(), "3.SG");
        let m = personal_suffix(Person::Third, Gender::M, Number::Sg, true);
        assert_eq!(m.gloss(), "1|3.SG");
        let m = personal_suffix(Person::Second, Gender::M, Number::Sg, false);
        assert_eq!(m.gloss(), "2.M.SG");
        let m = personal_suffix(Person::First, Gender::F, Number::Pl, false);
        assert_eq!(m.gloss(), "1");
    }

    #[test]
    fn overt_suffixes() {
        assert_eq!(personal_suffix(Person::Second, Gender::F, Number::Sg, false).text, "ī");
        assert_eq!(personal_suffix(Person::Second, Gender::M, Number::Pl, false).gloss(), "2.PL");
        assert_eq!(personal_suffix(Person::Third, Gender::M, Number::Pl, false).text, "ū");
        assert_eq!(personal_suffix(Person::Third, Gender::F, Number::Pl, false).text, "ā");
    }

    #[test]
    fn ventive_allomorphs() {
        assert_eq!(ventive(Person::Third, Gender::M, Number::Pl).text, "nim");
        assert_eq!(ventive(Person::First, Gender::M, Number::Pl).text, "am");
        assert_eq!(ventive(Person::Second, Gender::F, Number::Sg).text, "m");
        assert_eq!(ventive(Person::Third, Gender::F, Number::Sg).text, "am");
    }

    #[test]
    fn first_person_objects_drop_gender() {
        let m = accusative(feminine(Person::First, Number::Sg));
        assert_eq!(m.text, "ni");
        assert_eq!(m.gloss(), "ACC.1.SG");
        assert!(dative(feminine(Person::First, Number::Sg)).is_none());
        let m = dative(feminine(Person::First, Number::Pl));
        assert_eq!(m.map(|m| m.text), Some("niāšim".to_string()));
    }

    #[test]
    fn object_tables() {
        assert_eq!(accusative(feminine(Person::Third, Number::Pl)).text, "šināti");
        assert_eq!(
            accusative(Agreement::new(Person::Second, Gender::M, Number::Pl)).text,
            "kunūti"
        );
        let m = dative(Agreement::new(Person::Third, Gender::M, Number::Sg));
        assert_eq!(m.as_ref().map(Morpheme::gloss), Some("DAT.3.M.SG".to_string()));
    }
}
