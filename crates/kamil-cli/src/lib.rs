// kamil-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use kamil_akk::lexicon::{default_lexicon, parse_lexicon};
use kamil_akk::{Aspect, Decomposition, FormSpec, Infix, Verb};
use kamil_core::{Gender, Number, Person, Stem};

/// Environment variable naming a lexicon file.
pub const LEXICON_ENV: &str = "KAMIL_LEXICON";

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Remove `--NAME=VALUE`, `--NAME VALUE` or `-S VALUE` from `args`.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let long = format!("--{long}");
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if *arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--lexicon=PATH` or `-l PATH` argument from command line args.
///
/// Returns `(lexicon_path, remaining_args)`.
pub fn parse_lexicon_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "lexicon", "-l")
}

/// Remove a boolean `--NAME` flag from `args`, reporting whether it was there.
pub fn take_flag(args: &[String], name: &str) -> (bool, Vec<String>) {
    let flag = format!("--{name}");
    let present = args.iter().any(|a| *a == flag);
    (present, args.iter().filter(|a| **a != flag).cloned().collect())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// Load the verb lexicon.
///
/// Search order:
/// 1. `path` argument (if provided)
/// 2. `KAMIL_LEXICON` environment variable
/// 3. The built-in lexicon
pub fn load_lexicon(path: Option<&str>) -> Result<Vec<Verb>, String> {
    let path = path
        .map(PathBuf::from)
        .or_else(|| std::env::var(LEXICON_ENV).ok().map(PathBuf::from));
    let Some(path) = path else {
        return Ok(default_lexicon());
    };
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let verbs = parse_lexicon(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    log::debug!("loaded {} verbs from {}", verbs.len(), path.display());
    Ok(verbs)
}

/// Parse `ROOT DURATIVE PERFECTIVE` triples from positional arguments.
pub fn parse_verbs(args: &[String]) -> Result<Vec<Verb>, String> {
    if args.len() % 3 != 0 {
        return Err(format!(
            "expected ROOT DURATIVE PERFECTIVE triples, got {} argument(s)",
            args.len()
        ));
    }
    args.chunks(3)
        .map(|c| Verb::new(&c[0], &c[1], &c[2]).map_err(|e| e.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Paradigms
// ---------------------------------------------------------------------------

/// Column headers of [`paradigm_table`].
pub const PARADIGM_COLUMNS: [&str; 3] = ["durative", "perfect", "perfective"];

/// Subjects in table order: singular then plural, third person first, both
/// genders only where the forms can differ (2SG and 3PL).
pub fn paradigm_subjects() -> Vec<Option<(Person, Gender, Number)>> {
    let mut rows = Vec::new();
    for number in Number::ALL {
        for person in [Person::Third, Person::Second, Person::First] {
            let split = matches!(
                (person, number),
                (Person::Second, Number::Sg) | (Person::Third, Number::Pl)
            );
            let genders: &[Gender] = if split { &[Gender::M, Gender::F] } else { &[Gender::M] };
            rows.extend(genders.iter().map(|&g| Some((person, g, number))));
        }
        if number == Number::Sg {
            rows.push(None);
        }
    }
    rows
}

/// Durative, perfect (perfective with `-t-`) and perfective of every
/// subject, one row per subject and an empty row between the numbers.
///
/// A cell that cannot be formed is shown as `?`.
pub fn paradigm_table(verb: &Verb, stem: Stem) -> Vec<[String; 3]> {
    let cell = |aspect: Aspect, spec: FormSpec| match verb.finite_form(aspect, &spec) {
        Ok(d) => d.text(),
        Err(e) => {
            log::warn!("{verb} {stem} {aspect}: {e}");
            "?".to_string()
        }
    };
    paradigm_subjects()
        .into_iter()
        .map(|subject| match subject {
            Some((person, gender, number)) => {
                let spec = FormSpec::new(person, gender, number).stem(stem);
                [
                    cell(Aspect::Durative, spec.clone()),
                    cell(Aspect::Perfective, spec.clone().infix(Infix::T)),
                    cell(Aspect::Perfective, spec),
                ]
            }
            None => Default::default(),
        })
        .collect()
}

/// Left-align every column to its widest cell, measured in characters.
pub fn format_table<const N: usize>(rows: &[[String; N]]) -> String {
    let mut widths = [0usize; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Conjugation listing
// ---------------------------------------------------------------------------

/// One block of a conjugation listing: a stem and aspect, with the forms of
/// every subject. Subjects whose genders give the same analysis appear once.
#[derive(Debug)]
pub struct ConjugationBlock {
    pub stem: Stem,
    pub aspect: Aspect,
    pub infix: Option<Infix>,
    pub forms: Vec<Vec<Decomposition>>,
}

/// Every stem × subject for the durative, the perfective and the perfect,
/// with the mood and object choices of `template` applied to each.
pub fn conjugation(verb: &Verb, template: &FormSpec) -> Vec<ConjugationBlock> {
    let mut blocks = Vec::new();
    for stem in Stem::ALL {
        for (aspect, infix) in [
            (Aspect::Durative, None),
            (Aspect::Perfective, None),
            (Aspect::Perfective, Some(Infix::T)),
        ] {
            let mut forms = Vec::new();
            for number in Number::ALL {
                for person in Person::ALL {
                    let mut cell: Vec<Decomposition> = Vec::new();
                    for gender in Gender::ALL {
                        let spec = FormSpec {
                            person,
                            gender,
                            number,
                            stem,
                            infix,
                            ..template.clone()
                        };
                        match verb.finite_form(aspect, &spec) {
                            Ok(d) if !cell.iter().any(|c| c.gloss_key() == d.gloss_key()) => {
                                cell.push(d)
                            }
                            Ok(_) => {}
                            Err(e) => log::warn!("{verb} {stem} {aspect} {person}: {e}"),
                        }
                    }
                    forms.push(cell);
                }
            }
            blocks.push(ConjugationBlock {
                stem,
                aspect,
                infix,
                forms,
            });
        }
    }
    blocks
}

// ---------------------------------------------------------------------------
// Glossing
// ---------------------------------------------------------------------------

/// Check whether any candidate only matched `word` after folding vowel
/// length or gemination.
pub fn has_fuzzy_match(word: &str, candidates: &[&Decomposition]) -> bool {
    candidates.iter().any(|d| d.text() != word)
}
