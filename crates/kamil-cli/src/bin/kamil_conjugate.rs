// kamil-conjugate: Full conjugation listing of one verb.
//
// Prints the durative, perfective and perfect of every stem for every
// subject, each form as its morpheme breakdown, surface text and gloss.
//
// Usage:
//   kamil-conjugate [OPTIONS] ROOT DURATIVE PERFECTIVE
//
// Options:
//   --subj          Subjunctive
//   --conj          Connective -ma
//   --vent          Ventive
//   --acc P.G.N     Direct object (e.g. 3.M.SG)
//   --dat P.G.N     Indirect object
//   -h, --help      Print help

use std::io::{self, Write};

use kamil_akk::FormSpec;
use kamil_cli::{conjugation, fatal, parse_verbs, take_flag, take_option, wants_help};
use kamil_core::{Agreement, Gender, Number, Person};

fn parse_object(value: Option<String>, option: &str) -> Option<Agreement> {
    value.map(|v| {
        v.parse()
            .unwrap_or_else(|e| fatal(&format!("{option}: {e}")))
    })
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wants_help(&args) {
        println!("kamil-conjugate: Conjugation of an Akkadian verb.");
        println!();
        println!("Usage: kamil-conjugate [OPTIONS] ROOT DURATIVE PERFECTIVE");
        println!();
        println!("ROOT is three consonants (e.g. prs); DURATIVE and PERFECTIVE are");
        println!("the theme vowels (e.g. a u).");
        println!();
        println!("Options:");
        println!("  --subj          Subjunctive");
        println!("  --conj          Connective -ma");
        println!("  --vent          Ventive");
        println!("  --acc P.G.N     Direct object (e.g. 3.M.SG, 1.SG)");
        println!("  --dat P.G.N     Indirect object");
        println!("  -h, --help      Print this help");
        return;
    }

    let (subjunctive, args) = take_flag(&args, "subj");
    let (connective, args) = take_flag(&args, "conj");
    let (ventive, args) = take_flag(&args, "vent");
    let (acc, args) = take_option(&args, "acc", "--acc");
    let (dat, args) = take_option(&args, "dat", "--dat");

    let verbs = parse_verbs(&args).unwrap_or_else(|e| fatal(&e));
    let [verb] = verbs.as_slice() else {
        fatal("expected exactly one ROOT DURATIVE PERFECTIVE");
    };

    let template = FormSpec::new(Person::Third, Gender::M, Number::Sg)
        .subjunctive(subjunctive)
        .connective(connective)
        .ventive(ventive)
        .direct_object(parse_object(acc, "--acc"))
        .indirect_object(parse_object(dat, "--dat"));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let _ = writeln!(out, "{verb}");
    for block in conjugation(verb, &template) {
        let infix = block.infix.map(|i| format!(" {i}")).unwrap_or_default();
        let _ = writeln!(out, "=== {} {}{infix}", block.stem, block.aspect);
        for cell in &block.forms {
            for form in cell {
                let _ = writeln!(out, "{form}");
            }
            let _ = writeln!(out, "---");
        }
    }
}
