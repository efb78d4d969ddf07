// kamil-paradigm: Paradigm tables.
//
// Prints one table per verb: a row per subject, with the durative,
// perfect and perfective in columns.
//
// Usage:
//   kamil-paradigm [-l LEXICON] [-s STEM] [ROOT DURATIVE PERFECTIVE]...
//
// Options:
//   -l, --lexicon PATH   Verb list (default: $KAMIL_LEXICON, then built-in)
//   -s, --stem STEM      G, D, Š (or Sh) or N; default G
//   -h, --help           Print help

use std::io::{self, Write};

use kamil_cli::{
    PARADIGM_COLUMNS, fatal, format_table, load_lexicon, paradigm_table, parse_lexicon_path,
    parse_verbs, take_option, wants_help,
};
use kamil_core::Stem;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = parse_lexicon_path(&args);

    if wants_help(&args) {
        println!("kamil-paradigm: Paradigm tables of Akkadian verbs.");
        println!();
        println!("Usage: kamil-paradigm [-l LEXICON] [-s STEM] [ROOT DURATIVE PERFECTIVE]...");
        println!();
        println!("If verbs are given as arguments, prints their paradigms.");
        println!("Otherwise prints the paradigm of every verb in the lexicon.");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Verb list, one ROOT DURATIVE PERFECTIVE per line");
        println!("  -s, --stem STEM      G, D, Š (or Sh) or N (default: G)");
        println!("  -h, --help           Print this help");
        return;
    }

    let (stem, args) = take_option(&args, "stem", "-s");
    let stem: Stem = match stem {
        Some(s) => s.parse().unwrap_or_else(|e| fatal(&format!("{e}"))),
        None => Stem::G,
    };

    let verbs = if args.is_empty() {
        load_lexicon(lexicon_path.as_deref())
    } else {
        parse_verbs(&args)
    }
    .unwrap_or_else(|e| fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for verb in &verbs {
        let mut rows = vec![PARADIGM_COLUMNS.map(String::from)];
        rows.extend(paradigm_table(verb, stem));
        let _ = writeln!(out, "{verb} {stem}");
        let _ = write!(out, "{}", format_table(&rows));
        let _ = writeln!(out);
    }
}
