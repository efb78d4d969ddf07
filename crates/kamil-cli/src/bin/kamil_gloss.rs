// kamil-gloss: Gloss transliterated verb forms.
//
// Reads words (one per line, or whitespace separated) and prints every
// analysis the reverse index finds for each. Candidates that only match
// after folding vowel length or gemination are marked `~`; where several
// analyses remain, the features telling them apart follow `^--`.
//
// Usage:
//   kamil-gloss [-l LEXICON] [--json] [WORD...]
//
// Options:
//   -l, --lexicon PATH   Verb list (default: $KAMIL_LEXICON, then built-in)
//   --json               One JSON object per word
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use kamil_akk::{Decomposition, IndexOptions, ReverseIndex, distinguishing_functions};
use kamil_cli::{
    fatal, has_fuzzy_match, load_lexicon, parse_lexicon_path, take_flag, wants_help,
};
use kamil_core::character::nfc;

/// Undo common transliteration conventions: a typographic apostrophe for
/// aleph and `<…>` around restored signs.
fn clean(word: &str) -> String {
    nfc(&word.replace('\u{2019}', "\u{02BE}").replace(['<', '>'], ""))
}

fn print_word(
    word: &str,
    candidates: &[&Decomposition],
    json: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    if json {
        let value = serde_json::json!({
            "word": word,
            "analyses": candidates
                .iter()
                .map(|d| serde_json::json!({
                    "text": d.text(),
                    "reconstruction": d.reconstruction(),
                    "morphemes": d.object_language(),
                    "gloss": d.gloss(),
                    "decomposition": d,
                }))
                .collect::<Vec<_>>(),
        });
        return writeln!(out, "{value}");
    }

    writeln!(out, "{word}")?;
    if candidates.is_empty() {
        return writeln!(out, "   (no analysis)");
    }
    if has_fuzzy_match(word, candidates) {
        writeln!(out, "   ~")?;
    }
    let distinguishing = distinguishing_functions(candidates);
    for (candidate, features) in candidates.iter().zip(&distinguishing) {
        for line in candidate.to_string().lines() {
            writeln!(out, "   {line}")?;
        }
        if candidates.len() > 1 {
            let features: Vec<String> = features.iter().map(ToString::to_string).collect();
            writeln!(out, "   ^-- {}", features.join(" "))?;
        }
    }
    writeln!(out)
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = parse_lexicon_path(&args);

    if wants_help(&args) {
        println!("kamil-gloss: Gloss Akkadian verb forms.");
        println!();
        println!("Usage: kamil-gloss [-l LEXICON] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, glosses each word.");
        println!("Otherwise reads words from stdin.");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Verb list, one ROOT DURATIVE PERFECTIVE per line");
        println!("  --json               Print one JSON object per word");
        println!("  -h, --help           Print this help");
        return;
    }

    let (json, args) = take_flag(&args, "json");
    let verbs = load_lexicon(lexicon_path.as_deref()).unwrap_or_else(|e| fatal(&e));

    let mut index = ReverseIndex::new(IndexOptions::default());
    index.register_all(&verbs);
    log::info!("indexed {} forms of {} verbs", index.len(), verbs.len());

    let words: Vec<String> = if args.is_empty() {
        let mut words = Vec::new();
        for line in io::stdin().lock().lines() {
            match line {
                Ok(l) => words.extend(l.split_whitespace().map(clean)),
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            }
        }
        words
    } else {
        args.iter().map(|a| clean(a)).collect()
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut ambiguous = 0;
    let mut unknown = 0;

    for word in words.iter().filter(|w| !w.is_empty()) {
        let candidates = index.gloss(word);
        match candidates.len() {
            0 => unknown += 1,
            1 => {}
            _ => ambiguous += 1,
        }
        if let Err(e) = print_word(word, &candidates, json, &mut out) {
            fatal(&format!("writing output: {e}"));
        }
    }
    let _ = out.flush();

    eprintln!(
        "Glossed {} words: {ambiguous} ambiguous, {unknown} without analysis",
        words.len()
    );
}
