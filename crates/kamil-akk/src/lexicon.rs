// Built-in verb lexicon and the lexicon text format
//
// Format: one verb per line, `ROOT DURATIVE PERFECTIVE`, separated by
// whitespace. Blank lines and everything after `#` are ignored.
//
//     # root  durative  perfective
//     prs     a         u
//     ṣbt     a         a

use crate::KamilError;
use crate::verb::Verb;

/// Error type for lexicon parsing. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("line {line}: expected ROOT DURATIVE PERFECTIVE, got {text:?}")]
    Malformed { line: usize, text: String },

    #[error("line {line}: {source}")]
    InvalidVerb {
        line: usize,
        #[source]
        source: KamilError,
    },
}

/// Attested verbs with their durative and perfective theme vowels.
const BUILTIN: &[(&str, &str, &str)] = &[
    ("\u{02BE}gr", "a", "u"),
    ("\u{02BE}\u{1E2B}z", "a", "u"),
    ("hlk", "a", "i"),
    ("\u{02BE}mr", "a", "u"),
    ("bn\u{02BE}", "i", "i"),
    ("b\u{0161}\u{02BE}", "i", "i"),
    ("dwk", "a", "u"),
    ("\u{1E25}p\u{0161}", "a", "u"),
    ("\u{1E25}bb", "i", "i"),
    ("kwn", "a", "u"),
    ("k\u{0161}d", "a", "u"),
    ("k\u{0161}\u{0161}", "a", "u"),
    ("lq\u{1E25}", "a", "a"),
    ("mdd", "a", "u"),
    ("m\u{1E2B}\u{1E63}", "a", "a"),
    ("m\u{1E2B}r", "a", "u"),
    ("ndn", "i", "i"),
    ("nd\u{02BE}", "i", "i"),
    ("prs", "a", "u"),
    ("qb\u{02BE}", "i", "i"),
    ("qy\u{0161}", "a", "i"),
    ("\u{1E63}bt", "a", "a"),
    ("\u{0161}\u{02BE}m", "a", "a"),
    ("\u{0161}l\u{02BE}", "i", "i"),
    ("\u{0161}lm", "i", "i"),
    ("\u{0161}ql", "a", "u"),
    ("wbl", "a", "u"),
];

/// The built-in lexicon.
///
/// `alāku` is listed under `hlk`, the root the weak-consonant rules
/// special-case for its assimilating first radical.
pub fn default_lexicon() -> Vec<Verb> {
    BUILTIN
        .iter()
        .filter_map(|&(root, durative, perfective)| {
            Verb::new(root, durative, perfective)
                .inspect_err(|e| log::error!("built-in lexicon entry {root}: {e}"))
                .ok()
        })
        .collect()
}

/// Parse a lexicon in the text format.
pub fn parse_lexicon(text: &str) -> Result<Vec<Verb>, LexiconError> {
    let mut verbs = Vec::new();
    for (n, raw) in text.lines().enumerate() {
        let line = n + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let fields: Vec<&str> = content.split_whitespace().collect();
        let [root, durative, perfective] = fields[..] else {
            return Err(LexiconError::Malformed {
                line,
                text: content.to_string(),
            });
        };
        let verb = Verb::new(root, durative, perfective)
            .map_err(|source| LexiconError::InvalidVerb { line, source })?;
        verbs.push(verb);
    }
    Ok(verbs)
}
