//! Lazy reverse index from surface text to decompositions.
//!
//! Generating every form of every verb up front is far too much (hundreds of
//! thousands of forms per verb once objects and moods are crossed in). The
//! index therefore registers only the plain forms eagerly. For each plain
//! form it also records a *deferred key*, the longest common prefix of a
//! few of its object-suffixed variants. When an observed word starts with a
//! deferred key, the bases behind that key are expanded in full, once.
//!
//! All lookup keys fold vowel length, so transliterations that leave long
//! vowels unmarked still match. A second mapping also folds gemination.
//!
//! [`ReverseIndex`] needs `&mut self` to load candidates; share one between
//! threads behind a lock.

use std::collections::{BTreeMap, BTreeSet};

use hashbrown::{HashMap, HashSet};
use log::{debug, warn};

use kamil_core::character::{fold_gemination, fold_vowel_length, nfc, normalize_n_assimilation};
use kamil_core::{Agreement, Feature, Gender, Number, Person, Stem};

use crate::decomposition::Decomposition;
use crate::verb::{Aspect, FormSpec, Infix, Verb};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`ReverseIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Infix variants registered for each aspect.
    pub infixes: Vec<Option<Infix>>,

    /// Direct objects whose variants of a plain form determine its deferred
    /// key.
    pub key_sample: Vec<Agreement>,

    /// When true, expansion also produces forms carrying both a dative and
    /// an accusative suffix. Off by default: each object slot is expanded
    /// on its own.
    pub combine_objects: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            infixes: vec![None, Some(Infix::T), Some(Infix::Tan)],
            key_sample: Person::ALL
                .into_iter()
                .map(|person| Agreement::new(person, Gender::F, Number::Sg))
                .collect(),
            combine_objects: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Unit of deferred expansion: one aspect and infix of one verb, across
/// every stem, subject, mood and object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Base {
    verb: usize,
    aspect: Aspect,
    infix: Option<Infix>,
}

/// Key for prefix matching: n-assimilation normalized, vowel length folded.
fn prefix_key(text: &str) -> String {
    fold_vowel_length(&normalize_n_assimilation(&nfc(text)))
}

/// Key of the gemination-folded mapping.
pub fn gemination_key(text: &str) -> String {
    fold_gemination(&prefix_key(text))
}

/// Longest common prefix, by characters.
fn common_prefix(texts: &[String]) -> Option<String> {
    let (first, rest) = texts.split_first()?;
    let mut prefix: Vec<char> = first.chars().collect();
    for text in rest {
        let shared = prefix
            .iter()
            .zip(text.chars())
            .take_while(|(a, b)| **a == *b)
            .count();
        prefix.truncate(shared);
    }
    Some(prefix.into_iter().collect())
}

/// Object agreements as the suffixes distinguish them: the first person
/// once per number, the others once per gender.
fn object_agreements() -> Vec<Agreement> {
    let mut agreements = Vec::with_capacity(10);
    for number in Number::ALL {
        for person in Person::ALL {
            if person == Person::First {
                agreements.push(Agreement {
                    person,
                    gender: None,
                    number,
                });
            } else {
                agreements.extend(Gender::ALL.map(|gender| Agreement::new(person, gender, number)));
            }
        }
    }
    agreements
}

// ---------------------------------------------------------------------------
// ReverseIndex
// ---------------------------------------------------------------------------

/// Surface text to decomposition index over a set of verbs.
#[derive(Debug, Default)]
pub struct ReverseIndex {
    options: IndexOptions,
    verbs: Vec<Verb>,
    /// Surface text to gloss key to decomposition.
    forms_to_glosses: HashMap<String, BTreeMap<String, Decomposition>>,
    folded_vowels: HashMap<String, BTreeSet<String>>,
    folded_gemination: HashMap<String, BTreeSet<String>>,
    deferred: HashMap<String, HashSet<Base>>,
    expanded: HashSet<Base>,
}

impl ReverseIndex {
    pub fn new(options: IndexOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Number of distinct surface texts indexed so far.
    pub fn len(&self) -> usize {
        self.forms_to_glosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms_to_glosses.is_empty()
    }

    /// Number of deferred keys not yet expanded.
    pub fn pending_keys(&self) -> usize {
        self.deferred.len()
    }

    /// Add one decomposition. Registering the same analysis twice is a no-op.
    pub fn register(&mut self, decomposition: Decomposition) {
        let text = decomposition.text();
        self.folded_vowels
            .entry(fold_vowel_length(&text))
            .or_default()
            .insert(text.clone());
        self.folded_gemination
            .entry(gemination_key(&text))
            .or_default()
            .insert(text.clone());
        self.forms_to_glosses
            .entry(text)
            .or_default()
            .entry(decomposition.gloss_key())
            .or_insert(decomposition);
    }

    /// Register the plain forms of `verbs` and their deferred keys.
    ///
    /// A cell whose synthesis fails is logged and skipped.
    pub fn register_all(&mut self, verbs: &[Verb]) {
        let before = self.len();
        for verb in verbs {
            if self.verbs.contains(verb) {
                continue;
            }
            let index = self.verbs.len();
            self.verbs.push(verb.clone());
            for aspect in Aspect::ALL {
                for infix in self.options.infixes.clone() {
                    let base = Base {
                        verb: index,
                        aspect,
                        infix,
                    };
                    self.register_base(verb, base);
                }
            }
        }
        debug!(
            "registered {} verbs: {} new surface forms, {} deferred keys",
            verbs.len(),
            self.len() - before,
            self.deferred.len()
        );
    }

    fn register_base(&mut self, verb: &Verb, base: Base) {
        for stem in Stem::ALL {
            for number in Number::ALL {
                for person in Person::ALL {
                    for gender in Gender::ALL {
                        let spec = FormSpec::new(person, gender, number)
                            .stem(stem)
                            .infix(base.infix);
                        match verb.finite_form(base.aspect, &spec) {
                            Ok(d) => self.register(d),
                            Err(e) => {
                                warn!("skipping {verb} {} {spec:?}: {e}", base.aspect);
                                continue;
                            }
                        }
                        let variants: Vec<String> = self
                            .options
                            .key_sample
                            .iter()
                            .filter_map(|&object| {
                                let spec = spec.clone().direct_object(object);
                                verb.finite_form(base.aspect, &spec).ok()
                            })
                            .map(|d| prefix_key(&d.text()))
                            .collect();
                        if let Some(key) = common_prefix(&variants).filter(|k| !k.is_empty()) {
                            self.deferred.entry(key).or_default().insert(base);
                        }
                    }
                }
            }
        }
    }

    /// Expand the bases behind the longest deferred key that prefixes
    /// `word`. The key is consumed, so each key expands at most once.
    pub fn load_candidates(&mut self, word: &str) {
        let key = prefix_key(word);
        let ends: Vec<usize> = key.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
        for &end in ends.iter().rev() {
            let Some(bases) = self.deferred.remove(&key[..end]) else {
                continue;
            };
            debug!("expanding {} base(s) under {:?}", bases.len(), &key[..end]);
            for base in bases {
                if self.expanded.insert(base) {
                    self.expand(base);
                }
            }
            return;
        }
    }

    fn object_slots(&self) -> Vec<(Option<Agreement>, Option<Agreement>)> {
        let agreements = object_agreements();
        let mut slots = vec![(None, None)];
        slots.extend(agreements.iter().map(|&a| (None, Some(a))));
        slots.extend(agreements.iter().map(|&a| (Some(a), None)));
        if self.options.combine_objects {
            for &indirect in &agreements {
                slots.extend(agreements.iter().map(|&direct| (Some(indirect), Some(direct))));
            }
        }
        slots
    }

    fn expand(&mut self, base: Base) {
        let Some(verb) = self.verbs.get(base.verb).cloned() else {
            return;
        };
        let slots = self.object_slots();
        let before = self.len();
        for stem in Stem::ALL {
            for number in Number::ALL {
                for person in Person::ALL {
                    for gender in Gender::ALL {
                        for connective in [false, true] {
                            for ventive in [false, true] {
                                let moods: &[bool] = if ventive { &[false] } else { &[false, true] };
                                for &subjunctive in moods {
                                    for &(indirect, direct) in &slots {
                                        let spec = FormSpec::new(person, gender, number)
                                            .stem(stem)
                                            .infix(base.infix)
                                            .connective(connective)
                                            .ventive(ventive)
                                            .subjunctive(subjunctive)
                                            .indirect_object(indirect)
                                            .direct_object(direct);
                                        match verb.finite_form(base.aspect, &spec) {
                                            Ok(d) => self.register(d),
                                            Err(e) => {
                                                warn!("skipping {verb} {} {spec:?}: {e}", base.aspect)
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        debug!(
            "expanded {verb} {} {:?}: {} new surface forms",
            base.aspect,
            base.infix,
            self.len() - before
        );
    }

    /// Analyses whose surface text is exactly `text`.
    pub fn forms(&self, text: &str) -> Option<&BTreeMap<String, Decomposition>> {
        self.forms_to_glosses.get(text)
    }

    /// Surface texts whose vowel-length-folded form is `key`.
    pub fn forms_with_folded_vowels(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.folded_vowels.get(key)
    }

    /// Surface texts under a [`gemination_key`].
    pub fn forms_with_folded_gemination(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.folded_gemination.get(key)
    }

    /// Candidate analyses of an observed word.
    ///
    /// Loads deferred forms as needed, then returns every analysis whose
    /// surface text matches `word` once vowel length and gemination are
    /// folded. Exact surface matches come first.
    pub fn gloss(&mut self, word: &str) -> Vec<&Decomposition> {
        let word = normalize_n_assimilation(&nfc(word));
        self.load_candidates(&word);
        let Some(forms) = self.folded_gemination.get(&gemination_key(&word)) else {
            return Vec::new();
        };
        let mut forms: Vec<&String> = forms.iter().collect();
        forms.sort_by_key(|form| **form != word);
        forms
            .into_iter()
            .filter_map(|form| self.forms_to_glosses.get(form))
            .flat_map(BTreeMap::values)
            .collect()
    }
}

/// For each candidate, the features no other candidate carries.
///
/// This is what tells apart otherwise identical spellings, e.g. the
/// subjunctive singular and the plural of `ibannû`.
pub fn distinguishing_functions(candidates: &[&Decomposition]) -> Vec<BTreeSet<Feature>> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            candidate
                .functions()
                .iter()
                .filter(|f| {
                    !candidates
                        .iter()
                        .enumerate()
                        .any(|(j, other)| j != i && other.functions().contains(f))
                })
                .cloned()
                .collect()
        })
        .collect()
}
