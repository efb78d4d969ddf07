//! Attested paradigm forms, checked end to end through synthesis and the
//! sound changes.
//!
//! Run: cargo test -p kamil-akk --test paradigms

use kamil_akk::{Aspect, FormSpec, Infix, Verb};
use kamil_core::{Agreement, Gender, Number, Person, Stem};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn verb(root: &str, durative: &str, perfective: &str) -> Verb {
    Verb::new(root, durative, perfective).unwrap()
}

fn spec(person: Person, gender: Gender, number: Number) -> FormSpec {
    FormSpec::new(person, gender, number)
}

fn third_sg() -> FormSpec {
    spec(Person::Third, Gender::M, Number::Sg)
}

fn third_pl() -> FormSpec {
    spec(Person::Third, Gender::M, Number::Pl)
}

fn text(verb: &Verb, aspect: Aspect, spec: &FormSpec) -> String {
    verb.finite_form(aspect, spec).unwrap().text()
}

fn durative(verb: &Verb, spec: &FormSpec) -> String {
    text(verb, Aspect::Durative, spec)
}

fn perfective(verb: &Verb, spec: &FormSpec) -> String {
    text(verb, Aspect::Perfective, spec)
}

fn him() -> Agreement {
    Agreement::new(Person::Third, Gender::M, Number::Sg)
}

// ---------------------------------------------------------------------------
// Strong verbs
// ---------------------------------------------------------------------------

#[test]
fn prs_g_stem() {
    let prs = verb("prs", "a", "u");
    assert_eq!(durative(&prs, &third_sg()), "iparras");
    assert_eq!(
        durative(&prs, &spec(Person::Third, Gender::F, Number::Sg)),
        "iparras"
    );
    assert_eq!(perfective(&prs, &third_sg()), "iprus");
    assert_eq!(perfective(&prs, &third_pl()), "iprusū");
    assert_eq!(
        durative(&prs, &spec(Person::Second, Gender::F, Number::Sg)),
        "taparrasī"
    );
    assert_eq!(
        durative(&prs, &spec(Person::First, Gender::M, Number::Pl)),
        "niparras"
    );
    assert_eq!(
        perfective(&prs, &spec(Person::First, Gender::F, Number::Sg)),
        "aprus"
    );
}

#[test]
fn prs_derived_stems() {
    let prs = verb("prs", "a", "u");
    assert_eq!(durative(&prs, &third_sg().stem(Stem::D)), "uparras");
    assert_eq!(perfective(&prs, &third_sg().stem(Stem::D)), "uparris");
    assert_eq!(durative(&prs, &third_sg().stem(Stem::Sh)), "ušapras");
    assert_eq!(perfective(&prs, &third_sg().stem(Stem::Sh)), "ušapris");
    assert_eq!(durative(&prs, &third_sg().stem(Stem::N)), "ipparras");
    assert_eq!(perfective(&prs, &third_sg().stem(Stem::N)), "ipparis");
}

#[test]
fn n_stem_syncope() {
    let prs = verb("prs", "a", "u");
    assert_eq!(perfective(&prs, &third_pl().stem(Stem::N)), "ipparsū");
}

#[test]
fn t_infix() {
    let prs = verb("prs", "a", "u");
    assert_eq!(perfective(&prs, &third_sg().infix(Infix::T)), "iptaras");
    let sbt = verb("ṣbt", "a", "a");
    assert_eq!(perfective(&sbt, &third_sg().infix(Infix::T)), "iṣṣabat");
}

#[test]
fn n_stem_tan_keeps_radical_n() {
    let ndn = verb("ndn", "i", "i");
    assert_eq!(
        perfective(&ndn, &third_sg().stem(Stem::N).infix(Infix::Tan)),
        "ittandin"
    );
}

#[test]
fn i_n_verbs() {
    let ndn = verb("ndn", "i", "i");
    assert_eq!(durative(&ndn, &third_sg()), "inaddin");
    assert_eq!(perfective(&ndn, &third_sg()), "iddin");
}

// ---------------------------------------------------------------------------
// Suffixes
// ---------------------------------------------------------------------------

#[test]
fn object_suffixes() {
    let sbt = verb("ṣbt", "a", "a");
    assert_eq!(perfective(&sbt, &third_sg().direct_object(him())), "iṣbassu");
    let prs = verb("prs", "a", "u");
    assert_eq!(durative(&prs, &third_sg().direct_object(him())), "iparrassu");
    assert_eq!(perfective(&prs, &third_sg().indirect_object(him())), "iprussum");
}

#[test]
fn ventive_assimilates_before_object() {
    let prs = verb("prs", "a", "u");
    assert_eq!(
        perfective(&prs, &third_sg().ventive(true).direct_object(him())),
        "iprusaššu"
    );
    assert_eq!(perfective(&prs, &third_pl().ventive(true)), "iprusūnim");
}

#[test]
fn mood_and_connective() {
    let prs = verb("prs", "a", "u");
    assert_eq!(perfective(&prs, &third_sg().subjunctive(true)), "iprusu");
    assert_eq!(perfective(&prs, &third_sg().connective(true)), "iprusma");
    assert_eq!(
        perfective(&prs, &third_sg().subjunctive(true).connective(true)),
        "iprusūma"
    );
}

#[test]
fn first_singular_object_is_ventive() {
    let prs = verb("prs", "a", "u");
    let me = Agreement::new(Person::First, Gender::M, Number::Sg);
    let plain = prs
        .perfective(&third_sg().subjunctive(true).direct_object(me))
        .unwrap();
    let ventive = prs
        .perfective(&third_sg().ventive(true).direct_object(me))
        .unwrap();
    assert_eq!(plain, ventive);
    assert_eq!(plain.text(), "iprusanni");
}

// ---------------------------------------------------------------------------
// Weak verbs
// ---------------------------------------------------------------------------

#[test]
fn first_weak() {
    let ahz = verb("ʾḫz", "a", "u");
    assert_eq!(durative(&ahz, &third_sg()), "iḫḫaz");
    assert_eq!(perfective(&ahz, &third_sg()), "īḫuz");
}

#[test]
fn e_colouring() {
    let hps = verb("ḥpš", "a", "u");
    assert_eq!(durative(&hps, &third_sg()), "ippeš");
    assert_eq!(perfective(&hps, &third_sg()), "īpuš");
    let lqh = verb("lqḥ", "a", "a");
    assert_eq!(durative(&lqh, &third_sg()), "ileqqe");
    assert_eq!(perfective(&lqh, &third_sg()), "ilqe");
    assert_eq!(perfective(&lqh, &third_pl()), "ilqû");
}

#[test]
fn first_w() {
    let wbl = verb("wbl", "a", "i");
    assert_eq!(durative(&wbl, &third_sg()), "ubbal");
    assert_eq!(perfective(&wbl, &third_sg()), "ūbil");
    assert_eq!(durative(&wbl, &third_pl()), "ubbalū");
}

#[test]
fn first_w_n_stem_tan_keeps_contracted_root_whole() {
    let wrd = verb("wrd", "i", "i");
    let spec = spec(Person::First, Gender::M, Number::Sg)
        .stem(Stem::N)
        .infix(Infix::Tan);
    let d = wrd.durative(&spec).unwrap();
    assert_eq!(d.object_language(), "e-t-tenêrid-∅");
    assert_eq!(d.gloss(), "1.SG-PASS-√wrd.tan.IMPFV-1");
    assert!(d.morphemes().iter().all(|m| m.infixes.is_empty()));
}

#[test]
fn middle_weak() {
    let kwn = verb("kwn", "a", "u");
    assert_eq!(durative(&kwn, &third_sg()), "ikân");
    assert_eq!(perfective(&kwn, &third_sg()), "ikūn");
    assert_eq!(durative(&kwn, &third_sg().stem(Stem::D)), "ukān");
    assert_eq!(perfective(&kwn, &third_sg().stem(Stem::D)), "ukīn");
    let dwk = verb("dwk", "a", "u");
    assert_eq!(durative(&dwk, &third_sg()), "idâk");
    let qys = verb("qyš", "a", "i");
    assert_eq!(durative(&qys, &third_sg()), "iqīaš");
    assert_eq!(perfective(&qys, &third_sg()), "iqīš");
    let sal = verb("šʾl", "a", "a");
    assert_eq!(durative(&sal, &third_sg()), "išâl");
    assert_eq!(perfective(&sal, &third_sg()), "išāl");
    let sam = verb("šʾm", "a", "a");
    assert_eq!(durative(&sam, &third_sg()), "išâm");
}

#[test]
fn final_weak() {
    let bna = verb("bnʾ", "i", "i");
    assert_eq!(durative(&bna, &third_sg()), "ibanni");
    assert_eq!(durative(&bna, &third_pl()), "ibannû");
    assert_eq!(durative(&bna, &third_sg().subjunctive(true)), "ibannû");
}

#[test]
fn final_weak_homographs_gloss_differently() {
    let bna = verb("bnʾ", "i", "i");
    let plural = bna.durative(&third_pl()).unwrap();
    let subjunctive = bna.durative(&third_sg().subjunctive(true)).unwrap();
    assert_eq!(plural.text(), subjunctive.text());
    assert_eq!(plural.gloss(), "3-√bnʾ.IMPFV.3.M.PL");
    assert_eq!(subjunctive.gloss(), "3-√bnʾ.IMPFV.3.SG.SUBJ");
    assert_ne!(plural.gloss_key(), subjunctive.gloss_key());
}

#[test]
fn hlk_assimilates_its_first_radical() {
    let hlk = verb("hlk", "a", "i");
    assert_eq!(durative(&hlk, &third_sg()), "illak");
    assert_eq!(perfective(&hlk, &third_sg()), "illik");
    assert_eq!(perfective(&hlk, &third_sg().infix(Infix::T)), "ittalak");
    assert_eq!(
        durative(&hlk, &spec(Person::First, Gender::M, Number::Sg)),
        "allak"
    );
}
