use std::path::PathBuf;

use lexeme_inflect::{FormGenerator, IrregularTable};
use lexeme_types::{
    Case, Degree, MorphologicalFeature, Number, PartOfSpeech, Person, Tense,
};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("irregular")
}

fn generator() -> FormGenerator {
    FormGenerator::new(fixture_dir())
}

fn tense(t: Tense) -> MorphologicalFeature {
    MorphologicalFeature {
        tense: Some(t),
        ..Default::default()
    }
}

fn degree(d: Degree) -> MorphologicalFeature {
    MorphologicalFeature {
        degree: Some(d),
        ..Default::default()
    }
}

#[test]
fn irregular_past_beats_regular_rule() {
    let generator = generator();
    let wf = generator.generate_form("run", PartOfSpeech::Verb, &tense(Tense::Past));
    assert_eq!(wf.form, "ran");
    assert_eq!(wf.ending, "-an");

    let wf = generator.generate_form("go", PartOfSpeech::Verb, &tense(Tense::Past));
    assert_eq!(wf.form, "went");
    assert_eq!(wf.ending, "-went");
}

#[test]
fn missing_irregular_slot_falls_back_to_regular() {
    let generator = generator();
    // "sing" has no third_person slot in the fixture.
    let third = MorphologicalFeature {
        tense: Some(Tense::Present),
        person: Some(Person::Third),
        number: Some(Number::Singular),
        ..Default::default()
    };
    assert_eq!(
        generator.generate_form("sing", PartOfSpeech::Verb, &third).form,
        "sings"
    );
    // "far" has no superlative slot.
    assert_eq!(
        generator
            .generate_form("far", PartOfSpeech::Adjective, &degree(Degree::Superlative))
            .form,
        "farrest"
    );
    assert_eq!(
        generator
            .generate_form("far", PartOfSpeech::Adjective, &degree(Degree::Comparative))
            .form,
        "farther"
    );
}

#[test]
fn regular_verb_spelling_adjustments() {
    let generator = generator();
    assert_eq!(
        generator.generate_form("hop", PartOfSpeech::Verb, &tense(Tense::Past)).form,
        "hopped"
    );
    assert_eq!(
        generator
            .generate_form("carry", PartOfSpeech::Verb, &tense(Tense::Past))
            .form,
        "carried"
    );
    assert_eq!(
        generator
            .generate_form("agree", PartOfSpeech::Verb, &tense(Tense::PresentParticiple))
            .form,
        "agreeing"
    );
}

#[test]
fn irregular_noun_plural_and_possessive() {
    let generator = generator();
    let plural = MorphologicalFeature {
        number: Some(Number::Plural),
        ..Default::default()
    };
    assert_eq!(
        generator.generate_form("child", PartOfSpeech::Noun, &plural).form,
        "children"
    );
    assert_eq!(
        generator.generate_form("box", PartOfSpeech::Noun, &plural).form,
        "boxes"
    );

    let possessive = MorphologicalFeature {
        case: Some(Case::Possessive),
        ..Default::default()
    };
    assert_eq!(
        generator
            .generate_form("child", PartOfSpeech::Noun, &possessive)
            .form,
        "child's"
    );
}

#[test]
fn adjective_degrees_mix_irregular_and_heuristic() {
    let generator = generator();
    assert_eq!(
        generator
            .generate_form("good", PartOfSpeech::Adjective, &degree(Degree::Comparative))
            .form,
        "better"
    );
    assert_eq!(
        generator
            .generate_form("happy", PartOfSpeech::Adjective, &degree(Degree::Comparative))
            .form,
        "happier"
    );
    assert_eq!(
        generator
            .generate_form("beautiful", PartOfSpeech::Adjective, &degree(Degree::Superlative))
            .form,
        "most beautiful"
    );
}

#[test]
fn verb_paradigm_uses_irregular_slots_in_order() {
    let generator = generator();
    let forms = generator.generate_all_forms("go", PartOfSpeech::Verb);
    let surfaces: Vec<&str> = forms.iter().map(|wf| wf.form.as_str()).collect();
    assert_eq!(surfaces, vec!["go", "go", "goes", "went", "gone", "going"]);

    // Endings are recomputed from the final surface, irregular or not.
    assert_eq!(forms[3].ending, "-went");
    assert_eq!(forms[4].ending, "-ne");
    assert_eq!(forms[0].ending, "");
}

#[test]
fn is_irregular_reflects_fixture_contents() {
    let generator = generator();
    assert!(generator.is_irregular("run", PartOfSpeech::Verb));
    assert!(generator.is_irregular("Child", PartOfSpeech::Noun));
    assert!(generator.is_irregular("good", PartOfSpeech::Adjective));
    assert!(!generator.is_irregular("walk", PartOfSpeech::Verb));
    assert!(!generator.is_irregular("run", PartOfSpeech::Noun));
    assert!(!generator.is_irregular("quickly", PartOfSpeech::Adverb));
}

#[test]
fn degraded_resources_still_generate_regular_forms() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("irregular_verbs.json"), "[1, 2, 3]").unwrap();

    let generator = FormGenerator::new(dir.path());
    assert!(!generator.is_irregular("run", PartOfSpeech::Verb));
    let wf = generator.generate_form("run", PartOfSpeech::Verb, &tense(Tense::Past));
    assert_eq!(wf.form, "runned");
}

#[test]
fn preloaded_table_is_used_without_a_resource_dir() {
    let table = IrregularTable::load(fixture_dir());
    let generator = FormGenerator::with_table(table);
    assert_eq!(
        generator.generate_form("run", PartOfSpeech::Verb, &tense(Tense::Past)).form,
        "ran"
    );
}
