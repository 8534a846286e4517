//! Suffix-pattern feature inference.

use std::collections::HashMap;

use tracing::info;

use lexeme_inflect::spelling::ending_diff;
use lexeme_types::{
    Aspect, Case, Degree, MorphologicalFeature, Number, PartOfSpeech, Person, Tense, WordForm,
};

use crate::{AnalysisResult, AnalysisStrategy};

/// Classify observed forms by POS-specific suffix patterns.
///
/// Patterns are checked in a fixed priority order per POS, so a form like
/// `talking` resolves to the present participle before the bare-present
/// fallback is considered. A form equal to its lemma short-circuits to the
/// POS's default feature set regardless of its spelling.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicStrategy;

impl AnalysisStrategy for HeuristicStrategy {
    fn analyze_tokens(
        &self,
        lemmas: &[String],
        pos_by_lemma: &HashMap<String, PartOfSpeech>,
        forms_by_lemma: &HashMap<String, Vec<String>>,
    ) -> AnalysisResult {
        let mut results = AnalysisResult::new();

        for lemma in lemmas {
            let pos = pos_by_lemma
                .get(lemma)
                .copied()
                .unwrap_or(PartOfSpeech::Other);
            let fallback = [lemma.clone()];
            let observed = forms_by_lemma
                .get(lemma)
                .map(Vec::as_slice)
                .unwrap_or(&fallback);

            let mut word_forms: Vec<WordForm> = observed
                .iter()
                .map(|form| WordForm {
                    form: form.clone(),
                    ending: ending_diff(lemma, form),
                    features: infer_features(lemma, form, pos),
                })
                .collect();
            ensure_base_form(lemma, pos, &mut word_forms);

            results.insert(lemma.clone(), word_forms);
        }

        info!("heuristic strategy analyzed {} lemmas", results.len());
        results
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Insert the lemma's own base form at position 0 unless an observed form
/// already covers it.
pub(crate) fn ensure_base_form(lemma: &str, pos: PartOfSpeech, word_forms: &mut Vec<WordForm>) {
    if word_forms.iter().any(|wf| wf.form == *lemma) {
        return;
    }
    word_forms.insert(
        0,
        WordForm {
            form: lemma.to_string(),
            ending: String::new(),
            features: base_features(pos),
        },
    );
}

/// Default feature set for a lemma observed as itself.
pub(crate) fn base_features(pos: PartOfSpeech) -> MorphologicalFeature {
    match pos {
        PartOfSpeech::Verb => MorphologicalFeature {
            tense: Some(Tense::Present),
            ..Default::default()
        },
        PartOfSpeech::Noun => MorphologicalFeature {
            number: Some(Number::Singular),
            ..Default::default()
        },
        PartOfSpeech::Adjective | PartOfSpeech::Adverb => MorphologicalFeature {
            degree: Some(Degree::Positive),
            ..Default::default()
        },
        _ => MorphologicalFeature::empty(),
    }
}

fn infer_features(lemma: &str, form: &str, pos: PartOfSpeech) -> MorphologicalFeature {
    if form == lemma {
        return base_features(pos);
    }
    match pos {
        PartOfSpeech::Verb => verb_features(lemma, form),
        PartOfSpeech::Noun => noun_features(lemma, form),
        PartOfSpeech::Adjective | PartOfSpeech::Adverb => degree_features(form),
        _ => MorphologicalFeature::empty(),
    }
}

fn verb_features(lemma: &str, form: &str) -> MorphologicalFeature {
    if form.ends_with("ing") {
        return MorphologicalFeature {
            tense: Some(Tense::PresentParticiple),
            aspect: Some(Aspect::Progressive),
            ..Default::default()
        };
    }
    if form.ends_with("ed") {
        return MorphologicalFeature {
            tense: Some(Tense::Past),
            ..Default::default()
        };
    }
    if form.ends_with("en") && form != lemma {
        return MorphologicalFeature {
            tense: Some(Tense::PastParticiple),
            ..Default::default()
        };
    }
    if form.ends_with('s') && form != lemma {
        return MorphologicalFeature {
            tense: Some(Tense::Present),
            person: Some(Person::Third),
            number: Some(Number::Singular),
            ..Default::default()
        };
    }
    // No recognized suffix on a form that differs from its lemma: an
    // irregular stem change (ran, spoke, sang), which is a past form.
    MorphologicalFeature {
        tense: Some(Tense::Past),
        ..Default::default()
    }
}

fn noun_features(lemma: &str, form: &str) -> MorphologicalFeature {
    // Fixed priority: the plural suffix check comes before the possessive
    // check, so `dog's` (which still ends in `s`) classifies as plural and
    // only apostrophe-final forms like `dogs'` reach the possessive arm.
    if form != lemma
        && (form.ends_with('s') || form.ends_with("es") || form.ends_with("ies"))
    {
        return MorphologicalFeature {
            number: Some(Number::Plural),
            ..Default::default()
        };
    }
    if form.contains("'s") || form.contains("s'") {
        return MorphologicalFeature {
            case: Some(Case::Possessive),
            ..Default::default()
        };
    }
    MorphologicalFeature {
        number: Some(Number::Singular),
        ..Default::default()
    }
}

fn degree_features(form: &str) -> MorphologicalFeature {
    if form.ends_with("est") || form.starts_with("most ") {
        return MorphologicalFeature {
            degree: Some(Degree::Superlative),
            ..Default::default()
        };
    }
    if form.ends_with("er") || form.starts_with("more ") {
        return MorphologicalFeature {
            degree: Some(Degree::Comparative),
            ..Default::default()
        };
    }
    MorphologicalFeature {
        degree: Some(Degree::Positive),
        ..Default::default()
    }
}
