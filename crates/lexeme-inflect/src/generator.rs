//! Paradigm generation: lemma + POS + sparse feature request → one form.

use std::path::PathBuf;
use std::sync::OnceLock;

use lexeme_types::{
    Aspect, Case, Degree, MorphologicalFeature, Number, PartOfSpeech, Person, Tense, WordForm,
};

use crate::irregular::IrregularTable;
use crate::spelling::{
    double_final_consonant, e_drop, ending_diff, ends_with_consonant_y, pluralize_sibilant,
    vowel_groups,
};

/// Adjectives and adverbs with more vowel groups than this compare
/// periphrastically (`more ...` / `most ...`).
const SHORT_ADJECTIVE_MAX_VOWEL_GROUPS: usize = 2;

/// Generates inflected surface forms from a lemma and a feature request.
///
/// The irregular table is consulted first; regular spelling rules cover
/// everything else. The table is loaded lazily on first use and is immutable
/// afterwards, so concurrent first calls race harmlessly: [`OnceLock`] keeps
/// exactly one copy of identical data.
///
/// Generation is total: unknown or non-inflecting parts of speech yield the
/// lemma unchanged, never an error.
pub struct FormGenerator {
    resource_dir: Option<PathBuf>,
    table: OnceLock<IrregularTable>,
}

impl FormGenerator {
    /// Generator that lazily loads irregular tables from `resource_dir`.
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: Some(resource_dir.into()),
            table: OnceLock::new(),
        }
    }

    /// Generator with no irregular data: regular spelling rules only.
    pub fn without_irregulars() -> Self {
        Self {
            resource_dir: None,
            table: OnceLock::new(),
        }
    }

    /// Generator over an already-loaded table.
    pub fn with_table(table: IrregularTable) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(table);
        Self {
            resource_dir: None,
            table: cell,
        }
    }

    fn table(&self) -> &IrregularTable {
        self.table.get_or_init(|| match &self.resource_dir {
            Some(dir) => IrregularTable::load(dir),
            None => IrregularTable::empty(),
        })
    }

    /// Generate one surface form for the requested features.
    ///
    /// The `ending` of the result is always recomputed from the final form,
    /// whichever branch (irregular or regular) produced it.
    pub fn generate_form(
        &self,
        lemma: &str,
        pos: PartOfSpeech,
        features: &MorphologicalFeature,
    ) -> WordForm {
        let form = match pos {
            PartOfSpeech::Verb => self.verb_form(lemma, features),
            PartOfSpeech::Noun => self.noun_form(lemma, features),
            PartOfSpeech::Adjective => self.adjective_form(lemma, features),
            PartOfSpeech::Adverb => adverb_form(lemma, features),
            // Closed-class and unknown words do not inflect here.
            PartOfSpeech::Pronoun
            | PartOfSpeech::Preposition
            | PartOfSpeech::Conjunction
            | PartOfSpeech::Determiner
            | PartOfSpeech::Interjection
            | PartOfSpeech::Numeral
            | PartOfSpeech::Particle
            | PartOfSpeech::Other => lemma.to_string(),
        };

        WordForm {
            ending: ending_diff(lemma, &form),
            form,
            features: features.clone(),
        }
    }

    /// Generate the canonical ordered paradigm for a lemma.
    ///
    /// Verb: infinitive, present, present 3rd singular, past, past
    /// participle, present participle (progressive). Noun: singular, plural,
    /// possessive. Adjective/adverb: positive, comparative, superlative.
    /// Anything else: a single base entry with empty features. The output is
    /// deterministic for identical input.
    pub fn generate_all_forms(&self, lemma: &str, pos: PartOfSpeech) -> Vec<WordForm> {
        paradigm_specs(pos)
            .iter()
            .map(|features| self.generate_form(lemma, pos, features))
            .collect()
    }

    /// True iff the lemma has an irregular entry under the POS's category.
    pub fn is_irregular(&self, lemma: &str, pos: PartOfSpeech) -> bool {
        self.table().is_irregular(lemma, pos)
    }

    // --- Verbs ---

    fn verb_form(&self, lemma: &str, features: &MorphologicalFeature) -> String {
        let irregular = self.table().verb(lemma);
        match features.tense {
            Some(Tense::Past) => irregular
                .and_then(|v| v.past.clone())
                .unwrap_or_else(|| regular_past(lemma)),
            Some(Tense::PastParticiple) => irregular
                .and_then(|v| v.past_participle.clone())
                .unwrap_or_else(|| regular_past(lemma)),
            Some(Tense::PresentParticiple) => irregular
                .and_then(|v| v.present_participle.clone())
                .unwrap_or_else(|| regular_present_participle(lemma)),
            Some(Tense::Present)
                if features.person == Some(Person::Third)
                    && features.number == Some(Number::Singular) =>
            {
                irregular
                    .and_then(|v| v.third_person.clone())
                    .unwrap_or_else(|| pluralize_sibilant(lemma))
            }
            Some(Tense::Present) | Some(Tense::Infinitive) | None => lemma.to_string(),
        }
    }

    // --- Nouns ---

    fn noun_form(&self, lemma: &str, features: &MorphologicalFeature) -> String {
        if features.number == Some(Number::Plural) {
            return self
                .table()
                .noun_plural(lemma)
                .map(str::to_string)
                .unwrap_or_else(|| regular_plural(lemma));
        }
        if features.case == Some(Case::Possessive) {
            return format!("{lemma}'s");
        }
        lemma.to_string()
    }

    // --- Adjectives ---

    fn adjective_form(&self, lemma: &str, features: &MorphologicalFeature) -> String {
        let irregular = self.table().adjective(lemma);
        match features.degree {
            Some(Degree::Comparative) => irregular
                .and_then(|a| a.comparative.clone())
                .unwrap_or_else(|| compared(lemma, "er", "more")),
            Some(Degree::Superlative) => irregular
                .and_then(|a| a.superlative.clone())
                .unwrap_or_else(|| compared(lemma, "est", "most")),
            Some(Degree::Positive) | None => lemma.to_string(),
        }
    }
}

// --- Regular rules ---

fn regular_past(lemma: &str) -> String {
    if lemma.ends_with('e') {
        return format!("{lemma}d");
    }
    if ends_with_consonant_y(lemma) {
        return format!("{}ied", &lemma[..lemma.len() - 1]);
    }
    let stem = double_final_consonant(lemma);
    format!("{stem}ed")
}

fn regular_present_participle(lemma: &str) -> String {
    if lemma.ends_with("ie") {
        return format!("{}ying", &lemma[..lemma.len() - 2]);
    }
    if lemma.ends_with('e') && !lemma.ends_with("ee") {
        return e_drop(lemma, "ing");
    }
    let stem = double_final_consonant(lemma);
    format!("{stem}ing")
}

fn regular_plural(lemma: &str) -> String {
    if let Some(stem) = lemma.strip_suffix("fe") {
        return format!("{stem}ves");
    }
    if let Some(stem) = lemma.strip_suffix('f') {
        return format!("{stem}ves");
    }
    pluralize_sibilant(lemma)
}

/// Synthetic `-er`/`-est` for short stems, `more`/`most` otherwise.
fn compared(lemma: &str, suffix: &str, adverb: &str) -> String {
    if !is_short_adjective(lemma) {
        return format!("{adverb} {lemma}");
    }
    if lemma.ends_with('e') {
        // The shared trailing `e` absorbs the suffix vowel.
        return format!("{lemma}{}", &suffix[1..]);
    }
    if ends_with_consonant_y(lemma) {
        return format!("{}i{suffix}", &lemma[..lemma.len() - 1]);
    }
    let stem = double_final_consonant(lemma);
    format!("{stem}{suffix}")
}

fn is_short_adjective(lemma: &str) -> bool {
    vowel_groups(&lemma.to_lowercase()) <= SHORT_ADJECTIVE_MAX_VOWEL_GROUPS
}

fn adverb_form(lemma: &str, features: &MorphologicalFeature) -> String {
    // Adverbs compare periphrastically only; no irregular table, no suffixes.
    match features.degree {
        Some(Degree::Comparative) => format!("more {lemma}"),
        Some(Degree::Superlative) => format!("most {lemma}"),
        Some(Degree::Positive) | None => lemma.to_string(),
    }
}

fn paradigm_specs(pos: PartOfSpeech) -> Vec<MorphologicalFeature> {
    match pos {
        PartOfSpeech::Verb => vec![
            MorphologicalFeature {
                tense: Some(Tense::Infinitive),
                ..Default::default()
            },
            MorphologicalFeature {
                tense: Some(Tense::Present),
                ..Default::default()
            },
            MorphologicalFeature {
                tense: Some(Tense::Present),
                person: Some(Person::Third),
                number: Some(Number::Singular),
                ..Default::default()
            },
            MorphologicalFeature {
                tense: Some(Tense::Past),
                ..Default::default()
            },
            MorphologicalFeature {
                tense: Some(Tense::PastParticiple),
                ..Default::default()
            },
            MorphologicalFeature {
                tense: Some(Tense::PresentParticiple),
                aspect: Some(Aspect::Progressive),
                ..Default::default()
            },
        ],
        PartOfSpeech::Noun => vec![
            MorphologicalFeature {
                number: Some(Number::Singular),
                ..Default::default()
            },
            MorphologicalFeature {
                number: Some(Number::Plural),
                ..Default::default()
            },
            MorphologicalFeature {
                case: Some(Case::Possessive),
                ..Default::default()
            },
        ],
        PartOfSpeech::Adjective | PartOfSpeech::Adverb => vec![
            MorphologicalFeature {
                degree: Some(Degree::Positive),
                ..Default::default()
            },
            MorphologicalFeature {
                degree: Some(Degree::Comparative),
                ..Default::default()
            },
            MorphologicalFeature {
                degree: Some(Degree::Superlative),
                ..Default::default()
            },
        ],
        _ => vec![MorphologicalFeature::empty()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn past() -> MorphologicalFeature {
        MorphologicalFeature {
            tense: Some(Tense::Past),
            ..Default::default()
        }
    }

    #[test]
    fn regular_past_branches() {
        let generator = FormGenerator::without_irregulars();
        let cases = [
            ("hope", "hoped"),
            ("carry", "carried"),
            ("hop", "hopped"),
            ("walk", "walked"),
            ("play", "played"),
        ];
        for (lemma, expected) in cases {
            let wf = generator.generate_form(lemma, PartOfSpeech::Verb, &past());
            assert_eq!(wf.form, expected, "past of {lemma}");
        }
    }

    #[test]
    fn regular_present_participle_branches() {
        let generator = FormGenerator::without_irregulars();
        let prp = MorphologicalFeature {
            tense: Some(Tense::PresentParticiple),
            ..Default::default()
        };
        let cases = [
            ("die", "dying"),
            ("make", "making"),
            ("see", "seeing"),
            ("run", "running"),
            ("walk", "walking"),
        ];
        for (lemma, expected) in cases {
            let wf = generator.generate_form(lemma, PartOfSpeech::Verb, &prp);
            assert_eq!(wf.form, expected, "present participle of {lemma}");
        }
    }

    #[test]
    fn third_person_singular_present() {
        let generator = FormGenerator::without_irregulars();
        let third = MorphologicalFeature {
            tense: Some(Tense::Present),
            person: Some(Person::Third),
            number: Some(Number::Singular),
            ..Default::default()
        };
        assert_eq!(
            generator.generate_form("watch", PartOfSpeech::Verb, &third).form,
            "watches"
        );
        assert_eq!(
            generator.generate_form("carry", PartOfSpeech::Verb, &third).form,
            "carries"
        );
        assert_eq!(
            generator.generate_form("walk", PartOfSpeech::Verb, &third).form,
            "walks"
        );

        // Present without 3rd+singular stays at the lemma.
        let plain_present = MorphologicalFeature {
            tense: Some(Tense::Present),
            ..Default::default()
        };
        assert_eq!(
            generator
                .generate_form("walk", PartOfSpeech::Verb, &plain_present)
                .form,
            "walk"
        );
    }

    #[test]
    fn noun_plural_branches() {
        let generator = FormGenerator::without_irregulars();
        let plural = MorphologicalFeature {
            number: Some(Number::Plural),
            ..Default::default()
        };
        let cases = [
            ("box", "boxes"),
            ("baby", "babies"),
            ("leaf", "leaves"),
            ("knife", "knives"),
            // Trailing `f` always takes -ves, doubled or not.
            ("cliff", "clifves"),
            ("dog", "dogs"),
        ];
        for (lemma, expected) in cases {
            let wf = generator.generate_form(lemma, PartOfSpeech::Noun, &plural);
            assert_eq!(wf.form, expected, "plural of {lemma}");
        }
    }

    #[test]
    fn noun_possessive() {
        let generator = FormGenerator::without_irregulars();
        let possessive = MorphologicalFeature {
            case: Some(Case::Possessive),
            ..Default::default()
        };
        let wf = generator.generate_form("dog", PartOfSpeech::Noun, &possessive);
        assert_eq!(wf.form, "dog's");
        assert_eq!(wf.ending, "-'s");
    }

    #[test]
    fn adjective_short_long_split() {
        let generator = FormGenerator::without_irregulars();
        let comparative = MorphologicalFeature {
            degree: Some(Degree::Comparative),
            ..Default::default()
        };
        let superlative = MorphologicalFeature {
            degree: Some(Degree::Superlative),
            ..Default::default()
        };

        assert_eq!(
            generator
                .generate_form("happy", PartOfSpeech::Adjective, &comparative)
                .form,
            "happier"
        );
        assert_eq!(
            generator
                .generate_form("nice", PartOfSpeech::Adjective, &comparative)
                .form,
            "nicer"
        );
        assert_eq!(
            generator
                .generate_form("big", PartOfSpeech::Adjective, &superlative)
                .form,
            "biggest"
        );
        assert_eq!(
            generator
                .generate_form("beautiful", PartOfSpeech::Adjective, &superlative)
                .form,
            "most beautiful"
        );
        assert_eq!(
            generator
                .generate_form("interesting", PartOfSpeech::Adjective, &comparative)
                .form,
            "more interesting"
        );
    }

    #[test]
    fn adverbs_compare_periphrastically_only() {
        let generator = FormGenerator::without_irregulars();
        let comparative = MorphologicalFeature {
            degree: Some(Degree::Comparative),
            ..Default::default()
        };
        // Even a short adverb never takes -er here.
        let wf = generator.generate_form("fast", PartOfSpeech::Adverb, &comparative);
        assert_eq!(wf.form, "more fast");
    }

    #[test]
    fn non_open_class_pos_is_identity() {
        let generator = FormGenerator::without_irregulars();
        let features = MorphologicalFeature {
            tense: Some(Tense::Past),
            number: Some(Number::Plural),
            degree: Some(Degree::Superlative),
            ..Default::default()
        };
        for pos in [
            PartOfSpeech::Pronoun,
            PartOfSpeech::Preposition,
            PartOfSpeech::Conjunction,
            PartOfSpeech::Determiner,
            PartOfSpeech::Interjection,
            PartOfSpeech::Numeral,
            PartOfSpeech::Particle,
            PartOfSpeech::Other,
        ] {
            let wf = generator.generate_form("under", pos, &features);
            assert_eq!(wf.form, "under");
            assert_eq!(wf.ending, "");
        }
    }

    #[test]
    fn paradigm_order_is_fixed() {
        let generator = FormGenerator::without_irregulars();
        let forms = generator.generate_all_forms("walk", PartOfSpeech::Verb);
        let surfaces: Vec<&str> = forms.iter().map(|wf| wf.form.as_str()).collect();
        assert_eq!(
            surfaces,
            vec!["walk", "walk", "walks", "walked", "walked", "walking"]
        );
        assert_eq!(forms[5].features.aspect, Some(Aspect::Progressive));

        let again = generator.generate_all_forms("walk", PartOfSpeech::Verb);
        assert_eq!(forms, again);
    }

    #[test]
    fn unsupported_pos_paradigm_is_single_base_entry() {
        let generator = FormGenerator::without_irregulars();
        let forms = generator.generate_all_forms("the", PartOfSpeech::Determiner);
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].form, "the");
        assert!(forms[0].features.is_empty());
    }
}
