//! Delegation to an external per-token morphological tagger.
//!
//! The external vocabulary follows the common coarse tagging scheme
//! (`Tense=Past|Pres`, `Number=Sing|Plur`, `Person=1|2|3`,
//! `Degree=Pos|Cmp|Sup`, `Aspect=Prog`, `Voice=Pass`); [`map_tags`] folds it
//! into the canonical feature enums, dropping anything it does not know.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use lexeme_inflect::spelling::ending_diff;
use lexeme_types::{
    Aspect, Degree, MorphologicalFeature, Number, PartOfSpeech, Person, Tense, Voice, WordForm,
};

use crate::heuristic::ensure_base_form;
use crate::{AnalysisResult, AnalysisStrategy};

/// External per-token tagger interface.
///
/// Given a single surface form, return a flat tag dictionary in the external
/// vocabulary. An unknown form returns an empty map.
pub trait TokenTagger: Send + Sync {
    fn tag(&self, form: &str) -> HashMap<String, String>;
}

/// Failure to construct a tagger-backed strategy.
///
/// This fails the strategy instance only; callers substitute the heuristic
/// strategy themselves, the engine never swaps silently.
#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("failed to read tag lexicon: {0}")]
    Io(#[from] std::io::Error),
    #[error("tag lexicon {path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
}

/// File-backed [`TokenTagger`].
///
/// Lexicon format: one surface form per line, followed by whitespace-
/// separated `Key=Value` tags. Blank lines and `#` comments are skipped.
///
/// ```text
/// ran    Tense=Past
/// runs   Tense=Pres Number=Sing Person=3
/// ```
#[derive(Debug)]
pub struct LexiconTagger {
    entries: HashMap<String, HashMap<String, String>>,
}

impl LexiconTagger {
    /// Load a tag lexicon. Unlike the irregular tables, a missing or
    /// malformed lexicon is a hard error: without it this tagger is useless.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TaggerError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut entries: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut parts = trimmed.split_whitespace();
            let surface = parts
                .next()
                .expect("non-empty trimmed line has a first token")
                .to_lowercase();
            let mut tags = HashMap::new();
            for pair in parts {
                let Some((key, value)) = pair.split_once('=') else {
                    return Err(TaggerError::Parse {
                        path: path.display().to_string(),
                        line: lineno + 1,
                        message: format!("expected Key=Value, got {pair:?}"),
                    });
                };
                tags.insert(key.to_string(), value.to_string());
            }
            entries.insert(surface, tags);
        }

        info!("loaded tag lexicon with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Number of surface forms in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TokenTagger for LexiconTagger {
    fn tag(&self, form: &str) -> HashMap<String, String> {
        self.entries
            .get(&form.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

/// Strategy that asks a [`TokenTagger`] about every observed form.
pub struct TaggerStrategy {
    tagger: Box<dyn TokenTagger>,
}

impl TaggerStrategy {
    pub fn new(tagger: Box<dyn TokenTagger>) -> Self {
        Self { tagger }
    }

    /// Convenience constructor over a [`LexiconTagger`] resource file.
    pub fn from_lexicon(path: impl AsRef<Path>) -> Result<Self, TaggerError> {
        Ok(Self::new(Box::new(LexiconTagger::load(path)?)))
    }
}

impl AnalysisStrategy for TaggerStrategy {
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
                    features: map_tags(&self.tagger.tag(form)),
                })
                .collect();
            ensure_base_form(lemma, pos, &mut word_forms);

            results.insert(lemma.clone(), word_forms);
        }

        info!("tagger strategy analyzed {} lemmas", results.len());
        results
    }

    fn name(&self) -> &'static str {
        "tagger"
    }
}

/// Fold an external tag dictionary into the canonical feature vocabulary.
///
/// Unknown keys and unknown values are dropped, so a partially understood
/// tag set degrades to a sparser feature record rather than an error.
pub(crate) fn map_tags(tags: &HashMap<String, String>) -> MorphologicalFeature {
    let mut features = MorphologicalFeature::empty();
    for (key, value) in tags {
        match key.as_str() {
            "Tense" => {
                features.tense = match value.as_str() {
                    "Past" => Some(Tense::Past),
                    "Pres" => Some(Tense::Present),
                    _ => None,
                }
            }
            "Number" => {
                features.number = match value.as_str() {
                    "Sing" => Some(Number::Singular),
                    "Plur" => Some(Number::Plural),
                    _ => None,
                }
            }
            "Person" => {
                features.person = match value.as_str() {
                    "1" => Some(Person::First),
                    "2" => Some(Person::Second),
                    "3" => Some(Person::Third),
                    _ => None,
                }
            }
            "Degree" => {
                features.degree = match value.as_str() {
                    "Pos" => Some(Degree::Positive),
                    "Cmp" => Some(Degree::Comparative),
                    "Sup" => Some(Degree::Superlative),
                    _ => None,
                }
            }
            "Aspect" => {
                if value == "Prog" {
                    features.aspect = Some(Aspect::Progressive);
                }
            }
            "Voice" => {
                if value == "Pass" {
                    features.voice = Some(Voice::Passive);
                }
            }
            other => debug!("ignoring unknown tag key {other}"),
        }
    }
    features
}
