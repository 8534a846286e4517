//! Irregular-form override tables.
//!
//! Three JSON resources, one per open class that has irregular morphology:
//! `irregular_verbs.json`, `irregular_nouns.json`, and
//! `irregular_adjectives.json`, each keyed by lowercased lemma. A missing
//! slot inside an entry means "fall back to the regular rule"; a missing or
//! malformed file degrades the whole category to empty with a warning.
//! Loading never fails.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use lexeme_types::PartOfSpeech;

pub const VERBS_FILE: &str = "irregular_verbs.json";
pub const NOUNS_FILE: &str = "irregular_nouns.json";
pub const ADJECTIVES_FILE: &str = "irregular_adjectives.json";

/// Irregular verb slots. Any missing slot falls back to the regular rule.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IrregularVerb {
    #[serde(default)]
    pub past: Option<String>,
    #[serde(default)]
    pub past_participle: Option<String>,
    #[serde(default)]
    pub present_participle: Option<String>,
    #[serde(default)]
    pub third_person: Option<String>,
}

/// Irregular adjective comparison slots.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IrregularAdjective {
    #[serde(default)]
    pub comparative: Option<String>,
    #[serde(default)]
    pub superlative: Option<String>,
}

/// Immutable-after-load lookup data for irregular forms.
#[derive(Clone, Debug, Default)]
pub struct IrregularTable {
    verbs: HashMap<String, IrregularVerb>,
    nouns: HashMap<String, String>,
    adjectives: HashMap<String, IrregularAdjective>,
}

impl IrregularTable {
    /// A table with no entries; every lookup falls back to regular rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the three category files from a resource directory.
    ///
    /// Each category degrades independently: a missing or malformed file is
    /// logged and replaced with an empty map.
    pub fn load(resource_dir: impl AsRef<Path>) -> Self {
        let dir = resource_dir.as_ref();
        let table = Self {
            verbs: load_category(&dir.join(VERBS_FILE)),
            nouns: load_category(&dir.join(NOUNS_FILE)),
            adjectives: load_category(&dir.join(ADJECTIVES_FILE)),
        };
        debug!(
            "loaded irregular forms: {} verbs, {} nouns, {} adjectives",
            table.verbs.len(),
            table.nouns.len(),
            table.adjectives.len()
        );
        table
    }

    /// Irregular verb slots for a lemma, if any.
    pub fn verb(&self, lemma: &str) -> Option<&IrregularVerb> {
        self.verbs.get(&lemma.to_lowercase())
    }

    /// Irregular plural for a noun lemma, if any.
    pub fn noun_plural(&self, lemma: &str) -> Option<&str> {
        self.nouns.get(&lemma.to_lowercase()).map(String::as_str)
    }

    /// Irregular comparison slots for an adjective lemma, if any.
    pub fn adjective(&self, lemma: &str) -> Option<&IrregularAdjective> {
        self.adjectives.get(&lemma.to_lowercase())
    }

    /// True iff the lowercased lemma has an entry under the POS's category.
    ///
    /// Categories exist only for verbs, nouns, and adjectives; every other
    /// POS is regular by definition.
    pub fn is_irregular(&self, lemma: &str, pos: PartOfSpeech) -> bool {
        let key = lemma.to_lowercase();
        match pos {
            PartOfSpeech::Verb => self.verbs.contains_key(&key),
            PartOfSpeech::Noun => self.nouns.contains_key(&key),
            PartOfSpeech::Adjective => self.adjectives.contains_key(&key),
            _ => false,
        }
    }

    /// Entry counts per category: `(verbs, nouns, adjectives)`.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.verbs.len(), self.nouns.len(), self.adjectives.len())
    }
}

fn load_category<T: DeserializeOwned>(path: &Path) -> HashMap<String, T> {
    if !path.exists() {
        warn!("irregular resource not found: {}", path.display());
        return HashMap::new();
    }
    match read_category(path) {
        Ok(map) => map,
        Err(err) => {
            warn!("irregular resource unusable, using regular rules: {err:#}");
            HashMap::new()
        }
    }
}

fn read_category<T: DeserializeOwned>(path: &Path) -> Result<HashMap<String, T>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let map: HashMap<String, T> =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    // Keys are looked up lowercased; normalize once here.
    Ok(map
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IrregularTable {
        IrregularTable {
            verbs: HashMap::from([(
                "run".to_string(),
                IrregularVerb {
                    past: Some("ran".into()),
                    past_participle: Some("run".into()),
                    present_participle: None,
                    third_person: None,
                },
            )]),
            nouns: HashMap::from([("child".to_string(), "children".to_string())]),
            adjectives: HashMap::from([(
                "good".to_string(),
                IrregularAdjective {
                    comparative: Some("better".into()),
                    superlative: Some("best".into()),
                },
            )]),
        }
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let table = sample();
        assert_eq!(table.verb("Run").and_then(|v| v.past.as_deref()), Some("ran"));
        assert_eq!(table.noun_plural("CHILD"), Some("children"));
        assert!(table.adjective("Good").is_some());
    }

    #[test]
    fn is_irregular_respects_pos_category() {
        let table = sample();
        assert!(table.is_irregular("run", PartOfSpeech::Verb));
        assert!(!table.is_irregular("run", PartOfSpeech::Noun));
        assert!(table.is_irregular("child", PartOfSpeech::Noun));
        assert!(table.is_irregular("good", PartOfSpeech::Adjective));
        assert!(!table.is_irregular("good", PartOfSpeech::Adverb));
        assert!(!table.is_irregular("walk", PartOfSpeech::Verb));
    }

    #[test]
    fn missing_directory_degrades_to_empty() {
        let table = IrregularTable::load("/nonexistent/morph-resources");
        assert_eq!(table.counts(), (0, 0, 0));
        assert!(!table.is_irregular("run", PartOfSpeech::Verb));
    }

    #[test]
    fn malformed_category_degrades_alone() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VERBS_FILE), "{not json").unwrap();
        std::fs::write(
            dir.path().join(NOUNS_FILE),
            r#"{"Mouse": "mice"}"#,
        )
        .unwrap();

        let table = IrregularTable::load(dir.path());
        let (verbs, nouns, adjectives) = table.counts();
        assert_eq!(verbs, 0);
        assert_eq!(nouns, 1);
        assert_eq!(adjectives, 0);
        assert_eq!(table.noun_plural("mouse"), Some("mice"));
    }
}
