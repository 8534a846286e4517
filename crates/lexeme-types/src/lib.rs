//! Shared value types for the lexeme morphology engine.
//!
//! The goal is a small, stable vocabulary that the generation and inference
//! sides agree on exactly: a closed [`PartOfSpeech`] tag set, one enum per
//! grammatical dimension ([`Tense`], [`Number`], [`Person`], [`Case`],
//! [`Degree`], [`Aspect`], [`Voice`]), a sparse [`MorphologicalFeature`]
//! record, and the [`WordForm`] triple that both sides produce.
//!
//! Features are sparse by design: an unset field means "unspecified", not
//! "default". Serialization therefore omits unset fields, and
//! [`MorphologicalFeature::matches`] only compares the fields a caller set.
//!
//! ```rust
//! use lexeme_types::{MorphologicalFeature, PartOfSpeech, Tense};
//!
//! let past = MorphologicalFeature {
//!     tense: Some(Tense::Past),
//!     ..Default::default()
//! };
//! assert_eq!(serde_json::to_string(&past).unwrap(), r#"{"tense":"past"}"#);
//! assert_eq!(PartOfSpeech::from_penn("VBD"), PartOfSpeech::Verb);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech marker. Only the four open classes drive morphology;
/// everything else passes through generation and inference unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "ADP")]
    Preposition,
    #[serde(rename = "CONJ")]
    Conjunction,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "OTHER")]
    Other,
}

impl PartOfSpeech {
    /// Map a Penn Treebank tag (`NN`, `VBD`, `JJR`, ...) into the closed set.
    ///
    /// Unknown tags map to [`PartOfSpeech::Other`].
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "NN" | "NNS" | "NNP" | "NNPS" => Self::Noun,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => Self::Verb,
            "JJ" | "JJR" | "JJS" => Self::Adjective,
            "RB" | "RBR" | "RBS" => Self::Adverb,
            "PRP" | "PRP$" | "WP" | "WP$" => Self::Pronoun,
            "IN" | "TO" => Self::Preposition,
            "CC" => Self::Conjunction,
            "DT" | "PDT" | "WDT" => Self::Determiner,
            "UH" => Self::Interjection,
            "CD" => Self::Numeral,
            "RP" => Self::Particle,
            _ => Self::Other,
        }
    }

    /// Map a universal coarse tag (`NOUN`, `VERB`, `ADJ`, ...) into the
    /// closed set. Unknown tags map to [`PartOfSpeech::Other`].
    pub fn from_universal(tag: &str) -> Self {
        match tag {
            "NOUN" | "PROPN" => Self::Noun,
            "VERB" | "AUX" => Self::Verb,
            "ADJ" => Self::Adjective,
            "ADV" => Self::Adverb,
            "PRON" => Self::Pronoun,
            "ADP" => Self::Preposition,
            "CONJ" | "CCONJ" | "SCONJ" => Self::Conjunction,
            "DET" => Self::Determiner,
            "INTJ" => Self::Interjection,
            "NUM" => Self::Numeral,
            "PART" => Self::Particle,
            _ => Self::Other,
        }
    }

    /// Stable serialized tag, matching the serde representation.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Adjective => "ADJ",
            Self::Adverb => "ADV",
            Self::Pronoun => "PRON",
            Self::Preposition => "ADP",
            Self::Conjunction => "CONJ",
            Self::Determiner => "DET",
            Self::Interjection => "INTJ",
            Self::Numeral => "NUM",
            Self::Particle => "PART",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Verb tense, including the two participles and the bare infinitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Past,
    PastParticiple,
    PresentParticiple,
    Infinitive,
}

impl Tense {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Past => "past",
            Self::PastParticiple => "past_participle",
            Self::PresentParticiple => "present_participle",
            Self::Infinitive => "infinitive",
        }
    }
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Singular => "singular",
            Self::Plural => "plural",
        }
    }
}

/// Grammatical person.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
}

impl Person {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
        }
    }
}

/// Case, used for pronouns and the noun possessive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Subject,
    Object,
    Possessive,
    Reflexive,
}

impl Case {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Object => "object",
            Self::Possessive => "possessive",
            Self::Reflexive => "reflexive",
        }
    }
}

/// Degree of comparison for adjectives and adverbs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

impl Degree {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Comparative => "comparative",
            Self::Superlative => "superlative",
        }
    }
}

/// Verbal aspect.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Progressive,
    Perfect,
}

impl Aspect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Progressive => "progressive",
            Self::Perfect => "perfect",
        }
    }
}

/// Grammatical voice.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Passive => "passive",
        }
    }
}

/// Sparse morphological feature record.
///
/// Each field is either unset ("don't care") or holds one canonical value.
/// Equality is plain field-wise equality, so two records are equal iff they
/// set the same fields to the same values. Serialization omits unset fields.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MorphologicalFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<Degree>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<Aspect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
}

impl MorphologicalFeature {
    /// A record with every field unset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check this record against a sparse set of criteria.
    ///
    /// Only fields that are set on `criteria` are compared; unset criteria
    /// fields match anything.
    pub fn matches(&self, criteria: &MorphologicalFeature) -> bool {
        fn ok<T: PartialEq>(value: &Option<T>, wanted: &Option<T>) -> bool {
            wanted.is_none() || value == wanted
        }
        ok(&self.tense, &criteria.tense)
            && ok(&self.number, &criteria.number)
            && ok(&self.person, &criteria.person)
            && ok(&self.case, &criteria.case)
            && ok(&self.degree, &criteria.degree)
            && ok(&self.aspect, &criteria.aspect)
            && ok(&self.voice, &criteria.voice)
    }

    /// Human-readable `key=value` summary, or `"base"` when empty.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(t) = self.tense {
            parts.push(format!("tense={}", t.as_str()));
        }
        if let Some(n) = self.number {
            parts.push(format!("number={}", n.as_str()));
        }
        if let Some(p) = self.person {
            parts.push(format!("person={}", p.as_str()));
        }
        if let Some(c) = self.case {
            parts.push(format!("case={}", c.as_str()));
        }
        if let Some(d) = self.degree {
            parts.push(format!("degree={}", d.as_str()));
        }
        if let Some(a) = self.aspect {
            parts.push(format!("aspect={}", a.as_str()));
        }
        if let Some(v) = self.voice {
            parts.push(format!("voice={}", v.as_str()));
        }
        if parts.is_empty() {
            "base".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl fmt::Display for MorphologicalFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// A single inflected form of a lemma.
///
/// `ending` is the structural suffix difference against the lemma the form
/// was derived from: empty iff the form equals the lemma, otherwise `-` plus
/// the form with the longest common prefix removed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WordForm {
    pub form: String,
    #[serde(default)]
    pub ending: String,
    #[serde(default)]
    pub features: MorphologicalFeature,
}

impl WordForm {
    /// True when two records describe the same inflection (same surface form
    /// and same feature set); used by consumers to avoid duplicates.
    pub fn same_inflection(&self, other: &WordForm) -> bool {
        self.form == other.form && self.features == other.features
    }
}
