//! Feature inference: assign sparse morphological features to observed
//! surface forms by diffing them against their lemma.
//!
//! Two interchangeable strategies sit behind the [`AnalysisStrategy`] trait:
//! - [`HeuristicStrategy`] classifies by POS-specific suffix patterns and
//!   needs no external data.
//! - [`TaggerStrategy`] delegates each surface form to a [`TokenTagger`]
//!   (an external per-token morphological tagger) and maps its tag
//!   vocabulary into the canonical feature enums.
//!
//! Both strategies share the spelling primitives of `lexeme-inflect`, so the
//! `ending` they report always agrees with what generation would produce.
//! The [`MorphologicalAnalyzer`] facade holds the active strategy and is the
//! single inference entry point for callers; strategies can be swapped at
//! runtime, and a failed tagger construction is the caller's cue to fall
//! back to the heuristic.
//!
//! # Example
//! ```rust
//! use std::collections::HashMap;
//! use lexeme_infer::MorphologicalAnalyzer;
//! use lexeme_types::{PartOfSpeech, Tense};
//!
//! let analyzer = MorphologicalAnalyzer::default();
//! let lemmas = vec!["run".to_string()];
//! let pos = HashMap::from([("run".to_string(), PartOfSpeech::Verb)]);
//! let forms = HashMap::from([("run".to_string(), vec!["ran".to_string()])]);
//!
//! let results = analyzer.analyze(&lemmas, &pos, &forms);
//! let run = &results["run"];
//! assert_eq!(run[0].form, "run"); // base form is always present, first
//! assert_eq!(run[1].features.tense, Some(Tense::Past));
//! ```
//!
//! For a runnable demo, see
//! `cargo run -p lexeme-infer --example analyze -- [--lexicon <path>]`.

use std::collections::HashMap;

use lexeme_types::{PartOfSpeech, WordForm};

mod analyzer;
mod heuristic;
mod tagger;

pub use analyzer::MorphologicalAnalyzer;
pub use heuristic::HeuristicStrategy;
pub use tagger::{LexiconTagger, TaggerError, TaggerStrategy, TokenTagger};

/// Word forms keyed by lemma, in the order produced by the strategy.
pub type AnalysisResult = HashMap<String, Vec<WordForm>>;

/// A feature-inference strategy over observed surface forms.
///
/// Implementations must keep per-lemma output order deterministic: observed
/// forms in input order, with the lemma's base form guaranteed present and
/// forced to position 0 when no observed form equals the lemma.
pub trait AnalysisStrategy: Send + Sync {
    /// Assign features to every observed form of every lemma.
    ///
    /// Lemmas absent from `pos_by_lemma` are treated as
    /// [`PartOfSpeech::Other`]; lemmas absent from `forms_by_lemma` are
    /// analyzed as their own single observed form.
    fn analyze_tokens(
        &self,
        lemmas: &[String],
        pos_by_lemma: &HashMap<String, PartOfSpeech>,
        forms_by_lemma: &HashMap<String, Vec<String>>,
    ) -> AnalysisResult;

    /// Short name used when logging strategy switches.
    fn name(&self) -> &'static str;
}
