//! Facade over the active analysis strategy.

use std::collections::HashMap;

use tracing::info;

use lexeme_types::PartOfSpeech;

use crate::heuristic::HeuristicStrategy;
use crate::{AnalysisResult, AnalysisStrategy};

/// Holds one active [`AnalysisStrategy`] and forwards [`analyze`] calls
/// to it.
///
/// Swapping the strategy does not rerun anything; callers re-invoke
/// [`analyze`] to get results under the new strategy.
///
/// [`analyze`]: MorphologicalAnalyzer::analyze
pub struct MorphologicalAnalyzer {
    strategy: Box<dyn AnalysisStrategy>,
}

impl MorphologicalAnalyzer {
    pub fn new(strategy: Box<dyn AnalysisStrategy>) -> Self {
        Self { strategy }
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Replace the active strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn AnalysisStrategy>) {
        info!("analysis strategy changed to {}", strategy.name());
        self.strategy = strategy;
    }

    /// Run feature inference on the given lemmas under the active strategy.
    pub fn analyze(
        &self,
        lemmas: &[String],
        pos_by_lemma: &HashMap<String, PartOfSpeech>,
        forms_by_lemma: &HashMap<String, Vec<String>>,
    ) -> AnalysisResult {
        self.strategy
            .analyze_tokens(lemmas, pos_by_lemma, forms_by_lemma)
    }
}

impl Default for MorphologicalAnalyzer {
    /// The heuristic strategy needs no external resources, so it is the
    /// default.
    fn default() -> Self {
        Self::new(Box::new(HeuristicStrategy))
    }
}
