//! Gate policy that turns raw scores into a final document type.
//!
//! A scored type is only accepted when three independent gates agree:
//!
//! 1. required-signal gate: enough of the type's structural patterns matched,
//! 2. threshold gate: the top score clears a threshold that rises when the
//!    text reads like a general report,
//! 3. header gate: the type's title appears in the header window, or the text
//!    carries enough transactional vocabulary.
//!
//! Anything else falls back to `GENERAL`.
use super::normalize::{DEFAULT_HEADER_WINDOW, NormalizedText};
use super::rules::RuleBook;
use crate::domain::DocumentType;
use serde::{Deserialize, Serialize};

/// Tunable constants of the gate policy. The defaults are the production
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatePolicy {
    pub header_window: usize,
    pub base_threshold: u32,
    pub general_threshold: u32,
    pub general_indicator_min: usize,
    pub min_required_matches: usize,
    pub strong_score: u32,
    pub transactional_min: usize,
    pub tag_score: u32,
    pub confidence_cap: f64,
    pub summary_max_chars: usize,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            header_window: DEFAULT_HEADER_WINDOW,
            base_threshold: 5,
            general_threshold: 7,
            general_indicator_min: 2,
            min_required_matches: 2,
            strong_score: 7,
            transactional_min: 2,
            tag_score: 5,
            confidence_cap: 0.99,
            summary_max_chars: 200,
        }
    }
}

/// Every intermediate quantity the gates looked at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateOutcome {
    pub candidate: DocumentType,
    pub top_score: u32,
    pub required_matches: usize,
    pub header_matches: usize,
    pub general_hits: usize,
    pub transactional_hits: usize,
    pub looks_like_general: bool,
    pub score_threshold: u32,
    pub passes_required: bool,
    pub passes_threshold: bool,
    pub passes_header: bool,
    pub quotation_override: bool,
    pub decided: DocumentType,
}

impl GatePolicy {
    /// Decides whether `candidate` (the top-ranked type) is accepted.
    pub fn decide(
        &self,
        book: &RuleBook,
        normalized: &NormalizedText,
        candidate: DocumentType,
        top_score: u32,
    ) -> GateOutcome {
        let text = normalized.text();

        let (required_matches, header_matches) = match book.rule(candidate) {
            Some(rule) => (
                rule.required.count_matches(text),
                rule.header.count_matches(normalized.header()),
            ),
            None => (0, 0),
        };
        let general_hits = book.general_indicators().count_matches(text);
        let transactional_hits = book.transactional_signals().count_matches(text);
        let looks_like_general = general_hits >= self.general_indicator_min;

        let passes_required = required_matches >= self.min_required_matches
            || (required_matches >= 1 && header_matches >= 1)
            || (required_matches >= 1 && top_score >= self.strong_score);

        let score_threshold = if looks_like_general {
            self.general_threshold
        } else {
            self.base_threshold
        };
        let passes_threshold = top_score >= score_threshold;

        let passes_header = header_matches >= 1 || transactional_hits >= self.transactional_min;

        let mut decided = if passes_required && passes_threshold && passes_header {
            candidate
        } else {
            DocumentType::General
        };

        // Reports that merely mention a quote.
        let quotation_override = decided == DocumentType::Quotation
            && looks_like_general
            && header_matches == 0
            && transactional_hits == 0;
        if quotation_override {
            decided = DocumentType::General;
        }

        GateOutcome {
            candidate,
            top_score,
            required_matches,
            header_matches,
            general_hits,
            transactional_hits,
            looks_like_general,
            score_threshold,
            passes_required,
            passes_threshold,
            passes_header,
            quotation_override,
            decided,
        }
    }
}
