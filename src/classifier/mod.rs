//! Offline, rule-based document classifier.
//!
//! The pipeline is pure and synchronous:
//! normalize -> score every rule -> rank -> gate -> summary and tags.
//! A `Classifier` holds only immutable compiled rules, so one instance can be
//! shared across threads.
pub mod gating;
pub mod normalize;
pub mod patterns;
pub mod regex_error;
pub mod rules;
pub mod scoring;
pub mod summary;
pub mod trace;

pub use gating::{GateOutcome, GatePolicy};
pub use normalize::NormalizedText;
pub use regex_error::RegexError;
pub use rules::RuleBook;
pub use scoring::RuleScore;
pub use summary::SUMMARY_PLACEHOLDER;
pub use trace::{DecisionTrace, RankedScore};

use crate::domain::{ClassificationResult, DocumentType};
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Classification result together with the trace that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub result: ClassificationResult,
    pub trace: DecisionTrace,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleBook,
    policy: GatePolicy,
}

impl Classifier {
    /// Compiles the built-in rule table with the default policy.
    pub fn new() -> Result<Self, RegexError> {
        Self::with_policy(GatePolicy::default())
    }

    pub fn with_policy(policy: GatePolicy) -> Result<Self, RegexError> {
        Ok(Self {
            rules: RuleBook::compile()?,
            policy,
        })
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    /// Classifies one document. Never fails: weak or missing evidence yields
    /// `GENERAL`.
    pub fn classify(&self, file_name: &str, content: &str) -> ClassificationResult {
        self.evaluate(file_name, content).result
    }

    pub fn evaluate(&self, file_name: &str, content: &str) -> Evaluation {
        let normalized = NormalizedText::new(file_name, content, self.policy.header_window);

        let rule_scores = scoring::score_all(&self.rules, normalized.text());
        let signals = scoring::to_signals(&rule_scores);
        let ranking = signals.ranked();

        let (top_type, top_score) = ranking
            .first()
            .copied()
            .unwrap_or((DocumentType::General, 0));
        let second_score = ranking.get(1).map_or(0, |(_, score)| *score);

        let confidence = scoring::confidence(top_score, second_score, self.policy.confidence_cap);
        let gates = self
            .policy
            .decide(&self.rules, &normalized, top_type, top_score);

        for rule in &rule_scores {
            trace!(
                doc_type = %rule.doc_type,
                score = rule.score,
                matched = ?rule.matched,
                negated = ?rule.negated,
                "Rule scored"
            );
        }
        debug!(
            file_name,
            top_type = %top_type,
            top_score,
            second_score,
            required = gates.required_matches,
            header = gates.header_matches,
            transactional = gates.transactional_hits,
            general = gates.general_hits,
            decided = %gates.decided,
            "Document classified"
        );

        let result = ClassificationResult {
            document_type: gates.decided,
            summary: summary::summarize(content, self.policy.summary_max_chars),
            suggested_tags: summary::suggest_tags(
                gates.decided,
                top_type,
                top_score,
                self.policy.tag_score,
            ),
            confidence,
            signals,
        };

        let trace = DecisionTrace {
            ranking: ranking
                .iter()
                .map(|(doc_type, score)| RankedScore {
                    doc_type: *doc_type,
                    score: *score,
                })
                .collect(),
            top_type,
            top_score,
            second_score,
            gates,
            rules: rule_scores,
        };

        Evaluation { result, trace }
    }
}

static DEFAULT_CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

/// Shared classifier with the built-in rules and default policy.
pub fn default_classifier() -> &'static Classifier {
    DEFAULT_CLASSIFIER.get_or_init(|| {
        // The built-in table is static and covered by `rules::tests`.
        Classifier::new().expect("built-in rule table compiles")
    })
}

/// Classifies one document with the default classifier.
pub fn classify(file_name: &str, content: &str) -> ClassificationResult {
    default_classifier().classify(file_name, content)
}
