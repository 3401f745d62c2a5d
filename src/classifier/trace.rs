use super::gating::GateOutcome;
use super::scoring::RuleScore;
use crate::domain::DocumentType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScore {
    pub doc_type: DocumentType,
    pub score: u32,
}

/// Explains how a classification was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionTrace {
    /// Descending by score, ties in rule-declaration order.
    pub ranking: Vec<RankedScore>,
    pub top_type: DocumentType,
    pub top_score: u32,
    pub second_score: u32,
    pub gates: GateOutcome,
    pub rules: Vec<RuleScore>,
}

impl DecisionTrace {
    pub fn matched_patterns(&self, doc_type: DocumentType) -> &[&'static str] {
        self.rules
            .iter()
            .find(|r| r.doc_type == doc_type)
            .map(|r| r.matched.as_slice())
            .unwrap_or(&[])
    }
}
