// Weighted keyword/field/negative scoring per rule
use super::rules::{Rule, RuleBook};
use crate::domain::{DocumentType, Signals};
use serde::Serialize;

/// Score of one rule against one normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleScore {
    pub doc_type: DocumentType,
    /// Clamped at zero.
    pub score: u32,
    /// Keyword and field patterns that added to the score.
    pub matched: Vec<&'static str>,
    /// Negative patterns that subtracted from the score.
    pub negated: Vec<&'static str>,
}

/// Adds every matching keyword and field weight, subtracts every matching
/// negative weight, and saturates at zero.
pub fn score_rule(rule: &Rule, text: &str) -> RuleScore {
    let mut total: i64 = 0;
    let mut matched = Vec::new();
    let mut negated = Vec::new();

    for pattern in rule.keywords.matched(text).chain(rule.fields.matched(text)) {
        total += i64::from(pattern.weight());
        matched.push(pattern.name());
    }

    for pattern in rule.negatives.matched(text) {
        total -= i64::from(pattern.weight());
        negated.push(pattern.name());
    }

    RuleScore {
        doc_type: rule.doc_type,
        score: u32::try_from(total.max(0)).unwrap_or(u32::MAX),
        matched,
        negated,
    }
}

/// Scores every rule in declaration order.
pub fn score_all(book: &RuleBook, text: &str) -> Vec<RuleScore> {
    book.rules().iter().map(|rule| score_rule(rule, text)).collect()
}

pub fn to_signals(scores: &[RuleScore]) -> Signals {
    scores.iter().map(|s| (s.doc_type, s.score)).collect()
}

/// `min(cap, top / (top + second + 1))`, or zero when nothing scored.
pub fn confidence(top_score: u32, second_score: u32, cap: f64) -> f64 {
    if top_score == 0 {
        return 0.0;
    }
    let top = f64::from(top_score);
    let ratio = top / (top + f64::from(second_score) + 1.0);
    ratio.min(cap)
}
