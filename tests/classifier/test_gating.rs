use doc_classifier::{Classifier, DocumentType, GatePolicy, default_classifier};

const FILLER: &str = "lorem ipsum dolor sit amet ";

#[test]
fn test_title_outside_header_without_transactional_support() {
    let content = format!("{}invoice reminder, total due soon", FILLER.repeat(6));
    let evaluation = default_classifier().evaluate("", &content);
    let gates = &evaluation.trace.gates;

    assert_eq!(evaluation.trace.top_type, DocumentType::Invoice);
    assert_eq!(evaluation.trace.top_score, 11);
    assert!(gates.passes_required);
    assert!(gates.passes_threshold);
    assert_eq!(gates.header_matches, 0);
    assert_eq!(gates.transactional_hits, 1);
    assert!(!gates.passes_header);

    // Falls back, but the topical tag still follows the top-ranked type.
    assert_eq!(evaluation.result.document_type, DocumentType::General);
    assert_eq!(
        evaluation.result.suggested_tags,
        vec!["GENERAL", "Accounts Payable"]
    );
}

#[test]
fn test_report_vocabulary_raises_threshold() {
    let evaluation = default_classifier().evaluate(
        "report.txt",
        "Project roadmap overview\nThe vendor invoice process: milestone review",
    );
    let gates = &evaluation.trace.gates;

    assert_eq!(evaluation.trace.top_score, 6);
    assert_eq!(gates.general_hits, 3);
    assert!(gates.looks_like_general);
    assert_eq!(gates.score_threshold, 7);
    assert!(!gates.passes_threshold);
    assert_eq!(evaluation.result.document_type, DocumentType::General);
}

#[test]
fn test_same_score_without_report_vocabulary_is_accepted_by_threshold() {
    let evaluation = default_classifier().evaluate("notes.txt", "The vendor invoice process");
    let gates = &evaluation.trace.gates;

    assert_eq!(evaluation.trace.top_score, 6);
    assert_eq!(gates.score_threshold, 5);
    assert!(gates.passes_threshold);
    assert!(gates.passes_header);
    // One required match, in the header: enough.
    assert_eq!(gates.required_matches, 1);
    assert_eq!(evaluation.result.document_type, DocumentType::Invoice);
}

#[test]
fn test_equal_scores_resolve_in_declaration_order() {
    // "terms" scores 2 for INVOICE, "rate" scores 2 for QUOTATION.
    let evaluation = default_classifier().evaluate("x", "terms rate");
    let ranking: Vec<(DocumentType, u32)> = evaluation
        .trace
        .ranking
        .iter()
        .map(|r| (r.doc_type, r.score))
        .collect();

    assert_eq!(
        ranking,
        vec![
            (DocumentType::Invoice, 2),
            (DocumentType::Quotation, 2),
            (DocumentType::Rfq, 0),
            (DocumentType::Po, 0),
        ]
    );
    assert_eq!(evaluation.trace.top_type, DocumentType::Invoice);
    assert!((evaluation.result.confidence - 0.4).abs() < 1e-12);
    assert_eq!(evaluation.result.document_type, DocumentType::General);
}

#[test]
fn test_stricter_policy_rejects_weaker_evidence() {
    let strict = default_classifier().classify("x", "The vendor invoice, terms apply");
    assert_eq!(strict.document_type, DocumentType::Invoice);

    let policy = GatePolicy {
        base_threshold: 9,
        general_threshold: 9,
        ..GatePolicy::default()
    };
    let classifier = Classifier::with_policy(policy).unwrap();
    let result = classifier.classify("x", "The vendor invoice, terms apply");

    // Same signals, stricter threshold.
    assert_eq!(result.signals, strict.signals);
    assert_eq!(result.document_type, DocumentType::General);
}

#[test]
fn test_transactional_vocabulary_substitutes_for_header_title() {
    let content = format!("{}invoice no. 991 amount due $40", FILLER.repeat(6));
    let evaluation = default_classifier().evaluate("", &content);
    let gates = &evaluation.trace.gates;

    assert_eq!(evaluation.trace.top_type, DocumentType::Invoice);
    assert_eq!(evaluation.trace.top_score, 13);
    assert_eq!(gates.header_matches, 0);
    // document kind, number word, amount due, currency symbol
    assert_eq!(gates.transactional_hits, 4);
    assert!(gates.passes_header);
    assert_eq!(gates.required_matches, 3);
    assert_eq!(evaluation.result.document_type, DocumentType::Invoice);
}

#[test]
fn test_strong_score_carries_single_required_match() {
    let content = format!("{}invoice, payment terms net 30, $40", FILLER.repeat(6));
    let evaluation = default_classifier().evaluate("", &content);
    let gates = &evaluation.trace.gates;

    // invoice_title 6 + payment_due 2
    assert_eq!(evaluation.trace.top_score, 8);
    assert_eq!(gates.required_matches, 1);
    assert_eq!(gates.header_matches, 0);
    assert!(gates.transactional_hits >= 2);
    assert!(gates.passes_required);
    assert!(gates.passes_header);
    assert_eq!(evaluation.result.document_type, DocumentType::Invoice);

    let policy = GatePolicy {
        strong_score: 9,
        ..GatePolicy::default()
    };
    let stricter = Classifier::with_policy(policy).unwrap().evaluate("", &content);
    assert!(!stricter.trace.gates.passes_required);
    assert_eq!(stricter.result.document_type, DocumentType::General);
}
