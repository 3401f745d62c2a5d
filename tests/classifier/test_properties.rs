use doc_classifier::classifier::SUMMARY_PLACEHOLDER;
use doc_classifier::{Classifier, Document, DocumentType, classify, classify_batch};

fn sample_inputs() -> Vec<(String, String)> {
    let mut inputs = vec![
        (String::new(), String::new()),
        ("invoice.txt".to_string(), "Invoice No. 991 Amount Due: $1,200".to_string()),
        ("po".to_string(), "PO PO PO po_number-- ship_to".to_string()),
        ("x".to_string(), "\u{feff}\u{00a0}\t\r\n".to_string()),
        ("rechnung.txt".to_string(), "Rechnung Nr. 12 · Gesamtbetrag 40 €".to_string()),
        ("請求書.txt".to_string(), "請求書 合計 ¥5,000 invoice".to_string()),
        ("quote".to_string(), "quote ".repeat(500)),
        ("rfq".to_string(), "-_-_-_-".to_string()),
    ];
    inputs.push(("long.txt".to_string(), "Purchase Order ".repeat(2_000)));
    inputs
}

#[test]
fn test_results_are_always_well_formed() {
    for (file_name, content) in sample_inputs() {
        let result = classify(&file_name, &content);

        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} out of range for {file_name:?}",
            result.confidence
        );
        assert_eq!(result.signals.len(), 4);
        assert_eq!(
            result.suggested_tags.first().map(String::as_str),
            Some(result.document_type.as_str())
        );
        assert!(result.summary.chars().count() <= 200);

        let top = result.signals.iter().map(|(_, s)| s).max().unwrap_or(0);
        assert_eq!(result.confidence == 0.0, top == 0, "{file_name:?}");
    }
}

#[test]
fn test_classification_is_idempotent() {
    for (file_name, content) in sample_inputs() {
        let first = classify(&file_name, &content);
        let second = classify(&file_name, &content);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_independent_classifiers_agree() {
    let a = Classifier::new().unwrap();
    let b = Classifier::new().unwrap();
    for (file_name, content) in sample_inputs() {
        assert_eq!(a.classify(&file_name, &content), b.classify(&file_name, &content));
    }
}

#[test]
fn test_empty_document() {
    let result = classify("", "");

    assert_eq!(result.document_type, DocumentType::General);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.summary, SUMMARY_PLACEHOLDER);
    assert_eq!(result.suggested_tags, vec!["GENERAL"]);
}

#[test]
fn test_byte_order_mark_counts_as_blank() {
    let result = classify("scan.txt", "\u{feff}");
    assert_eq!(result.summary, SUMMARY_PLACEHOLDER);
    assert_eq!(result.document_type, DocumentType::General);

    let result = classify("scan.txt", "\u{feff}Invoice No. 991\u{feff}");
    assert_eq!(result.summary, "Invoice No. 991");
}

#[test]
fn test_next_line_control_is_content() {
    let result = classify("scan.txt", "\u{85}");
    assert_eq!(result.summary, "\u{85}");
}

#[test]
fn test_tags_are_unique() {
    for (file_name, content) in sample_inputs() {
        let result = classify(&file_name, &content);
        let mut tags = result.suggested_tags.clone();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), result.suggested_tags.len());
    }
}

#[test]
fn test_batch_matches_sequential() {
    let classifier = Classifier::new().unwrap();
    let documents: Vec<Document> = sample_inputs()
        .into_iter()
        .map(|(file_name, content)| Document::new(file_name, content))
        .collect();

    let batch = classify_batch(&classifier, &documents);
    let sequential: Vec<_> = documents
        .iter()
        .map(|d| classifier.classify(&d.file_name, &d.content))
        .collect();

    assert_eq!(batch, sequential);
}

#[test]
fn test_concurrent_calls_share_default_classifier() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                classify(
                    &format!("invoice_{i}.txt"),
                    "Invoice No. 991\nAmount Due: $1,200\nBill To: Acme Corp",
                )
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.document_type, DocumentType::Invoice);
    }
}
