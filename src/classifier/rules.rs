//! Built-in rule table.
//!
//! Every pattern runs against normalized text: lowercase, single spaces, and
//! no underscores or hyphens. That is why `ship to` has no `ship-to` variant.
//! Word boundaries are ASCII (`(?-u:\b)`), so an accented letter right after a
//! keyword still ends the word.
use super::patterns::{PatternSet, PatternSpec};
use super::regex_error::RegexError;
use crate::domain::DocumentType;

/// Static pattern lists for one scored document type.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub doc_type: DocumentType,
    /// General vocabulary, added to the score.
    pub keywords: &'static [PatternSpec],
    /// Structural field names, added to the score.
    pub fields: &'static [PatternSpec],
    /// Counter-evidence, subtracted from the score.
    pub negatives: &'static [PatternSpec],
    /// Structural evidence counted by the required-signal gate.
    pub required: &'static [PatternSpec],
    /// Title patterns checked against the header window.
    pub header: &'static [PatternSpec],
}

const RFQ_HEAD: &str = r"request for quotation|rfq(?-u:\b)";
const PO_HEAD: &str = r"purchase order|(?-u:\b)po(?-u:\b)";
const INVOICE_HEAD: &str = r"invoice|tax invoice|commercial invoice";
const PO_NUMBER: &str = r"po (no\.?|number|#)|po id";
const INVOICE_NUMBER: &str = r"invoice (no\.?|number|#)|invoice id";
const QUOTATION_NUMBER: &str = r"quotation (no\.?|number|#)|quote id";
const RFQ_NUMBER: &str = r"rfq (no\.?|number|#)|rfq id";
const TOTALS: &str = r"subtotal|tax|vat|total amount|grand total";

pub const RULE_SPECS: [RuleSpec; 4] = [
    RuleSpec {
        doc_type: DocumentType::Rfq,
        keywords: &[
            PatternSpec::weighted("rfq_title", RFQ_HEAD, 6),
            PatternSpec::weighted(
                "bid_solicitation",
                r"bid solicitation|request for proposal|rfp(?-u:\b)",
                3,
            ),
            PatternSpec::weighted(
                "submission_deadline",
                r"quotation due|submission deadline|bid due",
                2,
            ),
        ],
        fields: &[
            PatternSpec::weighted("rfq_number", RFQ_NUMBER, 4),
            PatternSpec::weighted("closing_date", r"due date|closing date|deadline", 2),
            PatternSpec::weighted(
                "scope_of_work",
                r"scope of work|specifications|requirements",
                2,
            ),
        ],
        negatives: &[PatternSpec::weighted(
            "other_documents",
            r"invoice|purchase order|po(?-u:\b)",
            3,
        )],
        required: &[
            PatternSpec::new("rfq_title", RFQ_HEAD),
            PatternSpec::new("rfq_number", RFQ_NUMBER),
            PatternSpec::new("closing_date", r"due date|closing date|deadline"),
            PatternSpec::new("scope_of_work", r"scope of work|specifications|requirements"),
        ],
        header: &[PatternSpec::new("rfq_title", RFQ_HEAD)],
    },
    RuleSpec {
        doc_type: DocumentType::Po,
        keywords: &[
            PatternSpec::weighted("po_title", PO_HEAD, 6),
            PatternSpec::weighted("order_confirmation", r"order confirmation|order date", 2),
        ],
        fields: &[
            PatternSpec::weighted("po_number", PO_NUMBER, 4),
            PatternSpec::weighted("addresses", r"ship to|bill to", 2),
            PatternSpec::weighted(
                "terms",
                r"terms and conditions|payment terms|incoterms",
                2,
            ),
            PatternSpec::weighted("line_items", r"line items|quantity|unit price|total", 1),
        ],
        negatives: &[PatternSpec::weighted(
            "other_documents",
            r"invoice|quotation|rfq(?-u:\b)",
            3,
        )],
        required: &[
            PatternSpec::new("po_title", PO_HEAD),
            PatternSpec::new("po_number", PO_NUMBER),
            PatternSpec::new("addresses", r"ship to|bill to"),
            PatternSpec::new("terms", r"terms and conditions|payment terms|incoterms"),
            PatternSpec::new(
                "line_items",
                r"line items|quantity|unit price|total amount|grand total|subtotal|tax|vat",
            ),
        ],
        header: &[PatternSpec::new("po_title", PO_HEAD)],
    },
    RuleSpec {
        doc_type: DocumentType::Invoice,
        keywords: &[
            PatternSpec::weighted("invoice_title", INVOICE_HEAD, 6),
            PatternSpec::weighted("amount_due", r"amount due|balance due|total due", 3),
        ],
        fields: &[
            PatternSpec::weighted("invoice_number", INVOICE_NUMBER, 4),
            PatternSpec::weighted("payment_due", r"due date|payment due|terms", 2),
            PatternSpec::weighted("totals", r"subtotal|tax|vat|total", 2),
            PatternSpec::weighted("addresses", r"bill to|ship to", 1),
        ],
        negatives: &[PatternSpec::weighted(
            "other_documents",
            r"purchase order|(?-u:\b)po(?-u:\b)|rfq(?-u:\b)|quotation",
            3,
        )],
        required: &[
            PatternSpec::new("invoice_title", INVOICE_HEAD),
            PatternSpec::new("invoice_number", INVOICE_NUMBER),
            PatternSpec::new("amount_due", r"amount due|balance due|total due"),
            PatternSpec::new("totals", TOTALS),
        ],
        header: &[PatternSpec::new("invoice_title", INVOICE_HEAD)],
    },
    RuleSpec {
        doc_type: DocumentType::Quotation,
        keywords: &[
            PatternSpec::weighted("quotation_title", r"quotation|quote(?-u:\b)|price quote", 6),
            PatternSpec::weighted(
                "validity",
                r"valid until|quote validity|validity period",
                2,
            ),
        ],
        fields: &[
            PatternSpec::weighted("quotation_number", QUOTATION_NUMBER, 4),
            PatternSpec::weighted("pricing", r"unit price|pricing|rate", 2),
            PatternSpec::weighted("totals", TOTALS, 1),
        ],
        negatives: &[PatternSpec::weighted(
            "other_documents",
            r"invoice|purchase order|(?-u:\b)po(?-u:\b)|rfq(?-u:\b)",
            3,
        )],
        required: &[
            PatternSpec::new("quotation_title", r"quotation|quote(?-u:\b)|price quote"),
            PatternSpec::new("quotation_number", QUOTATION_NUMBER),
            PatternSpec::new("validity", r"valid until|quote validity|validity period"),
            PatternSpec::new("pricing", r"unit price|pricing|rate"),
            PatternSpec::new("totals", TOTALS),
        ],
        header: &[PatternSpec::new(
            "quotation_title",
            r"quotation|price quote|(?-u:\b)quote(?-u:\b)",
        )],
    },
];

/// Vocabulary of reports, roadmaps and overviews.
pub const GENERAL_INDICATORS: &[PatternSpec] = &[
    PatternSpec::new(
        "report",
        r"roadmap|progress report|status report|technical report|executive summary",
    ),
    PatternSpec::new(
        "overview",
        r"overview|introduction|architecture|specification|design doc|proposal summary",
    ),
    PatternSpec::new(
        "planning",
        r"milestone|deliverable|timeline|sprint|release notes|changelog",
    ),
];

/// Vocabulary shared by all transactional documents.
pub const TRANSACTIONAL_SIGNALS: &[PatternSpec] = &[
    PatternSpec::new("document_kind", r"(?-u:\b)(invoice|purchase order|rfq|quotation)(?-u:\b)"),
    PatternSpec::new("document_number", r"(?-u:\b)(no\.?|number|id|#)(?-u:\b)"),
    PatternSpec::new("line_items", r"(?-u:\b)line items?|quantity|unit price(?-u:\b)"),
    PatternSpec::new(
        "amounts",
        r"(?-u:\b)amount due|balance due|total amount|grand total|subtotal|tax|vat(?-u:\b)",
    ),
    PatternSpec::new("addresses", r"(?-u:\b)ship to|bill to(?-u:\b)"),
    PatternSpec::new("payment_terms", r"(?-u:\b)valid until|due date|payment terms(?-u:\b)"),
    PatternSpec::new("currency_code", r"(?-u:\b)(usd|eur|gbp|ngn|cad|aud)(?-u:\b)"),
    PatternSpec::new("currency_symbol", r"[$€£₦]"),
];

/// Compiled rule for one scored document type.
#[derive(Debug, Clone)]
pub struct Rule {
    pub doc_type: DocumentType,
    pub keywords: PatternSet,
    pub fields: PatternSet,
    pub negatives: PatternSet,
    pub required: PatternSet,
    pub header: PatternSet,
}

impl Rule {
    pub fn compile(spec: &RuleSpec) -> Result<Self, RegexError> {
        Ok(Self {
            doc_type: spec.doc_type,
            keywords: PatternSet::compile("keywords", spec.keywords)?,
            fields: PatternSet::compile("fields", spec.fields)?,
            negatives: PatternSet::compile("negatives", spec.negatives)?,
            required: PatternSet::compile("required", spec.required)?,
            header: PatternSet::compile("header", spec.header)?,
        })
    }
}

/// All compiled rules plus the cross-type indicator sets.
///
/// Built once and never mutated; share it by reference.
#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: Vec<Rule>,
    general_indicators: PatternSet,
    transactional_signals: PatternSet,
}

impl RuleBook {
    pub fn compile() -> Result<Self, RegexError> {
        let rules = RULE_SPECS
            .iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            general_indicators: PatternSet::compile("general_indicators", GENERAL_INDICATORS)?,
            transactional_signals: PatternSet::compile(
                "transactional_signals",
                TRANSACTIONAL_SIGNALS,
            )?,
        })
    }

    /// Rules in declaration order (RFQ, PO, INVOICE, QUOTATION).
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, doc_type: DocumentType) -> Option<&Rule> {
        self.rules.iter().find(|r| r.doc_type == doc_type)
    }

    pub fn general_indicators(&self) -> &PatternSet {
        &self.general_indicators
    }

    pub fn transactional_signals(&self) -> &PatternSet {
        &self.transactional_signals
    }
}
