use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category assigned to a classified document.
///
/// Exactly one variant is assigned per classification. `General` is the
/// fallback whenever the evidence for a transactional type is insufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Rfq,
    Po,
    Quotation,
    Invoice,
    General,
}

impl DocumentType {
    /// Types that have a scoring rule, in rule-declaration order.
    ///
    /// Ties between equal scores resolve to the earlier entry.
    pub const SCORED: [DocumentType; 4] = [
        DocumentType::Rfq,
        DocumentType::Po,
        DocumentType::Invoice,
        DocumentType::Quotation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Rfq => "RFQ",
            DocumentType::Po => "PO",
            DocumentType::Quotation => "QUOTATION",
            DocumentType::Invoice => "INVOICE",
            DocumentType::General => "GENERAL",
        }
    }

    /// Topical tag appended when this type wins with a strong score.
    pub fn topical_tag(self) -> Option<&'static str> {
        match self {
            DocumentType::Po => Some("Purchase"),
            DocumentType::Rfq => Some("Sourcing"),
            DocumentType::Invoice => Some("Accounts Payable"),
            DocumentType::Quotation => Some("Pricing"),
            DocumentType::General => None,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown document type: {0}")]
pub struct ParseDocumentTypeError(pub String);

impl FromStr for DocumentType {
    type Err = ParseDocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RFQ" => Ok(DocumentType::Rfq),
            "PO" => Ok(DocumentType::Po),
            "QUOTATION" => Ok(DocumentType::Quotation),
            "INVOICE" => Ok(DocumentType::Invoice),
            "GENERAL" => Ok(DocumentType::General),
            _ => Err(ParseDocumentTypeError(s.to_string())),
        }
    }
}
