//! Domain layer for doc-classifier.
//!
//! Contains the canonical types shared across all modules:
//! - `DocumentType`: The closed set of document categories
//! - `Signals`: Raw per-type scores produced by the scoring engine
//! - `ClassificationResult`: The value returned for every classified document

pub mod classification;
pub mod document_type;

pub use classification::{ClassificationResult, Signals};
pub use document_type::{DocumentType, ParseDocumentTypeError};
