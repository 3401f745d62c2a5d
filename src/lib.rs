#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::cast_possible_truncation, // Scores and counts stay far below u32::MAX
    clippy::missing_errors_doc,       // Internal API
    clippy::module_name_repetitions,  // e.g. ConfigError in config module
    clippy::must_use_candidate
)]

pub mod app;
pub mod batch;
pub mod classifier;
pub mod domain;
pub mod extract;

// Re-export main types for easy access
pub use batch::{BatchReport, ClassifiedFile, Document, classify_batch};
pub use classifier::{Classifier, Evaluation, GatePolicy, classify, default_classifier};
pub use domain::{ClassificationResult, DocumentType, Signals};
pub use extract::{EXTRACTION_PLACEHOLDER, PlainTextExtractor, TextExtractor};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
