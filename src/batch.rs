//! Parallel classification of many documents.
//!
//! Every document is independent, so batches fan out over rayon's pool and
//! results come back in input order.
use crate::classifier::{Classifier, DecisionTrace};
use crate::domain::{ClassificationResult, DocumentType};
use crate::extract::{TextExtractor, extract_or_placeholder};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// One in-memory document awaiting classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub content: String,
}

impl Document {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Classifies `documents` in parallel, preserving order.
pub fn classify_batch(
    classifier: &Classifier,
    documents: &[Document],
) -> Vec<ClassificationResult> {
    documents
        .par_iter()
        .map(|doc| classifier.classify(&doc.file_name, &doc.content))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub text_extracted: bool,
    pub extracted_text_length: usize,
    #[serde(flatten)]
    pub result: ClassificationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<DecisionTrace>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total: usize,
    pub extracted: usize,
    pub failed: usize,
    pub by_type: BTreeMap<DocumentType, usize>,
}

impl BatchReport {
    pub fn from_files(files: &[ClassifiedFile]) -> Self {
        let mut report = BatchReport {
            total: files.len(),
            ..BatchReport::default()
        };
        for file in files {
            if file.text_extracted {
                report.extracted += 1;
            } else {
                report.failed += 1;
            }
            *report.by_type.entry(file.result.document_type).or_insert(0) += 1;
        }
        report
    }

    pub fn count(&self, doc_type: DocumentType) -> usize {
        self.by_type.get(&doc_type).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathOptions {
    pub recursive: bool,
    pub explain: bool,
}

/// Expands `paths` into a sorted, deduplicated list of files.
///
/// Directories contribute their files; subdirectories are entered only when
/// `recursive` is set. Symlinked directories are never descended into.
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> io::Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).follow_links(false).max_depth(max_depth) {
                let entry = entry.map_err(io::Error::from)?;
                if entry.path().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file or directory: {}", path.display()),
            ));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Extracts and classifies every file under `paths`.
pub fn classify_paths(
    classifier: &Classifier,
    extractor: &dyn TextExtractor,
    paths: &[PathBuf],
    options: PathOptions,
) -> io::Result<(Vec<ClassifiedFile>, BatchReport)> {
    let files = collect_files(paths, options.recursive)?;
    debug!(count = files.len(), "Collected files for classification");

    let classified: Vec<ClassifiedFile> = files
        .par_iter()
        .map(|path| classify_file(classifier, extractor, path, options.explain))
        .collect();

    let report = BatchReport::from_files(&classified);
    info!(
        total = report.total,
        extracted = report.extracted,
        failed = report.failed,
        "Batch classification finished"
    );

    Ok((classified, report))
}

fn classify_file(
    classifier: &Classifier,
    extractor: &dyn TextExtractor,
    path: &Path,
    explain: bool,
) -> ClassifiedFile {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extraction = extract_or_placeholder(extractor, path);
    let extracted_text_length = if extraction.text_extracted {
        extraction.text.chars().count()
    } else {
        0
    };

    let evaluation = classifier.evaluate(&file_name, &extraction.text);

    ClassifiedFile {
        path: path.to_path_buf(),
        file_name,
        text_extracted: extraction.text_extracted,
        extracted_text_length,
        result: evaluation.result,
        trace: explain.then_some(evaluation.trace),
    }
}
