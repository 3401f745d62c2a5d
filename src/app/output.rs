// Rendering of classification records to stdout
use super::config::OutputFormat;
use crate::batch::{BatchReport, ClassifiedFile};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Write error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn render<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    files: &[ClassifiedFile],
    report: &BatchReport,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Ndjson => {
            for file in files {
                serde_json::to_writer(&mut *writer, file)?;
                writer.write_all(b"\n")?;
            }
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *writer, files)?;
            writer.write_all(b"\n")?;
        }
        OutputFormat::Summary => {
            for file in files {
                writeln!(writer, "{}", summary_line(file))?;
            }
            writeln!(writer, "{}", totals_line(report))?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn summary_line(file: &ClassifiedFile) -> String {
    let extracted = if file.text_extracted { "" } else { " (not extracted)" };
    format!(
        "{}\t{}\t{:.2}\t{}{}",
        file.path.display(),
        file.result.document_type,
        file.result.confidence,
        file.result.suggested_tags.join(", "),
        extracted
    )
}

fn totals_line(report: &BatchReport) -> String {
    let by_type = report
        .by_type
        .iter()
        .map(|(doc_type, count)| format!("{doc_type}={count}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "total={} extracted={} failed={} {}",
        report.total, report.extracted, report.failed, by_type
    )
    .trim_end()
    .to_string()
}
