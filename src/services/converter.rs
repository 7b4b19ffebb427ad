use bytes::Bytes;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::ConvertError;
use crate::models::{AnalysisDocument, LanguageSummary};
use crate::services::analysis::parse_analysis;
use crate::services::excel::assemble_workbook;

pub const DEFAULT_OUTPUT_NAME: &str = "Trados_Analysis.xlsx";
const IMPORT_TIME_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// An uploaded analysis report, identified by the name it was uploaded under.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFailure {
    pub document: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct BatchExtraction {
    pub documents: Vec<AnalysisDocument>,
    pub failures: Vec<DocumentFailure>,
}

impl BatchExtraction {
    pub fn summaries(&self) -> Vec<LanguageSummary> {
        self.documents.iter().map(AnalysisDocument::summary).collect()
    }

    /// Download name derived from the first successfully parsed document.
    pub fn output_file_name(&self) -> String {
        self.documents
            .first()
            .map(|d| output_file_name(&d.project_name))
            .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string())
    }
}

#[derive(Debug)]
pub struct Conversion {
    pub file_name: String,
    pub workbook: Vec<u8>,
    pub summaries: Vec<LanguageSummary>,
    pub failures: Vec<DocumentFailure>,
}

/// Parse every source in order. A document that fails to parse is recorded
/// and the rest of the batch carries on.
pub fn extract_batch(sources: &[SourceDocument]) -> BatchExtraction {
    let mut batch = BatchExtraction::default();

    for source in sources {
        match parse_analysis(&source.bytes) {
            Ok(document) => {
                tracing::info!(
                    "Parsed {} from {} ({} file(s))",
                    document.language,
                    source.name,
                    document.records.len()
                );
                batch.documents.push(document);
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", source.name, e);
                batch.failures.push(DocumentFailure {
                    document: source.name.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    batch
}

/// Full run: extract, assemble, serialise.
pub fn convert(sources: &[SourceDocument], import_time: &str) -> Result<Conversion, ConvertError> {
    let start = std::time::Instant::now();
    let batch = extract_batch(sources);

    if batch.documents.is_empty() {
        tracing::error!("No valid analysis files among {} upload(s)", sources.len());
        return Err(ConvertError::NoValidDocuments {
            failures: batch.failures,
        });
    }

    let workbook = assemble_workbook(&batch.documents, import_time).to_xlsx_bytes()?;
    let file_name = batch.output_file_name();
    let summaries = batch.summaries();

    tracing::info!(
        "Converted {} document(s) into {} in {:?}",
        batch.documents.len(),
        file_name,
        start.elapsed()
    );

    Ok(Conversion {
        file_name,
        workbook,
        summaries,
        failures: batch.failures,
    })
}

/// Keep alphanumerics, spaces, hyphens and underscores, drop trailing
/// whitespace, and fall back to a fixed name when nothing is left.
pub fn output_file_name(project_name: &str) -> String {
    let safe = project_name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>();
    let safe = safe.trim_end();

    if safe.is_empty() {
        DEFAULT_OUTPUT_NAME.to_string()
    } else {
        format!("{}_Analysis.xlsx", safe)
    }
}

pub fn format_import_time(at: NaiveDateTime) -> String {
    at.format(IMPORT_TIME_FORMAT).to_string()
}
