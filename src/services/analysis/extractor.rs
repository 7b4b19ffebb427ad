use tracing::{debug, info};

use super::bands::RawBands;
use super::xml::{parse_document, XmlElement};
use crate::error::ExtractError;
use crate::models::{AnalysisDocument, FileRecord, UNKNOWN_FILE, UNKNOWN_LANGUAGE, UNKNOWN_PROJECT};

/// Read one analysis report into its project, language and per-file records.
///
/// Only a document that is not well-formed XML fails. Missing project or
/// language nodes fall back to placeholders, and `file` nodes without an
/// `analyse` child are skipped.
pub fn parse_analysis(xml: &[u8]) -> Result<AnalysisDocument, ExtractError> {
    let root = parse_document(xml)?;

    let project_name = named_attr(&root, "project", UNKNOWN_PROJECT);
    let language = named_attr(&root, "language", UNKNOWN_LANGUAGE);

    let mut records = Vec::new();
    for file in root.descendants().filter(|e| e.name == "file") {
        let file_name = file.attr("name").unwrap_or(UNKNOWN_FILE);
        let Some(analyse) = file.child("analyse") else {
            debug!("Skipping file {} without analyse node", file_name);
            continue;
        };

        let sequence_id = records.len() as u32 + 1;
        records.push(build_record(sequence_id, file_name, analyse));
    }

    info!(
        "Parsed analysis for project '{}', language '{}': {} file(s)",
        project_name,
        language,
        records.len()
    );

    Ok(AnalysisDocument {
        project_name,
        language,
        records,
    })
}

fn named_attr(root: &XmlElement, element: &str, fallback: &str) -> String {
    root.first_descendant(element)
        .and_then(|e| e.attr("name"))
        .unwrap_or(fallback)
        .to_string()
}

fn build_record(sequence_id: u32, file_name: &str, analyse: &XmlElement) -> FileRecord {
    let grouped = RawBands::read(analyse).grouped();

    FileRecord {
        sequence_id,
        file_name: file_name.to_string(),
        no_match: grouped.no_match,
        low_fuzzy: grouped.low_fuzzy,
        high_fuzzy: grouped.high_fuzzy,
        full_match: grouped.full_match,
        repetitions: grouped.repetitions,
        full_match_and_reps: grouped.full_match_and_reps,
        total_gross: grouped.total_gross,
        weighted_net: grouped.weighted_net(),
    }
}
