use serde::Serialize;

pub const UNKNOWN_PROJECT: &str = "Unknown Project";
pub const UNKNOWN_LANGUAGE: &str = "Unknown Language";
pub const UNKNOWN_FILE: &str = "Unknown";

/// One parsed analysis report: a single target language of a project.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisDocument {
    pub project_name: String,
    pub language: String,
    pub records: Vec<FileRecord>,
}

/// Grouped match-band word counts for one translated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub sequence_id: u32,
    pub file_name: String,
    pub no_match: u64,
    pub low_fuzzy: u64,
    pub high_fuzzy: u64,
    pub full_match: u64,
    pub repetitions: u64,
    pub full_match_and_reps: u64,
    pub total_gross: u64,
    pub weighted_net: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub language: String,
    pub files: usize,
    pub total_words: u64,
    pub weighted_words: u64,
}

impl AnalysisDocument {
    pub fn summary(&self) -> LanguageSummary {
        LanguageSummary {
            language: self.language.clone(),
            files: self.records.len(),
            total_words: self
                .records
                .iter()
                .map(|r| r.total_gross)
                .fold(0, u64::saturating_add),
            weighted_words: self
                .records
                .iter()
                .map(|r| r.weighted_net)
                .fold(0, u64::saturating_add),
        }
    }
}
