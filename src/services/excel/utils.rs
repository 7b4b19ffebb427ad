use std::collections::HashSet;

use super::types::{ELLIPSIS, SHEET_NAME_BASE, SHEET_NAME_LIMIT};

const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const FALLBACK_SHEET_NAME: &str = "Sheet";

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Replace characters a spreadsheet refuses in sheet names.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned = name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) || c.is_control() { '_' } else { c })
        .collect::<String>();

    let cleaned = cleaned.trim_matches('\'');

    if cleaned.trim().is_empty() {
        FALLBACK_SHEET_NAME.to_string()
    } else if cleaned.eq_ignore_ascii_case("history") {
        // Reserved by Excel.
        format!("{}_", cleaned)
    } else {
        cleaned.to_string()
    }
}

/// Clip a name to the sheet-name limit, marking the cut with an ellipsis.
pub fn truncate_sheet_name(name: &str) -> String {
    if name.chars().count() <= SHEET_NAME_LIMIT {
        name.to_string()
    } else {
        format!("{}{}", take_chars(name, SHEET_NAME_BASE), ELLIPSIS)
    }
}

/// Hands out unique sheet names for a single workbook.
///
/// Names are compared case-insensitively. A clash gets `_1`, `_2`, ...
/// appended to the first 28 characters of the candidate, fewer once the
/// suffix grows past three characters.
#[derive(Debug, Default)]
pub struct SheetNamer {
    used: HashSet<String>,
}

impl SheetNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, language: &str) -> String {
        let original_name = truncate_sheet_name(&sanitize_sheet_name(language));

        let mut name = original_name.clone();
        let mut counter = 1;
        while !self.used.insert(name.to_lowercase()) {
            let suffix = format!("_{}", counter);
            let room = SHEET_NAME_BASE.min(SHEET_NAME_LIMIT - suffix.len());
            name = format!("{}{}", take_chars(&original_name, room), suffix);
            counter += 1;
        }

        name
    }
}

/// Spreadsheet column letters for a zero-based column index.
pub fn column_letter(col: u16) -> String {
    let mut n = col as u32 + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
