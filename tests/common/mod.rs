// Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};

pub const BOUNDARY: &str = "analysis-test-boundary";

/// A minimal analysis report with a single analysed file.
pub fn report(project: &str, language: &str, file: &str, new_words: u64, total: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<task name="analyse">
  <taskInfo taskId="t-1" runAt="2024-05-01 10:00:00">
    <project name="{project}" number="1"/>
    <language lcid="1036" name="{language}"/>
  </taskInfo>
  <file name="{file}" guid="g-1">
    <analyse>
      <perfect segments="0" words="0"/>
      <inContextExact segments="0" words="0"/>
      <exact segments="0" words="0"/>
      <locked segments="0" words="0"/>
      <crossFileRepeated segments="0" words="0"/>
      <repeated segments="0" words="0"/>
      <total segments="5" words="{total}"/>
      <new segments="5" words="{new_words}"/>
      <fuzzy min="50" max="74" segments="0" words="0"/>
      <fuzzy min="75" max="84" segments="0" words="0"/>
      <fuzzy min="85" max="94" segments="0" words="0"/>
      <fuzzy min="95" max="99" segments="0" words="0"/>
      <internalFuzzy min="50" max="74" segments="0" words="0"/>
      <internalFuzzy min="75" max="84" segments="0" words="0"/>
      <internalFuzzy min="85" max="94" segments="0" words="0"/>
      <internalFuzzy min="95" max="99" segments="0" words="0"/>
    </analyse>
  </file>
</task>"#
    )
}

/// Build a multipart/form-data body with one file part per `(file name, content)`.
pub fn multipart_body(files: &[(&str, &str)]) -> Vec<u8> {
    let mut body = String::new();
    for (name, content) in files {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\nContent-Type: application/xml\r\n\r\n{content}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body.into_bytes()
}

pub fn open_xlsx(bytes: Vec<u8>) -> Xlsx<Cursor<Vec<u8>>> {
    open_workbook_from_rs(Cursor::new(bytes)).expect("workbook should open")
}

pub fn number_at(workbook: &mut Xlsx<Cursor<Vec<u8>>>, sheet: &str, row: u32, col: u32) -> f64 {
    let range = workbook.worksheet_range(sheet).expect("sheet should exist");
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => *f,
        Some(Data::Int(i)) => *i as f64,
        other => panic!("expected a number at ({}, {}) in {}, got {:?}", row, col, sheet, other),
    }
}

pub fn text_at(workbook: &mut Xlsx<Cursor<Vec<u8>>>, sheet: &str, row: u32, col: u32) -> String {
    let range = workbook.worksheet_range(sheet).expect("sheet should exist");
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected text at ({}, {}) in {}, got {:?}", row, col, sheet, other),
    }
}

pub fn formula_at(workbook: &mut Xlsx<Cursor<Vec<u8>>>, sheet: &str, row: u32, col: u32) -> String {
    let formulas = workbook.worksheet_formula(sheet).expect("sheet should exist");
    formulas
        .get_value((row, col))
        .map(|f| f.trim_start_matches('=').to_string())
        .unwrap_or_default()
}
