use tracing::debug;

use super::styles::{table_style, title_style};
use super::types::*;
use super::utils::{column_letter, SheetNamer};
use crate::models::{AnalysisDocument, FileRecord};

/// Lay out one sheet per document, in input order.
///
/// Pure: the import timestamp comes from the caller and nothing is written.
/// Sheet names are unique within the returned plan only.
pub fn assemble_workbook(documents: &[AnalysisDocument], import_time: &str) -> WorkbookPlan {
    let mut namer = SheetNamer::new();

    let sheets = documents
        .iter()
        .map(|document| {
            let name = namer.claim(&document.language);
            debug!(
                "Laying out sheet '{}' with {} record(s)",
                name,
                document.records.len()
            );
            build_sheet(name, document, import_time)
        })
        .collect();

    WorkbookPlan { sheets }
}

fn build_sheet(name: String, document: &AnalysisDocument, import_time: &str) -> SheetPlan {
    let mut cells = Vec::with_capacity((document.records.len() + 3) * HEADERS.len() + 2);

    cells.push(PlannedCell {
        row: PROJECT_ROW,
        col: ID_COL,
        value: CellValue::Text(format!("Project: {}", document.project_name)),
        style: title_style(),
    });
    cells.push(PlannedCell {
        row: IMPORTED_ROW,
        col: ID_COL,
        value: CellValue::Text(format!("Imported on {}", import_time)),
        style: CellStyle::PLAIN,
    });

    for (col, header) in (ID_COL..).zip(HEADERS) {
        cells.push(PlannedCell {
            row: HEADER_ROW,
            col,
            value: CellValue::Text(header.to_string()),
            style: table_style(RowClass::Header, col),
        });
    }

    let mut row = FIRST_DATA_ROW;
    for record in &document.records {
        for (col, value) in (ID_COL..).zip(record_values(record)) {
            cells.push(PlannedCell {
                row,
                col,
                value,
                style: table_style(RowClass::Data, col),
            });
        }
        row += 1;
    }

    let totals_row = row;
    // One-based spreadsheet rows spanned by the data.
    let first = FIRST_DATA_ROW + 1;
    let last = totals_row;
    for col in ID_COL..=LAST_COL {
        let value = match col {
            ID_COL => CellValue::Blank,
            FILE_NAME_COL => CellValue::Text("Totals".to_string()),
            _ => {
                let letter = column_letter(col);
                CellValue::Formula(format!("=SUM({letter}{first}:{letter}{last})"))
            }
        };
        cells.push(PlannedCell {
            row: totals_row,
            col,
            value,
            style: table_style(RowClass::Totals, col),
        });
    }

    SheetPlan {
        name,
        column_widths: COLUMN_WIDTHS,
        cells,
    }
}

fn record_values(record: &FileRecord) -> [CellValue; 10] {
    [
        CellValue::Number(record.sequence_id as f64),
        CellValue::Text(record.file_name.clone()),
        CellValue::Number(record.no_match as f64),
        CellValue::Number(record.low_fuzzy as f64),
        CellValue::Number(record.high_fuzzy as f64),
        CellValue::Number(record.full_match as f64),
        CellValue::Number(record.repetitions as f64),
        CellValue::Number(record.full_match_and_reps as f64),
        CellValue::Number(record.total_gross as f64),
        CellValue::Number(record.weighted_net as f64),
    ]
}
