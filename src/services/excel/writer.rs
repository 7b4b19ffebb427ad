use std::collections::HashMap;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};

use super::types::*;
use crate::error::ExcelError;

impl WorkbookPlan {
    /// Serialise the plan as an XLSX package held in memory.
    pub fn to_xlsx_bytes(&self) -> Result<Vec<u8>, ExcelError> {
        if self.sheets.is_empty() {
            return Err(ExcelError::NoSheets);
        }

        let start = std::time::Instant::now();
        let mut workbook = Workbook::new();
        let mut formats: HashMap<CellStyle, Format> = HashMap::new();

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (col, width) in (0u16..).zip(sheet.column_widths) {
                worksheet.set_column_width(col, width)?;
            }

            for cell in &sheet.cells {
                let format = formats
                    .entry(cell.style)
                    .or_insert_with(|| to_format(&cell.style));

                match &cell.value {
                    CellValue::Text(text) => {
                        worksheet.write_string_with_format(cell.row, cell.col, text, format)?;
                    }
                    CellValue::Number(number) => {
                        worksheet.write_number_with_format(cell.row, cell.col, *number, format)?;
                    }
                    CellValue::Formula(formula) => {
                        worksheet.write_formula_with_format(
                            cell.row,
                            cell.col,
                            formula.as_str(),
                            format,
                        )?;
                    }
                    CellValue::Blank => {
                        worksheet.write_blank(cell.row, cell.col, format)?;
                    }
                }
            }
        }

        let buffer = workbook.save_to_buffer()?;
        tracing::info!(
            "Wrote workbook with {} sheet(s), {}KB in {:?}",
            self.sheets.len(),
            buffer.len() / 1024,
            start.elapsed()
        );

        Ok(buffer)
    }
}

fn border(edge: Edge) -> FormatBorder {
    match edge {
        Edge::None => FormatBorder::None,
        Edge::Thin => FormatBorder::Thin,
        Edge::Medium => FormatBorder::Medium,
    }
}

fn to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    if style.bold {
        format = format.set_bold();
    }
    if let Some(color) = style.font_color {
        format = format.set_font_color(Color::RGB(color));
    }
    if let Some(fill) = style.fill {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(fill));
    }
    match style.align {
        HAlign::Left => format = format.set_align(FormatAlign::Left),
        HAlign::Center => format = format.set_align(FormatAlign::Center),
        HAlign::General => {}
    }
    if style.vertical_center {
        format = format.set_align(FormatAlign::VerticalCenter);
    }

    format
        .set_border_top(border(style.top))
        .set_border_bottom(border(style.bottom))
        .set_border_left(border(style.left))
        .set_border_right(border(style.right))
}
