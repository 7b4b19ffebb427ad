//! Cell styling for the analysis table, keyed by row class and column.
//!
//! The numeric block (`No Match` through `Weighted (Net)`) is framed by a
//! medium border; every other table edge is thin.

use super::types::*;

pub fn title_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::PLAIN
    }
}

pub fn table_style(row: RowClass, col: u16) -> CellStyle {
    let in_numeric_block = (FIRST_NUMERIC_COL..=LAST_COL).contains(&col);

    let fill = match row {
        RowClass::Header => Some(HEADER_FILL),
        RowClass::Data if SHADED_COLS.contains(&col) => Some(SHADED_FILL),
        _ => None,
    };

    let align = match (row, col) {
        (RowClass::Data, FILE_NAME_COL) => HAlign::Left,
        _ => HAlign::Center,
    };

    CellStyle {
        bold: matches!(row, RowClass::Header | RowClass::Totals),
        font_color: (row == RowClass::Header).then_some(HEADER_FONT_COLOR),
        fill,
        align,
        vertical_center: true,
        top: if row == RowClass::Header && in_numeric_block { Edge::Medium } else { Edge::Thin },
        bottom: if row == RowClass::Totals && in_numeric_block { Edge::Medium } else { Edge::Thin },
        left: if col == FIRST_NUMERIC_COL { Edge::Medium } else { Edge::Thin },
        right: if col == LAST_COL { Edge::Medium } else { Edge::Thin },
    }
}
