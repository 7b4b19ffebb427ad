pub const HEADERS: [&str; 10] = [
    "ID",
    "File Name",
    "No Match",
    "85-94",
    "95-99",
    "100%",
    "Reps",
    "100% Reps",
    "Total (Gross)",
    "Weighted (Net)",
];

// Zero-based positions as rust_xlsxwriter addresses them.
pub const PROJECT_ROW: u32 = 0;
pub const IMPORTED_ROW: u32 = 1;
pub const HEADER_ROW: u32 = 2;
pub const FIRST_DATA_ROW: u32 = 3;

pub const ID_COL: u16 = 0;
pub const FILE_NAME_COL: u16 = 1;
pub const FIRST_NUMERIC_COL: u16 = 2;
pub const LAST_COL: u16 = 9;
pub const SHADED_COLS: [u16; 3] = [5, 6, 7];

pub const COLUMN_WIDTHS: [f64; 10] = [6.0, 60.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 16.0, 16.0];

pub const HEADER_FILL: u32 = 0x4472C4;
pub const HEADER_FONT_COLOR: u32 = 0xFFFFFF;
pub const SHADED_FILL: u32 = 0xD9D9D9;

pub const SHEET_NAME_LIMIT: usize = 31;
pub const SHEET_NAME_BASE: usize = 28;
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowClass {
    Header,
    Data,
    Totals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    None,
    Thin,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HAlign {
    General,
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub bold: bool,
    pub font_color: Option<u32>,
    pub fill: Option<u32>,
    pub align: HAlign,
    pub vertical_center: bool,
    pub top: Edge,
    pub bottom: Edge,
    pub left: Edge,
    pub right: Edge,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle {
        bold: false,
        font_color: None,
        fill: None,
        align: HAlign::General,
        vertical_center: false,
        top: Edge::None,
        bottom: Edge::None,
        left: Edge::None,
        right: Edge::None,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Formula(String),
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCell {
    pub row: u32,
    pub col: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

/// Everything needed to write one worksheet, in write order.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub name: String,
    pub column_widths: [f64; 10],
    pub cells: Vec<PlannedCell>,
}

impl SheetPlan {
    pub fn cell(&self, row: u32, col: u16) -> Option<&PlannedCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    pub fn last_row(&self) -> u32 {
        self.cells.iter().map(|c| c.row).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookPlan {
    pub sheets: Vec<SheetPlan>,
}

impl WorkbookPlan {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}
