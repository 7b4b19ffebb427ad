pub mod assembler;
pub mod styles;
pub mod types;
pub mod utils;
pub mod writer;

pub use assembler::assemble_workbook;
pub use types::{CellValue, SheetPlan, WorkbookPlan};
