pub mod csv;
pub mod json;
pub mod sheet_name;
pub mod xlsx;

pub use crate::error::ExportError;
pub use self::csv::export_csv;
pub use json::export_json;
pub use sheet_name::{sanitize_sheet_name, unique_sheet_name, SheetNamer};
pub use xlsx::{build_workbook, export_xlsx};
