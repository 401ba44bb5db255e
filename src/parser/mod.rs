pub mod html;
pub mod report;

pub use crate::error::ParseError;
pub use html::extract_payload;
pub use report::{parse_report, parse_report_file};
