pub mod element;
pub mod issue;
pub mod report;
pub mod table;

pub use element::Element;
pub use issue::{Issue, IssueRow, IssueType, COLUMNS};
pub use report::{Model, Report, Resolved, UNKNOWN_MODEL};
pub use table::{flatten, IssueTable};
