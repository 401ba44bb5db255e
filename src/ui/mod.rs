pub mod picker;
pub mod view;

pub use picker::{Entry, EntryKind, FilePicker, PickerOutcome};

use color_eyre::Result;
use std::path::Path;

/// Opens the interactive picker in `start_dir` and blocks until the user chooses
/// an HTML report or backs out. The terminal is restored in both cases.
pub fn pick_report(start_dir: &Path) -> Result<PickerOutcome> {
    let picker = FilePicker::new(start_dir)?;
    let terminal = ratatui::init();
    let result = picker.run(terminal);
    ratatui::restore();
    result
}
