use crate::ui::view::draw_picker;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Directory,
    Report,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(PathBuf),
    Cancelled,
}

/// Directory browser that only offers HTML files.
pub struct FilePicker {
    pub dir: PathBuf,
    pub entries: Vec<Entry>,
    pub selected: usize,
    /// Last directory that could not be opened, shown in the footer.
    pub error: Option<String>,
    outcome: Option<PickerOutcome>,
}

impl FilePicker {
    pub fn new<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = std::fs::canonicalize(dir)?;
        let entries = list_entries(&dir)?;
        Ok(Self {
            dir,
            entries,
            selected: 0,
            error: None,
            outcome: None,
        })
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<PickerOutcome> {
        while self.outcome.is_none() {
            terminal.draw(|frame| draw_picker(frame, &self))?;
            self.handle_events()?;
        }
        Ok(self.outcome.unwrap_or(PickerOutcome::Cancelled))
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.outcome = Some(PickerOutcome::Cancelled),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => self.go_parent(),
            KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') => self.activate(),
            _ => {}
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&PickerOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    #[must_use]
    pub fn report_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::Report)
            .count()
    }

    fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn next(&mut self) {
        if self.selected < self.entries.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    fn activate(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };
        match entry.kind {
            EntryKind::Report => self.outcome = Some(PickerOutcome::Selected(entry.path)),
            EntryKind::Parent | EntryKind::Directory => self.change_dir(entry.path),
        }
    }

    fn go_parent(&mut self) {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            self.change_dir(parent);
        }
    }

    fn change_dir(&mut self, target: PathBuf) {
        match list_entries(&target) {
            Ok(entries) => {
                // Coming back up, keep the cursor on the directory we left.
                let previous = self.dir.clone();
                self.selected = entries
                    .iter()
                    .position(|e| e.path == previous)
                    .unwrap_or(0);
                self.entries = entries;
                self.dir = target;
                self.error = None;
            }
            Err(e) => self.error = Some(format!("{}: {e}", target.display())),
        }
    }
}

/// `..`, then visible subdirectories, then HTML files; each group sorted by name,
/// ignoring case.
pub fn list_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut directories = Vec::new();
    let mut reports = Vec::new();

    for item in std::fs::read_dir(dir)? {
        let item = item?;
        let name = item.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = item.path();
        // Follow symlinks so linked folders stay browsable.
        let Ok(metadata) = std::fs::metadata(&path) else {
            continue;
        };

        if metadata.is_dir() {
            directories.push(Entry {
                name,
                path,
                kind: EntryKind::Directory,
            });
        } else if is_report_file(&path) {
            reports.push(Entry {
                name,
                path,
                kind: EntryKind::Report,
            });
        }
    }

    directories.sort_by_key(|e| e.name.to_lowercase());
    reports.sort_by_key(|e| e.name.to_lowercase());

    let parent = dir.parent().map(|p| Entry {
        name: "..".to_string(),
        path: p.to_path_buf(),
        kind: EntryKind::Parent,
    });

    Ok(parent.into_iter().chain(directories).chain(reports).collect())
}

#[must_use]
pub fn is_report_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}
