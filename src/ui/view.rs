use crate::ui::picker::{EntryKind, FilePicker};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);

pub fn draw_picker(frame: &mut Frame, picker: &FilePicker) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(5),    // Entries
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], picker);
    draw_entries(frame, chunks[1], picker);

    match &picker.error {
        Some(error) => draw_footer(frame, chunks[2], &format!(" {error} "), BRAND_ORANGE),
        None => draw_footer(
            frame,
            chunks[2],
            " ↑↓ Navigate | Enter Open/Select | ← Parent | q Cancel ",
            BRAND_MUTED,
        ),
    }
}

fn draw_header(frame: &mut Frame, area: Rect, picker: &FilePicker) {
    let title = format!(
        " Upgrade Report | {} | {} HTML reports ",
        picker.dir.display(),
        picker.report_count()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_entries(frame: &mut Frame, area: Rect, picker: &FilePicker) {
    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|entry| {
            let line = match entry.kind {
                EntryKind::Parent => {
                    Line::from(Span::styled("..", Style::default().fg(BRAND_MUTED)))
                }
                EntryKind::Directory => Line::from(vec![
                    Span::styled(&entry.name, Style::default().fg(BRAND_ORANGE)),
                    Span::styled("/", Style::default().fg(BRAND_MUTED)),
                ]),
                EntryKind::Report => Line::from(Span::styled(
                    &entry.name,
                    Style::default().fg(BRAND_GREEN),
                )),
            };
            ListItem::new(line)
        })
        .collect();

    let title = format!(" Select upgrade log ({}) ", picker.entries.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRAND_ORANGE)),
        )
        .highlight_style(SELECTED_STYLE)
        .highlight_symbol("► ");

    let mut state = ListState::default().with_selected(Some(picker.selected));
    frame.render_stateful_widget(list, area, &mut state);

    let visible_rows = area.height.saturating_sub(2) as usize;
    if picker.entries.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(picker.entries.len()).position(picker.selected);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;

    #[test]
    fn renders_directory_and_reports() {
        let d = tempfile::tempdir().unwrap();
        fs::write(d.path().join("UpgradeLog.html"), "").unwrap();
        let picker = FilePicker::new(d.path()).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(160, 12)).unwrap();
        terminal.draw(|frame| draw_picker(frame, &picker)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(screen.contains("UpgradeLog.html"));
        assert!(screen.contains("1 HTML reports"));
        assert!(screen.contains("q Cancel"));
    }
}
