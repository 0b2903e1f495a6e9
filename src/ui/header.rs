use crate::ui::roster::LoadStatus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Top bar: sync indicator, app name and the service this view is
    /// bound to.
    pub fn widget(&self, service: &str, status: &LoadStatus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_style) = match status {
            LoadStatus::Ready => ("🟢", Style::default().fg(STATUS_OK)),
            LoadStatus::Loading => ("🟡", Style::default().fg(HEADER_SEPARATOR)),
            LoadStatus::Failed { .. } => ("🔴", Style::default().fg(STATUS_ERROR)),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(dot, dot_style),
            Span::styled("  ", text_style),
            Span::styled("Roster", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(service.to_string(), text_style.add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
