use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which surface currently receives keys, mirroring the routing in
/// [`crate::ui::input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterFocus {
    Roster,
    Form,
    Confirm,
}

impl FooterFocus {
    fn hints(self) -> &'static str {
        match self {
            FooterFocus::Roster => " a: Add │ d: Delete │ r: Refresh │ ↑/↓: Select │ q: Quit",
            FooterFocus::Form => " Enter: Save │ Tab/↓: Next │ ⇧Tab/↑: Previous │ Esc: Cancel",
            FooterFocus::Confirm => " ←/→: Choose │ Enter: Apply │ y: Yes │ n: No │ Esc: Cancel",
        }
    }
}

/// Bottom bar: key hints for the focused surface, version on the right.
pub fn key_hints(focus: FooterFocus, area: Rect) -> Paragraph<'static> {
    let hints = focus.hints();
    let version = format!("v{VERSION} ");

    // Pad by char count, the hint glyphs are multi-byte.
    let content_width = area.width.saturating_sub(2) as usize;
    let used = hints.chars().count() + version.chars().count();
    let gap = " ".repeat(content_width.saturating_sub(used));

    let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, style),
        Span::styled(gap, style),
        Span::styled(version, style),
    ]);

    Paragraph::new(line).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_focus_names_a_cancel_or_quit_key() {
        for focus in [FooterFocus::Roster, FooterFocus::Form, FooterFocus::Confirm] {
            let hints = focus.hints();
            assert!(hints.contains("Esc") || hints.contains("q:"), "{hints}");
        }
    }

    #[test]
    fn dialog_hints_do_not_advertise_table_keys() {
        assert!(!FooterFocus::Confirm.hints().contains("d: Delete"));
        assert!(!FooterFocus::Form.hints().contains("a: Add"));
    }
}
