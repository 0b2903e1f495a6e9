//! Table assembly for the student collection.

use crate::api::Student;
use crate::ui::avatar::{avatar_label, AvatarLabel};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BADGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PRIMARY, STATUS_ERROR,
};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

/// Glyph for records whose trimmed name is empty.
const FALLBACK_AVATAR: &str = "👤";

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(4),
    Constraint::Length(6),
    Constraint::Percentage(24),
    Constraint::Percentage(34),
    Constraint::Length(10),
    Constraint::Min(14),
];

/// Toolbar above the table: add affordance plus the count badge.
pub fn toolbar_line(count: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " a: Add New Student ",
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled("Number of students ", Style::default().fg(HEADER_TEXT)),
        Span::styled(format!("[{count}]"), Style::default().fg(BADGE)),
    ])
}

/// Avatar cell text for a student name.
pub fn avatar_cell_text(name: &str) -> String {
    match avatar_label(name) {
        AvatarLabel::Fallback => FALLBACK_AVATAR.to_string(),
        AvatarLabel::Monogram(text) => text,
    }
}

/// Build the collection table. The selected row is highlighted through the
/// table state passed at render time.
pub fn student_table(students: &[Student]) -> Table<'static> {
    let header = Row::new(vec!["", "Id", "Name", "Email", "Gender", "Actions"]).style(
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'static>> = students.iter().map(student_row).collect();

    Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▸ ")
}

fn student_row(student: &Student) -> Row<'static> {
    Row::new(vec![
        Cell::from(Span::styled(
            avatar_cell_text(&student.name),
            Style::default().fg(PRIMARY),
        )),
        Cell::from(student.id.to_string()),
        Cell::from(student.name.clone()),
        Cell::from(student.email.clone()),
        Cell::from(student.gender.clone()),
        actions_cell(),
    ])
}

/// Delete is live through the selected row. Edit is an inert affordance,
/// shown dimmed.
fn actions_cell() -> Cell<'static> {
    Cell::from(Line::from(vec![
        Span::styled("Delete", Style::default().fg(STATUS_ERROR)),
        Span::raw("  "),
        Span::styled(
            "Edit",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_cell_uses_the_fallback_glyph_for_blank_names() {
        assert_eq!(avatar_cell_text("   "), FALLBACK_AVATAR);
    }

    #[test]
    fn avatar_cell_uses_the_monogram_otherwise() {
        assert_eq!(avatar_cell_text("Maria Jones"), "Ms");
    }
}
