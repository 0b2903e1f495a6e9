use crate::ui::app::App;
use crate::ui::confirm::{ConfirmChoice, ConfirmDeleteState};
use crate::ui::footer::{key_hints, FooterFocus};
use crate::ui::form::StudentFormState;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::notice::NoticeKind;
use crate::ui::roster::RosterView;
use crate::ui::table::{student_table, toolbar_line};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, PRIMARY, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, TableState, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.service_label(), &app.roster().status),
        header,
    );

    frame.render_widget(Clear, body);
    draw_body(frame, app, body);

    let focus = if app.confirm().is_visible() {
        FooterFocus::Confirm
    } else if app.form().is_visible() {
        FooterFocus::Form
    } else {
        FooterFocus::Roster
    };
    frame.render_widget(key_hints(focus, footer), footer);

    draw_form_overlay(frame, app, body);
    draw_confirm_dialog(frame, app, body);
    draw_notices(frame, app, body);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    match app.roster().view() {
        RosterView::Busy => draw_busy(frame, app, body),
        RosterView::EmptyCollection => {
            draw_toolbar(frame, 0, body);
            draw_empty_placeholder(frame, body);
        }
        RosterView::Table { count } => {
            draw_toolbar(frame, count, body);
            draw_table(frame, app, body);
        }
        RosterView::Error { summary } => draw_fetch_error(frame, &summary, body),
    }
}

fn draw_toolbar(frame: &mut Frame<'_>, count: usize, body: Rect) {
    if body.height == 0 {
        return;
    }
    let toolbar = Rect { height: 1, ..body };
    frame.render_widget(Paragraph::new(toolbar_line(count)), toolbar);
}

/// Body minus the toolbar line.
fn below_toolbar(body: Rect) -> Rect {
    Rect {
        y: body.y + 1,
        height: body.height.saturating_sub(1),
        ..body
    }
}

fn draw_busy(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let frame_index = app.spinner_tick() as usize % SPINNER_FRAMES.len();
    let line = Line::from(vec![
        Span::styled(SPINNER_FRAMES[frame_index], Style::default().fg(PRIMARY)),
        Span::styled(" Loading students...", Style::default().fg(HEADER_TEXT)),
    ]);
    let area = centered_rect(24, 1, body);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_empty_placeholder(frame: &mut Frame<'_>, body: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "No students in the system",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled("a: Add New Student", Style::default().fg(PRIMARY))),
    ];
    let area = centered_rect(30, 3, below_toolbar(body));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_table(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let students = &app.roster().students;
    let mut table_state = TableState::default();
    if !students.is_empty() {
        table_state.select(Some(app.row_selection()));
    }
    frame.render_stateful_widget(student_table(students), below_toolbar(body), &mut table_state);
}

fn draw_fetch_error(frame: &mut Frame<'_>, summary: &str, body: Rect) {
    let width = (summary.chars().count() as u16 + 4)
        .clamp(30, body.width.max(30))
        .min(body.width);
    let area = centered_rect(width, 6, body);

    let block = Block::default()
        .title(Span::styled(" There was an issue ", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    let lines = vec![
        Line::from(Span::styled(summary.to_string(), Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "r: Retry  q: Quit",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_form_overlay(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let StudentFormState::Visible {
        inputs,
        focused,
        submitting,
    } = app.form()
    else {
        return;
    };

    let mut lines = Vec::with_capacity(inputs.len() * 2 + 2);
    for (index, input) in inputs.iter().enumerate() {
        let has_focus = index == *focused;
        let label_style = if has_focus {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let marker = if has_focus { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{marker}{}", input.label), label_style)));

        let mut value_spans = vec![Span::styled(
            format!("  {}", input.value),
            Style::default().fg(HEADER_TEXT),
        )];
        if has_focus && !submitting {
            value_spans.push(Span::styled("█", Style::default().fg(PRIMARY)));
        }
        lines.push(Line::from(value_spans));
    }

    lines.push(Line::from(""));
    let hint = if *submitting {
        "Submitting..."
    } else {
        "Enter: Submit │ Tab: Next │ Esc: Cancel"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )));

    let area = centered_rect(46, lines.len() as u16 + 2, body);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(" Add New Student ", Style::default().fg(PRIMARY)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_confirm_dialog(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let ConfirmDeleteState::Visible { selected, .. } = app.confirm() else {
        return;
    };
    let Some(prompt) = app.confirm().prompt() else {
        return;
    };

    let selected_style = Style::default()
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    let no_style = if *selected == ConfirmChoice::No {
        selected_style.fg(HEADER_TEXT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let yes_style = if *selected == ConfirmChoice::Yes {
        selected_style.fg(STATUS_ERROR)
    } else {
        Style::default().fg(STATUS_ERROR)
    };

    let lines = vec![
        Line::from(Span::styled(prompt, Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ No ]", no_style),
            Span::raw("    "),
            Span::styled("[ Yes ]", yes_style),
        ])
        .alignment(Alignment::Center),
    ];

    let area = centered_rect(56, 7, body);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(" Delete student ", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_notices(frame: &mut Frame<'_>, app: &App, body: Rect) {
    if app.notices().is_empty() {
        return;
    }

    let width = 44.min(body.width);
    let height: u16 = 4;
    let x = body.x + body.width.saturating_sub(width);
    let mut y = body.y;

    for notice in app.notices().iter() {
        if y + height > body.y + body.height {
            break;
        }
        let area = Rect {
            x,
            y,
            width,
            height,
        };
        let color = match notice.kind {
            NoticeKind::Success => STATUS_OK,
            NoticeKind::Failure => STATUS_ERROR,
        };
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", notice.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(notice.body.clone())
                .style(Style::default().fg(HEADER_TEXT))
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
        y += height;
    }
}
