//! Keyboard routing.
//!
//! One key event goes to exactly one surface: the confirmation dialog wins
//! over the creation overlay, which wins over the table. Ctrl+C quits from
//! anywhere.

use crate::ui::app::App;
use crate::ui::confirm::ConfirmDeleteIntent;
use crate::ui::form::StudentFormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    if app.confirm().is_visible() {
        handle_confirm_key(app, key);
    } else if app.form().is_visible() {
        handle_form_key(app, key);
    } else {
        handle_roster_key(app, key);
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => app.cancel_delete(),
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.dispatch_confirm(ConfirmDeleteIntent::Toggle)
        }
        KeyCode::Enter => app.activate_confirm_selection(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if app.form().is_submitting() {
        // Inputs are locked while the create call is in flight. Esc still
        // closes.
        if key.code == KeyCode::Esc {
            app.close_form();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(StudentFormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(StudentFormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(StudentFormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(StudentFormIntent::Input { ch })
        }
        _ => {}
    }
}

fn handle_roster_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_confirmation(),
        KeyCode::Char('r') => app.request_fetch(),
        KeyCode::Up | KeyCode::Char('k') => app.move_row_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_row_selection(1),
        _ => {}
    }
}
