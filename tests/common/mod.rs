//! Helpers shared across the integration tests: app builders, fixtures,
//! key presses and the mock roster service.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::Receiver;

use roster::api::{ApiCommand, Student};
use roster::config::Config;
use roster::ui::app::App;
use roster::ui::input::handle_key;
use roster::ui::roster::RosterIntent;

// -- App builders -------------------------------------------------------------

/// App wired to nothing. Good enough for pure state transitions.
pub fn make_app() -> App {
    App::new(&Config::default())
}

/// App plus the receiving end of its command channel, for asserting what
/// it sends to the API worker.
pub fn make_app_with_channel() -> (App, Receiver<ApiCommand>) {
    let mut app = make_app();
    let (tx, rx) = tokio::sync::mpsc::channel(8);
    app.set_api_sender(tx);
    (app, rx)
}

/// Put `students` into the app as a fresh successful fetch.
pub fn load_students(app: &mut App, students: Vec<Student>) {
    app.dispatch_roster(RosterIntent::Loaded { students });
}

// -- Fixtures -----------------------------------------------------------------

pub fn student(id: i64, name: &str) -> Student {
    Student {
        id,
        name: name.to_string(),
        email: format!(
            "{}@example.com",
            name.to_lowercase().replace(char::is_whitespace, ".")
        ),
        gender: "FEMALE".to_string(),
    }
}

pub fn sample_students() -> Vec<Student> {
    vec![
        student(1, "Tom Riddle"),
        student(2, "Maria Jones"),
        student(3, "Bill"),
    ]
}

// -- Key helpers --------------------------------------------------------------

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::empty()));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

// -- Channel assertions -------------------------------------------------------

/// Drain every pending command without waiting.
pub fn drain_commands(rx: &mut Receiver<ApiCommand>) -> Vec<ApiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}
