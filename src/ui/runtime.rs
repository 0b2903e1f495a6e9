//! Main loop: draw, wait for one event, apply it, repeat.

use crate::api::{spawn_worker, ApiClient};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use tracing::info;

/// Run the client against the service named by `config`. Blocks until the
/// operator quits.
pub fn run(config: &Config) -> io::Result<()> {
    let client = ApiClient::new(
        &config.api.base_url,
        config.api.connect_timeout(),
        config.api.request_timeout(),
    )
    .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(config);
    app.set_api_sender(spawn_worker(client, events.sender()));
    // First synchronization happens immediately; the first frame shows the
    // busy panel until the outcome arrives.
    app.request_fetch();
    info!(base_url = %config.api.base_url, "roster client started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size on its own.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(outcome)) => app.handle_api_outcome(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    info!("roster client stopped");
    Ok(())
}
