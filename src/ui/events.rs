//! Event plumbing between the input thread, the API worker and the UI
//! loop.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tracing::error;

use crate::api::ApiOutcome;

/// Everything the UI loop can wake up for.
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic timer. Drives the spinner and notice expiry.
    Tick,
    /// A service call settled.
    Api(ApiOutcome),
}

/// Fans terminal input and ticks into one channel.
///
/// The API worker clones `sender()` so its outcomes arrive through the
/// same queue, giving the UI loop a single thing to wait on.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                return;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                return;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            error!(error = %err, "failed to read a terminal event");
                            return;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        error!(error = %err, "failed to poll for terminal events");
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    /// Wait for the next event, up to `timeout`.
    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// A sender for other threads to push events through.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
