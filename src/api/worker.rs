//! Background worker executing roster service calls.
//!
//! The UI thread enqueues [`ApiCommand`]s and gets [`ApiOutcome`]s back
//! through the shared app event channel. A single task drains the queue in
//! order, so a refresh enqueued right after a mutation always observes that
//! mutation's effect on the server.

use std::sync::mpsc::Sender;
use std::thread;

use tracing::{debug, error};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::{NewStudent, Student};
use crate::ui::events::AppEvent;

/// Queue depth for UI to worker commands.
const COMMAND_BUFFER: usize = 32;

/// Sender half handed to the UI thread.
pub type ApiCommandSender = tokio::sync::mpsc::Sender<ApiCommand>;

/// Requests the UI can make against the service.
#[derive(Debug)]
pub enum ApiCommand {
    /// Reload the whole collection. `generation` is echoed back in the
    /// outcome so the app can discard replies superseded by a newer fetch.
    FetchStudents { generation: u64 },
    /// Create a record from the overlay's current inputs.
    CreateStudent { student: NewStudent },
    /// Delete one record by id.
    DeleteStudent { id: i64 },
}

/// A settled service call, delivered to the UI as [`AppEvent::Api`].
#[derive(Debug)]
pub enum ApiOutcome {
    Fetched {
        generation: u64,
        result: Result<Vec<Student>, ApiError>,
    },
    /// `name` is carried through so the success notice can name the record
    /// without another lookup.
    Created {
        name: String,
        result: Result<(), ApiError>,
    },
    Deleted {
        id: i64,
        result: Result<(), ApiError>,
    },
}

/// Spawn the worker on its own single-threaded runtime.
///
/// Returns the command sender. The thread drains commands until the last
/// sender is dropped or the UI stops listening, then exits on its own.
pub fn spawn_worker(client: ApiClient, events: Sender<AppEvent>) -> ApiCommandSender {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<ApiCommand>(COMMAND_BUFFER);

    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(error = %err, "failed to start the API worker runtime");
                return;
            }
        };

        runtime.block_on(async move {
            while let Some(command) = rx.recv().await {
                let outcome = run_command(&client, command).await;
                if events.send(AppEvent::Api(outcome)).is_err() {
                    break;
                }
            }
        });

        debug!("API worker stopped");
    });

    tx
}

async fn run_command(client: &ApiClient, command: ApiCommand) -> ApiOutcome {
    match command {
        ApiCommand::FetchStudents { generation } => {
            debug!(generation, "fetching students");
            ApiOutcome::Fetched {
                generation,
                result: client.list_students().await,
            }
        }
        ApiCommand::CreateStudent { student } => {
            debug!(name = %student.name, "creating student");
            let name = student.name.clone();
            ApiOutcome::Created {
                name,
                result: client.create_student(&student).await,
            }
        }
        ApiCommand::DeleteStudent { id } => {
            debug!(id, "deleting student");
            ApiOutcome::Deleted {
                id,
                result: client.delete_student(id).await,
            }
        }
    }
}
