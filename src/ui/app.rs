//! Application state and intent dispatch.

use crate::api::{ApiCommand, ApiCommandSender, ApiOutcome, Student};
use crate::config::Config;
use crate::ui::confirm::{
    ConfirmChoice, ConfirmDeleteIntent, ConfirmDeleteReducer, ConfirmDeleteState,
};
use crate::ui::form::{StudentFormIntent, StudentFormReducer, StudentFormState};
use crate::ui::mvi::Reducer;
use crate::ui::notice::NoticeBoard;
use crate::ui::roster::{LoadStatus, RosterIntent, RosterReducer, RosterState};
use tracing::{debug, warn};

/// Generic MVI dispatch: takes the current state, runs the reducer, stores
/// the result.
macro_rules! dispatch_mvi {
    ($self:ident, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owner of every UI surface and the only place reducers run.
///
/// Effects (service calls, notices) happen here, around the dispatches;
/// the reducers themselves stay pure.
pub struct App {
    should_quit: bool,
    /// The student collection.
    roster: RosterState,
    /// The creation overlay.
    form: StudentFormState,
    /// The delete confirmation dialog.
    confirm: ConfirmDeleteState,
    /// Transient outcome notices.
    notices: NoticeBoard,
    /// Row targeted by table actions, clamped to the collection.
    row_selection: usize,
    /// Generation of the newest issued fetch. Outcomes carrying an older
    /// generation are dropped instead of applied.
    fetch_generation: u64,
    /// Command channel into the API worker, once wired.
    api: Option<ApiCommandSender>,
    /// Animation counter for the busy spinner.
    spinner_tick: u8,
    /// Base URL shown in the header.
    service_label: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            roster: RosterState::default(),
            form: StudentFormState::default(),
            confirm: ConfirmDeleteState::default(),
            notices: NoticeBoard::new(config.ui.notice_ttl()),
            row_selection: 0,
            fetch_generation: 0,
            api: None,
            spinner_tick: 0,
            service_label: config.api.base_url.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api = Some(sender);
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn form(&self) -> &StudentFormState {
        &self.form
    }

    pub fn confirm(&self) -> &ConfirmDeleteState {
        &self.confirm
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn row_selection(&self) -> usize {
        self.row_selection
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn service_label(&self) -> &str {
        &self.service_label
    }

    pub fn selected_student(&self) -> Option<&Student> {
        self.roster.students.get(self.row_selection)
    }

    pub fn dispatch_roster(&mut self, intent: RosterIntent) {
        dispatch_mvi!(self, roster, RosterReducer, intent);
    }

    pub fn dispatch_form(&mut self, intent: StudentFormIntent) {
        dispatch_mvi!(self, form, StudentFormReducer, intent);
    }

    pub fn dispatch_confirm(&mut self, intent: ConfirmDeleteIntent) {
        dispatch_mvi!(self, confirm, ConfirmDeleteReducer, intent);
    }

    /// Periodic upkeep driven by the runtime tick.
    pub fn on_tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
        self.notices.prune();
    }

    /// Issue a collection fetch under a fresh generation.
    ///
    /// Called once on startup and again for every retry or refresh. Any
    /// outcome still in flight from an earlier call becomes stale the
    /// moment the generation advances.
    pub fn request_fetch(&mut self) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.dispatch_roster(RosterIntent::FetchStarted);
        self.send_command(ApiCommand::FetchStudents { generation });
    }

    /// Resynchronize after a mutation. Same path as `request_fetch`; the
    /// name marks the call sites that react to a confirmed server change.
    pub fn request_refresh(&mut self) {
        self.request_fetch();
    }

    /// Open the creation overlay. Only available once the collection is
    /// ready, matching the add affordance on screen.
    pub fn open_form(&mut self) {
        if !matches!(self.roster.status, LoadStatus::Ready) {
            return;
        }
        self.dispatch_form(StudentFormIntent::Open);
    }

    pub fn close_form(&mut self) {
        self.dispatch_form(StudentFormIntent::Close);
    }

    /// Submit the overlay as typed. No client-side validation: the service
    /// decides, and a rejection comes back as a failure notice with the
    /// inputs kept for correction.
    pub fn submit_form(&mut self) {
        if self.form.is_submitting() {
            return;
        }
        let Some(student) = self.form.payload() else {
            return;
        };
        self.dispatch_form(StudentFormIntent::SubmitStarted);
        self.send_command(ApiCommand::CreateStudent { student });
    }

    /// Open the confirmation dialog for the currently selected row.
    ///
    /// Gated like `open_form`: rows are only actionable while the table is
    /// actually on screen, not while retained records hide behind the busy
    /// or failure panel.
    pub fn open_delete_confirmation(&mut self) {
        if !matches!(self.roster.status, LoadStatus::Ready) {
            return;
        }
        let Some(student) = self.selected_student() else {
            return;
        };
        let student_id = student.id;
        let student_name = student.name.clone();
        self.dispatch_confirm(ConfirmDeleteIntent::Open {
            student_id,
            student_name,
        });
    }

    /// Act on the dialog's highlighted button.
    pub fn activate_confirm_selection(&mut self) {
        match self.confirm.selected() {
            ConfirmChoice::Yes => self.confirm_delete(),
            ConfirmChoice::No => self.cancel_delete(),
        }
    }

    /// Affirmative confirmation: close the dialog and issue the delete.
    pub fn confirm_delete(&mut self) {
        let Some((id, _)) = self.confirm.target() else {
            return;
        };
        self.dispatch_confirm(ConfirmDeleteIntent::Cancel);
        self.send_command(ApiCommand::DeleteStudent { id });
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch_confirm(ConfirmDeleteIntent::Cancel);
    }

    /// Move the row selection by `delta`, wrapping over both ends.
    pub fn move_row_selection(&mut self, delta: i32) {
        let len = self.roster.students.len();
        if len == 0 {
            self.row_selection = 0;
            return;
        }
        let next = (self.row_selection as i32 + delta).rem_euclid(len as i32);
        self.row_selection = next as usize;
    }

    fn clamp_row_selection(&mut self) {
        let len = self.roster.students.len();
        if len == 0 {
            self.row_selection = 0;
        } else if self.row_selection >= len {
            self.row_selection = len - 1;
        }
    }

    /// Apply a settled service call to the local state.
    pub fn handle_api_outcome(&mut self, outcome: ApiOutcome) {
        match outcome {
            ApiOutcome::Fetched { generation, result } => {
                if generation != self.fetch_generation {
                    debug!(
                        generation,
                        latest = self.fetch_generation,
                        "dropping stale fetch outcome"
                    );
                    return;
                }
                match result {
                    Ok(students) => {
                        self.dispatch_roster(RosterIntent::Loaded { students });
                        self.clamp_row_selection();
                    }
                    Err(err) => {
                        let summary = err.to_string();
                        self.notices
                            .notify_failure("There was an issue", summary.clone());
                        self.dispatch_roster(RosterIntent::Failed { summary });
                    }
                }
            }
            ApiOutcome::Created { name, result } => match result {
                Ok(()) => {
                    self.notices.notify_success(
                        "Student successfully added",
                        format!("{name} was added to the system"),
                    );
                    self.dispatch_form(StudentFormIntent::Close);
                    self.request_refresh();
                }
                Err(err) => {
                    self.notices
                        .notify_failure("There was an issue", err.to_string());
                    self.dispatch_form(StudentFormIntent::SubmitFailed);
                }
            },
            ApiOutcome::Deleted { id, result } => match result {
                Ok(()) => {
                    self.notices.notify_success(
                        "Student deleted",
                        format!("Student with the id of {id} was deleted successfully."),
                    );
                    self.request_refresh();
                }
                Err(err) => {
                    self.notices
                        .notify_failure("There was an issue", err.to_string());
                }
            },
        }
    }

    fn send_command(&mut self, command: ApiCommand) {
        let Some(sender) = &self.api else {
            debug!("API command issued before the worker was wired, dropping");
            return;
        };
        if let Err(err) = sender.try_send(command) {
            warn!(error = %err, "API command queue rejected a command");
            self.notices.notify_failure(
                "There was an issue",
                "The service worker is not accepting requests.".to_string(),
            );
        }
    }
}
