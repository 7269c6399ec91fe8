//! State container for the user directory.
//!
//! Everything the directory shows lives here: the mirrored collection, the
//! form, the create/edit mode, the error slot and the loading flag. It is
//! owned by exactly one [`crate::UserDirectoryClient`] and changes only through
//! the methods below.

use chrono::{DateTime, Utc};

use crate::event::DirectoryEvent;
use crate::form::{Mode, Submission, UserForm};
use crate::user::{User, UserId};

#[derive(Debug, Clone, Default)]
pub struct UserDirectoryState {
    users: Vec<User>,
    form: UserForm,
    mode: Mode,
    error: Option<String>,
    loading: bool,
    last_fetch: Option<DateTime<Utc>>,
    pending_delete: Option<UserId>,
}

impl UserDirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    /// Text inputs write straight into the form.
    pub fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    pub fn pending_delete(&self) -> Option<UserId> {
        self.pending_delete
    }

    /// Enter edit mode for `user` and copy its fields into the form.
    pub fn select_for_edit(&mut self, user: &User) {
        self.mode = Mode::Editing(user.id);
        self.form = UserForm::from_user(user);
    }

    /// Back to create mode with a blank form.
    pub fn reset_form(&mut self) {
        self.mode = Mode::Create;
        self.form.clear();
    }

    /// Turns the current form into a request, or records why it cannot be sent.
    pub fn prepare_submission(&mut self) -> Option<Submission> {
        match self.form.submission(self.mode) {
            Ok(submission) => Some(submission),
            Err(err) => {
                self.apply(DirectoryEvent::Rejected(err.to_string()));
                None
            }
        }
    }

    /// Opens the confirmation gate for deleting `id`.
    pub fn request_delete(&mut self, id: UserId) {
        self.pending_delete = Some(id);
    }

    /// Closes the confirmation gate. Returns the id if the answer was yes.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Option<UserId> {
        let id = self.pending_delete.take()?;
        confirmed.then_some(id)
    }

    pub fn apply_at(&mut self, event: DirectoryEvent, now: DateTime<Utc>) {
        match event {
            DirectoryEvent::LoadStarted => {
                self.loading = true;
            }
            DirectoryEvent::Loaded(users) => {
                self.users = users;
                self.error = None;
                self.loading = false;
                self.last_fetch = Some(now);
            }
            DirectoryEvent::LoadFailed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            DirectoryEvent::Saved => {
                self.reset_form();
                self.error = None;
            }
            // Only `reset_form` or a successful save leave edit mode.
            DirectoryEvent::Deleted(_) => {}
            DirectoryEvent::SaveFailed(message)
            | DirectoryEvent::DeleteFailed(_, message)
            | DirectoryEvent::Rejected(message) => {
                self.error = Some(message);
            }
        }
    }

    pub fn apply(&mut self, event: DirectoryEvent) {
        self.apply_at(event, Utc::now());
    }
}
