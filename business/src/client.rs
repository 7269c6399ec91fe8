//! The user directory client: one state container plus the operations on it.
//!
//! Operations come in two flavours. The `async fn`s run to completion and
//! apply their results before returning, which suits a CLI or a test. The
//! `spawn_*` variants hand the work to a Tokio runtime and return at once; the
//! owner then calls [`UserDirectoryClient::poll`] (every frame, in a UI) to
//! fold finished results into the state.

use flume::Receiver;
use tokio::runtime::Handle;

use crate::api::DirectoryApi;
use crate::config::DirectoryConfig;
use crate::event::{DirectoryEvent, EventSink};
use crate::form::UserForm;
use crate::state::UserDirectoryState;
use crate::tasks;
use crate::user::UserId;

/// Asks the user whether a record may be deleted.
pub trait ConfirmGate {
    fn confirm(&self, id: UserId) -> bool;
}

impl<F> ConfirmGate for F
where
    F: Fn(UserId) -> bool,
{
    fn confirm(&self, id: UserId) -> bool {
        self(id)
    }
}

#[derive(Debug)]
pub struct UserDirectoryClient {
    api: DirectoryApi,
    state: UserDirectoryState,
    sink: EventSink,
    events: Receiver<DirectoryEvent>,
}

impl UserDirectoryClient {
    pub fn new(api: DirectoryApi) -> Self {
        let (sink, events) = EventSink::channel();
        Self {
            api,
            state: UserDirectoryState::new(),
            sink,
            events,
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(DirectoryApi::new(config))
    }

    /// Called whenever a background result arrives.
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.sink.set_waker(waker);
        self
    }

    pub fn api(&self) -> &DirectoryApi {
        &self.api
    }

    pub fn state(&self) -> &UserDirectoryState {
        &self.state
    }

    pub fn form_mut(&mut self) -> &mut UserForm {
        self.state.form_mut()
    }

    /// Applies every finished result. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        for event in self.events.try_iter() {
            self.state.apply(event);
            applied += 1;
        }
        applied
    }

    /// Enter edit mode for a loaded record. Unknown ids are ignored.
    pub fn select_for_edit(&mut self, id: UserId) -> bool {
        let Some(user) = self.state.user(id).cloned() else {
            log::warn!("cannot edit user {id}: not in the loaded collection");
            return false;
        };
        self.state.select_for_edit(&user);
        true
    }

    pub fn reset_form(&mut self) {
        self.state.reset_form();
    }

    pub async fn load_all(&mut self) {
        tasks::load_all(&self.api, &self.sink).await;
        self.poll();
    }

    /// Creates or updates from the form. Returns false when nothing was sent.
    pub async fn submit(&mut self) -> bool {
        let Some(submission) = self.state.prepare_submission() else {
            return false;
        };
        tasks::submit(&self.api, &self.sink, submission).await;
        self.poll();
        true
    }

    /// Deletes `id` if `gate` agrees. Returns false when the user declined.
    pub async fn remove(&mut self, id: UserId, gate: &impl ConfirmGate) -> bool {
        if !gate.confirm(id) {
            log::debug!("delete of user {id} declined");
            return false;
        }
        tasks::remove(&self.api, &self.sink, id).await;
        self.poll();
        true
    }

    pub fn spawn_load_all(&self, handle: &Handle) {
        let api = self.api.clone();
        let sink = self.sink.clone();
        handle.spawn(async move {
            tasks::load_all(&api, &sink).await;
        });
    }

    pub fn spawn_submit(&mut self, handle: &Handle) -> bool {
        let Some(submission) = self.state.prepare_submission() else {
            return false;
        };
        let api = self.api.clone();
        let sink = self.sink.clone();
        handle.spawn(async move {
            tasks::submit(&api, &sink, submission).await;
        });
        true
    }

    /// Opens the confirmation step for `id`; nothing is sent yet.
    pub fn request_delete(&mut self, id: UserId) {
        self.state.request_delete(id);
    }

    /// Answers the pending confirmation. A yes starts the delete.
    pub fn resolve_delete(&mut self, confirmed: bool, handle: &Handle) -> bool {
        let Some(id) = self.state.resolve_delete(confirmed) else {
            return false;
        };
        let api = self.api.clone();
        let sink = self.sink.clone();
        handle.spawn(async move {
            tasks::remove(&api, &sink, id).await;
        });
        true
    }
}
