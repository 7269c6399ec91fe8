//! Results of background work, delivered back to the state owner.
//!
//! Tasks never touch [`crate::UserDirectoryState`] directly. They push
//! [`DirectoryEvent`]s into an [`EventSink`]; the owner drains the channel and
//! applies the events in arrival order.

use std::fmt;
use std::sync::Arc;

use flume::{Receiver, Sender};

use crate::user::{User, UserId};

pub const LOAD_FAILED: &str = "Could not connect to the server";
pub const SAVE_FAILED: &str = "Failed to save user";
pub const DELETE_FAILED: &str = "Failed to delete user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    LoadStarted,
    Loaded(Vec<User>),
    LoadFailed(String),
    /// A create or update succeeded.
    Saved,
    SaveFailed(String),
    Deleted(UserId),
    DeleteFailed(UserId, String),
    /// A submit was refused before any request was made.
    Rejected(String),
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Sending half of the event channel plus an optional wake-up hook.
///
/// The hook lets an immediate-mode UI repaint as soon as a result lands.
#[derive(Clone)]
pub struct EventSink {
    tx: Sender<DirectoryEvent>,
    waker: Option<Waker>,
}

impl fmt::Debug for EventSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSink")
            .field("pending", &self.tx.len())
            .field("waker", &self.waker.is_some())
            .finish()
    }
}

impl EventSink {
    pub fn channel() -> (Self, Receiver<DirectoryEvent>) {
        let (tx, rx) = flume::unbounded();
        (Self { tx, waker: None }, rx)
    }

    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    pub fn emit(&self, event: DirectoryEvent) {
        log::trace!("emit {event:?}");
        if self.tx.send(event).is_err() {
            // The owner is gone; nobody is left to show the result.
            log::debug!("directory event dropped, receiver closed");
            return;
        }
        if let Some(waker) = &self.waker {
            waker();
        }
    }
}
