//! The three asynchronous directory operations.
//!
//! Each one reports its outcome as [`DirectoryEvent`]s on the sink. Detailed
//! errors go to the log; the events carry the fixed user-facing messages.

use crate::api::DirectoryApi;
use crate::event::{DELETE_FAILED, DirectoryEvent, EventSink, LOAD_FAILED, SAVE_FAILED};
use crate::form::Submission;
use crate::user::UserId;

/// Fetch the whole collection.
pub async fn load_all(api: &DirectoryApi, sink: &EventSink) {
    sink.emit(DirectoryEvent::LoadStarted);
    match api.list_users().await {
        Ok(users) => {
            log::info!("loaded {} users", users.len());
            sink.emit(DirectoryEvent::Loaded(users));
        }
        Err(err) => {
            log::warn!("failed to load users from {}: {err}", api.users_url());
            sink.emit(DirectoryEvent::LoadFailed(LOAD_FAILED.to_owned()));
        }
    }
}

/// Send a create or update, then refetch on success.
pub async fn submit(api: &DirectoryApi, sink: &EventSink, submission: Submission) {
    let result = match &submission {
        Submission::Create(payload) => api.create_user(payload).await,
        Submission::Update(id, payload) => api.update_user(*id, payload).await,
    };

    match result {
        Ok(()) => {
            log::info!("saved user: {submission:?}");
            sink.emit(DirectoryEvent::Saved);
            load_all(api, sink).await;
        }
        Err(err) => {
            log::warn!("failed to save user: {err}");
            sink.emit(DirectoryEvent::SaveFailed(SAVE_FAILED.to_owned()));
        }
    }
}

/// Delete `id`, then refetch whatever the outcome.
///
/// The outcome event is emitted after the refetch so a failure message is not
/// cleared by the reload that follows it.
pub async fn remove(api: &DirectoryApi, sink: &EventSink, id: UserId) {
    let result = api.delete_user(id).await;
    if let Err(err) = &result {
        log::warn!("failed to delete user {id}: {err}");
    }

    load_all(api, sink).await;

    match result {
        Ok(()) => sink.emit(DirectoryEvent::Deleted(id)),
        Err(_) => sink.emit(DirectoryEvent::DeleteFailed(id, DELETE_FAILED.to_owned())),
    }
}
