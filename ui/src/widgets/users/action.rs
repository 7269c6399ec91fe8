//! User intents collected while drawing a frame.
//!
//! Widgets only read the client while rendering and return what was clicked;
//! the panel applies the action once drawing is done.

use tokio::runtime::Handle;
use userdir_business::{UserDirectoryClient, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryAction {
    /// Save or Update pressed on the form.
    Submit,
    /// Leave edit mode without saving.
    CancelEdit,
    Edit(UserId),
    /// Open the confirmation dialog for a row.
    RequestDelete(UserId),
    ConfirmDelete,
    CancelDelete,
}

pub fn apply_action(client: &mut UserDirectoryClient, runtime: &Handle, action: DirectoryAction) {
    log::debug!("directory action: {action:?}");
    match action {
        DirectoryAction::Submit => {
            client.spawn_submit(runtime);
        }
        DirectoryAction::CancelEdit => client.reset_form(),
        DirectoryAction::Edit(id) => {
            client.select_for_edit(id);
        }
        DirectoryAction::RequestDelete(id) => client.request_delete(id),
        DirectoryAction::ConfirmDelete => {
            client.resolve_delete(true, runtime);
        }
        DirectoryAction::CancelDelete => {
            client.resolve_delete(false, runtime);
        }
    }
}
