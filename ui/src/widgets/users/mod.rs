//! Widgets for the user directory screen.

mod action;
mod banner;
mod form;
mod modals;
mod panel;
pub mod table;

pub use action::{DirectoryAction, apply_action};
pub use banner::{error_banner, record_badge};
pub use form::user_form;
pub use modals::delete_confirm_modal;
pub use panel::user_directory_panel;
