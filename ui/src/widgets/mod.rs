pub mod users;

pub use users::{DirectoryAction, apply_action, user_directory_panel};
