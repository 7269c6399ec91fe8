//! Command implementations for the userdir CLI.
//!
//! Each one drives a [`userdir_business::UserDirectoryClient`] and turns an
//! error left in its state into a command failure.

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

pub use create::run_create;
pub use delete::{PromptGate, run_delete};
pub use list::run_list;
pub use show::run_show;
pub use update::{UserChanges, run_update};

use anyhow::{Result, bail};
use userdir_business::UserDirectoryClient;

/// Fails if the last operation left an error message behind.
fn ensure_no_error(client: &UserDirectoryClient) -> Result<()> {
    if let Some(error) = client.state().error() {
        bail!("{error}");
    }
    Ok(())
}
