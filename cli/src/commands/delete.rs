//! Delete user command.

use anyhow::Result;
use inquire::Confirm;
use tracing::{instrument, warn};
use userdir_business::{ConfirmGate, UserDirectoryClient, UserId};

use super::ensure_no_error;
use crate::output::Output;

/// Asks on the terminal. A failed prompt counts as a no.
pub struct PromptGate;

impl ConfirmGate for PromptGate {
    fn confirm(&self, id: UserId) -> bool {
        Confirm::new(&format!("Delete user #{id}?"))
            .with_default(false)
            .with_help_message("This action cannot be undone")
            .prompt()
            .unwrap_or_else(|err| {
                warn!("confirmation prompt failed: {err}");
                false
            })
    }
}

#[instrument(skip_all, name = "delete", fields(id = %id))]
pub async fn run_delete(
    client: &mut UserDirectoryClient,
    out: &Output,
    id: UserId,
    gate: &impl ConfirmGate,
) -> Result<()> {
    if !client.remove(id, gate).await {
        out.print("Cancelled.");
        return Ok(());
    }
    ensure_no_error(client)?;

    out.success(format!("User {id} deleted"));
    out.newline();
    out.users(client.state().users());
    Ok(())
}
