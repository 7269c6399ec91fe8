//! Update user command.

use anyhow::{Result, bail};
use tracing::{info, instrument};
use userdir_business::{UserDirectoryClient, UserId};

use super::ensure_no_error;
use crate::output::Output;

/// Fields given on the command line. `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[instrument(skip_all, name = "update", fields(id = %id))]
pub async fn run_update(
    client: &mut UserDirectoryClient,
    out: &Output,
    id: UserId,
    changes: UserChanges,
) -> Result<()> {
    client.load_all().await;
    ensure_no_error(client)?;

    if !client.select_for_edit(id) {
        bail!("User {id} not found");
    }

    let form = client.form_mut();
    if let Some(name) = changes.name {
        form.name = name;
    }
    if let Some(email) = changes.email {
        form.email = email;
    }
    if let Some(phone_number) = changes.phone_number {
        form.phone_number = phone_number;
    }

    client.submit().await;
    ensure_no_error(client)?;

    info!("user updated");
    out.success(format!("User {id} updated"));
    out.newline();
    out.users(client.state().users());
    Ok(())
}
