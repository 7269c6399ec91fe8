//! Create user command.

use anyhow::Result;
use tracing::{info, instrument};
use userdir_business::{UserDirectoryClient, UserForm};

use super::ensure_no_error;
use crate::output::Output;

#[instrument(skip_all, name = "create")]
pub async fn run_create(
    client: &mut UserDirectoryClient,
    out: &Output,
    form: UserForm,
) -> Result<()> {
    client.reset_form();
    *client.form_mut() = form;

    client.submit().await;
    ensure_no_error(client)?;

    info!("user created");
    out.success("User saved");
    out.newline();
    out.users(client.state().users());
    Ok(())
}
