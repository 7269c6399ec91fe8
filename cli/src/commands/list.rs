//! List users command.

use anyhow::Result;
use tracing::instrument;
use userdir_business::UserDirectoryClient;

use super::ensure_no_error;
use crate::output::Output;

#[instrument(skip_all, name = "list")]
pub async fn run_list(client: &mut UserDirectoryClient, out: &Output) -> Result<()> {
    client.load_all().await;
    ensure_no_error(client)?;

    out.users(client.state().users());
    Ok(())
}
