//! Show a single user.

use anyhow::{Result, anyhow};
use tracing::{instrument, warn};
use userdir_business::{ApiError, UserDirectoryClient, UserId};

use crate::output::Output;

#[instrument(skip_all, name = "show", fields(id = %id))]
pub async fn run_show(client: &UserDirectoryClient, out: &Output, id: UserId) -> Result<()> {
    match client.api().get_user(id).await {
        Ok(user) => {
            out.user(&user);
            Ok(())
        }
        Err(ApiError::Status(404)) => Err(anyhow!("User {id} not found")),
        Err(err) => {
            warn!("failed to fetch user {id}: {err}");
            Err(anyhow!("Could not connect to the server"))
        }
    }
}
