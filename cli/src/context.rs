//! Builds the directory client from the environment and command-line flags.

use anyhow::{Context as _, Result};
use tracing::debug;
use userdir_business::{DirectoryConfig, UserDirectoryClient};

/// Endpoint overrides given on the command line.
#[derive(Debug, Default, Clone)]
pub struct EndpointArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub base: Option<String>,
}

/// `API_HOST`, `API_PORT` and `API_BASE` first, then any flag on top.
pub fn resolve_config(args: EndpointArgs) -> Result<DirectoryConfig> {
    let mut config = DirectoryConfig::from_env().context("Invalid API configuration")?;
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(base) = args.base {
        config = config.with_base_path(base);
    }
    debug!(users_url = %config.users_url(), "resolved endpoint");
    Ok(config)
}

pub fn build_client(config: &DirectoryConfig) -> UserDirectoryClient {
    UserDirectoryClient::from_config(config)
}
