use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use std::net::IpAddr;
use tracing::info;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_API_BASE: &str = "/sgu-api";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Env {
    #[default]
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "prod")]
    Prod,
}

impl Env {
    pub fn as_str(self) -> &'static str {
        match self {
            Env::Local => "local",
            Env::Prod => "prod",
        }
    }
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Validated configuration. `server_addr` parses as an IP address and
// `api_base` is either empty or starts with a single '/' and has no trailing '/'.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    server_addr: String,
    port: u16,
    api_base: String,
}

// Everything optional; defaults are applied in `Config::from_raw`.
#[derive(Deserialize)]
struct RawConfig {
    env: Option<Env>,
    server_addr: Option<String>,
    port: Option<u16>,
    api_base: Option<String>,
}

impl Config {
    /// Loopback on an OS-assigned port with the default base path.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Local,
            server_addr: "127.0.0.1".to_owned(),
            port: 0,
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = normalize_base(api_base);
        self
    }

    pub fn environment(&self) -> Env {
        self.env
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Prefix the users collection is mounted under; empty means the root.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Reads `ENV`, `SERVER_ADDR`, `PORT` and `API_BASE` from the environment.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");

        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            server_addr,
            port,
            api_base,
        } = raw_config;
        let env = env.unwrap_or_default();

        let server_addr = match server_addr {
            Some(addr) => {
                info!("Using provided SERVER_ADDR: {addr}");
                addr
            }
            None => {
                let default_addr = match env {
                    Env::Local => "127.0.0.1",
                    Env::Prod => "0.0.0.0",
                };
                info!("SERVER_ADDR not set, defaulting to {default_addr} for {env} environment");
                default_addr.to_owned()
            }
        };
        if server_addr.parse::<IpAddr>().is_err() {
            anyhow::bail!("SERVER_ADDR must be an IP address, got {server_addr:?}");
        }

        let port = port.unwrap_or(DEFAULT_PORT);
        let api_base = normalize_base(api_base.as_deref().unwrap_or(DEFAULT_API_BASE));

        Ok(Self {
            env,
            server_addr,
            port,
            api_base,
        })
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn defaults_when_nothing_is_set() {
        let raw: RawConfig = from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("empty config should build");
        assert_eq!(config.environment(), Env::Local);
        assert_eq!(config.server_addr(), "127.0.0.1");
        assert_eq!(config.port(), 8081);
        assert_eq!(config.api_base(), "/sgu-api");
    }

    #[test]
    fn prod_listens_on_all_interfaces() {
        let raw: RawConfig = from_iter(vec![("ENV", "prod"), ("PORT", "9000")])
            .expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("prod config should build");
        assert_eq!(config.server_addr(), "0.0.0.0");
        assert_eq!(config.port(), 9000);
    }

    #[test]
    fn api_base_is_normalized() {
        let raw: RawConfig =
            from_iter(vec![("API_BASE", "api/v1/")]).expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("config should build");
        assert_eq!(config.api_base(), "/api/v1");
    }

    #[test]
    fn slash_api_base_mounts_at_root() {
        let raw: RawConfig = from_iter(vec![("API_BASE", "/")]).expect("RawConfig should deserialize");

        let config = Config::from_raw(raw).expect("config should build");
        assert_eq!(config.api_base(), "");
    }

    #[test]
    fn invalid_server_addr_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("SERVER_ADDR", "localhost")]).expect("RawConfig should deserialize");

        let result = Config::from_raw(raw);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("SERVER_ADDR"));
    }

    #[test]
    fn invalid_port_fails_to_deserialize() {
        let raw: Result<RawConfig, _> = from_iter(vec![("PORT", "eighty")]);
        assert!(raw.is_err());
    }
}
