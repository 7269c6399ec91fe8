//! Client configuration.
//!
//! The collection endpoint lives at `http://{host}:{port}{base}/users`. All three
//! parts come from the environment (`API_HOST`, `API_PORT`, `API_BASE`) and fall
//! back to fixed defaults when unset or empty.

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_BASE: &str = "/sgu-api";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_PORT must be a port number, got `{0}`")]
    InvalidPort(String),

    #[error("failed to read configuration from the environment: {0}")]
    Env(String),
}

// Raw shape of the environment; every value is optional and may be blank.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_host: Option<String>,
    api_port: Option<String>,
    api_base: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    host: String,
    port: u16,
    base_path: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, DEFAULT_BASE)
    }
}

impl DirectoryConfig {
    pub fn new(host: impl Into<String>, port: u16, base_path: impl AsRef<str>) -> Self {
        Self {
            host: host.into(),
            port,
            base_path: normalize_base(base_path.as_ref()),
        }
    }

    /// Reads `API_HOST`, `API_PORT` and `API_BASE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_env::from_env().map_err(|e| ConfigError::Env(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Same as [`Self::from_env`] but over an explicit list of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
            .collect();
        let raw: RawConfig =
            serde_env::from_iter(vars).map_err(|e| ConfigError::Env(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let host = non_blank(raw.api_host).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match non_blank(raw.api_port) {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .ok()
                .ok_or_else(|| ConfigError::InvalidPort(port.clone()))?,
            None => DEFAULT_PORT,
        };
        let base = non_blank(raw.api_base).unwrap_or_else(|| DEFAULT_BASE.to_owned());

        Ok(Self::new(host, port, base))
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_base_path(mut self, base_path: impl AsRef<str>) -> Self {
        self.base_path = normalize_base(base_path.as_ref());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// `http://{host}:{port}{base}`
    pub fn api_base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.base_path)
    }

    /// `http://{host}:{port}{base}/users`
    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DirectoryConfig::from_vars(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.users_url(), "http://localhost:8081/sgu-api/users");
    }

    #[test]
    fn reads_all_three_variables() {
        let config = DirectoryConfig::from_vars([
            ("API_HOST", "api.internal"),
            ("API_PORT", "9000"),
            ("API_BASE", "/directory"),
        ])
        .unwrap();

        assert_eq!(config.host(), "api.internal");
        assert_eq!(config.port(), 9000);
        assert_eq!(config.users_url(), "http://api.internal:9000/directory/users");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            DirectoryConfig::from_vars([("API_HOST", ""), ("API_PORT", " "), ("API_BASE", "")])
                .unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = DirectoryConfig::from_vars([("API_PORT", "eighty")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
    }

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(DirectoryConfig::default().with_base_path("api/").base_path(), "/api");
        assert_eq!(DirectoryConfig::default().with_base_path("/").base_path(), "");
        assert_eq!(
            DirectoryConfig::new("h", 1, "").users_url(),
            "http://h:1/users"
        );
    }
}
