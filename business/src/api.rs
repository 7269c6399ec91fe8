//! Calls against the users collection endpoint.
//!
//! Every call treats any non-2xx status as a failure without looking at the
//! response body. Callers map the typed error to whatever they surface.

use thiserror::Error;

use crate::config::DirectoryConfig;
use crate::http::{Client, RequestBuilder, Response};
use crate::user::{User, UserId, UserPayload};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("API returned status: {0}")]
    Status(u16),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for `{base}/users`.
#[derive(Debug, Clone)]
pub struct DirectoryApi {
    client: Client,
    users_url: String,
}

impl DirectoryApi {
    pub fn new(config: &DirectoryConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &DirectoryConfig) -> Self {
        Self {
            client,
            users_url: config.users_url(),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.users_url)
    }

    /// GET `{base}/users`
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let response = send(self.client.get(&self.users_url)).await?;
        response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET `{base}/users/{id}`
    pub async fn get_user(&self, id: UserId) -> ApiResult<User> {
        let response = send(self.client.get(self.user_url(id))).await?;
        response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST `{base}/users`
    ///
    /// The created record is not needed by the caller, which always refetches.
    pub async fn create_user(&self, payload: &UserPayload) -> ApiResult<()> {
        let request = self
            .client
            .post(&self.users_url)
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        send(request).await.map(drop)
    }

    /// PUT `{base}/users/{id}`
    pub async fn update_user(&self, id: UserId, payload: &UserPayload) -> ApiResult<()> {
        let request = self
            .client
            .put(self.user_url(id))
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        send(request).await.map(drop)
    }

    /// DELETE `{base}/users/{id}`
    pub async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        send(self.client.delete(self.user_url(id))).await.map(drop)
    }
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let method = request.method();
    let url = request.url().to_owned();

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.message))?;

    log::debug!("{} {url} -> {}", method.as_str(), response.status);

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    Ok(response)
}
