//! User storage trait and the in-memory store backing the service.
//!
//! Handlers only talk to [`UserStorage`], so tests and alternative backends
//! can swap the store without touching the routes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A user record as stored and returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Request body for create and update. Any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl NewUser {
    fn into_stored(self, id: i64) -> StoredUser {
        StoredUser {
            id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

/// Errors produced by user storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Storage operations the user routes rely on.
pub trait UserStorage: Clone + Send + Sync + 'static {
    /// Stores a new user under a freshly assigned id.
    fn create_user(
        &self,
        user: NewUser,
    ) -> impl Future<Output = Result<StoredUser, StoreError>> + Send;

    /// All users in ascending id order.
    fn list_users(&self) -> impl Future<Output = Result<Vec<StoredUser>, StoreError>> + Send;

    fn get_user(&self, id: i64) -> impl Future<Output = Result<StoredUser, StoreError>> + Send;

    /// Replaces the fields of an existing user, keeping its id.
    fn update_user(
        &self,
        id: i64,
        user: NewUser,
    ) -> impl Future<Output = Result<StoredUser, StoreError>> + Send;

    fn delete_user(&self, id: i64) -> impl Future<Output = Result<(), StoreError>> + Send;
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, StoredUser>,
    last_id: i64,
}

/// In-memory user store. Ids start at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStorage {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given users, ids assigned in order.
    pub fn with_users(users: impl IntoIterator<Item = NewUser>) -> Self {
        let mut inner = Inner::default();
        for user in users {
            inner.last_id += 1;
            inner.users.insert(inner.last_id, user.into_stored(inner.last_id));
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}

impl UserStorage for InMemoryUserStorage {
    async fn create_user(&self, user: NewUser) -> Result<StoredUser, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Storage("id space exhausted".to_owned()))?;
        let stored = user.into_stored(inner.last_id);
        inner.users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn list_users(&self) -> Result<Vec<StoredUser>, StoreError> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn get_user(&self, id: i64) -> Result<StoredUser, StoreError> {
        self.inner
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_user(&self, id: i64, user: NewUser) -> Result<StoredUser, StoreError> {
        let mut inner = self.inner.write().await;
        let slot = inner.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = user.into_stored(id);
        Ok(slot.clone())
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
