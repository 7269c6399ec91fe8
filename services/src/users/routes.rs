//! HTTP routes for the users collection.
//!
//! | Method | Path          | Success          | Failure |
//! |--------|---------------|------------------|---------|
//! | POST   | `/users`      | 201 + user       | 400     |
//! | GET    | `/users`      | 200 + users      |         |
//! | GET    | `/users/{id}` | 200 + user       | 404     |
//! | PUT    | `/users/{id}` | 200 + user       | 404     |
//! | DELETE | `/users/{id}` | 204              | 404     |

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use super::storage::{NewUser, StoreError, UserStorage};

/// Error response for API endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<StoreError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: StoreError) -> Self {
        let (status, error_type) = match &err {
            StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "user_not_found"),
            StoreError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_type.to_owned(),
                message: err.to_string(),
            }),
        )
    }
}

fn error_response(err: StoreError) -> Response {
    let (status, json): (StatusCode, Json<ErrorResponse>) = err.into();
    (status, json).into_response()
}

/// Shared state for the user routes.
#[derive(Clone)]
pub struct AppState<U> {
    pub user_storage: U,
}

impl<U> AppState<U> {
    pub fn new(user_storage: U) -> Self {
        Self { user_storage }
    }
}

/// The users collection, to be nested under the API base path.
pub fn user_routes<U: UserStorage>() -> Router<AppState<U>> {
    Router::new()
        .route("/users", get(list_users::<U>).post(create_user::<U>))
        .route(
            "/users/{id}",
            get(get_user::<U>)
                .put(update_user::<U>)
                .delete(delete_user::<U>),
        )
}

#[tracing::instrument(skip_all, fields(name = %payload.name))]
async fn create_user<U: UserStorage>(
    State(state): State<AppState<U>>,
    Json(payload): Json<NewUser>,
) -> impl IntoResponse {
    match state.user_storage.create_user(payload).await {
        Ok(user) => {
            tracing::info!(id = user.id, "Created user");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create user: {e}");
            error_response(e)
        }
    }
}

#[tracing::instrument(skip_all)]
async fn list_users<U: UserStorage>(State(state): State<AppState<U>>) -> impl IntoResponse {
    match state.user_storage.list_users().await {
        Ok(users) => {
            tracing::debug!(count = users.len(), "Listed users");
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list users: {e}");
            error_response(e)
        }
    }
}

#[tracing::instrument(skip_all, fields(id = %id))]
async fn get_user<U: UserStorage>(
    State(state): State<AppState<U>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.user_storage.get_user(id).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => {
            tracing::warn!("Failed to get user: {e}");
            error_response(e)
        }
    }
}

#[tracing::instrument(skip_all, fields(id = %id))]
async fn update_user<U: UserStorage>(
    State(state): State<AppState<U>>,
    Path(id): Path<i64>,
    Json(payload): Json<NewUser>,
) -> impl IntoResponse {
    match state.user_storage.update_user(id, payload).await {
        Ok(user) => {
            tracing::info!("Updated user");
            (StatusCode::OK, Json(user)).into_response()
        }
        Err(e) => {
            tracing::warn!("Failed to update user: {e}");
            error_response(e)
        }
    }
}

#[tracing::instrument(skip_all, fields(id = %id))]
async fn delete_user<U: UserStorage>(
    State(state): State<AppState<U>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.user_storage.delete_user(id).await {
        Ok(()) => {
            tracing::info!("Deleted user");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::warn!("Failed to delete user: {e}");
            error_response(e)
        }
    }
}
