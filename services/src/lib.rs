use crate::config::Config;
use crate::users::{AppState, UserStorage, user_routes};
use axum::{
    Router,
    extract::{Extension, Request},
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{any, get},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod telemetry;
pub mod users;

/// Builds the service router: the users collection under the configured
/// base path, plus `/is-health`.
pub fn routes<U>(user_storage: U, config: Config) -> Router
where
    U: UserStorage,
{
    let state = AppState::new(user_storage);

    let api = if config.api_base().is_empty() {
        user_routes::<U>()
    } else {
        Router::new().nest(config.api_base(), user_routes::<U>())
    };

    Router::new()
        .route("/is-health", get(health_check))
        .merge(api)
        .fallback(any(catch_all))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .layer(Extension(config))
        .with_state(state)
}

async fn health_check(Extension(config): Extension<Config>) -> impl IntoResponse {
    let mut response = (StatusCode::OK, "OK").into_response();
    response.headers_mut().insert(
        HeaderName::from_static("x-service-env"),
        HeaderValue::from_static(config.environment().as_str()),
    );
    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
