mod api;
mod client;
mod config;
mod event;
mod form;
pub mod http;
mod state;
mod tasks;
mod user;

pub use api::{ApiError, ApiResult, DirectoryApi};
pub use client::{ConfirmGate, UserDirectoryClient};
pub use config::{ConfigError, DEFAULT_BASE, DEFAULT_HOST, DEFAULT_PORT, DirectoryConfig};
pub use event::{DELETE_FAILED, DirectoryEvent, EventSink, LOAD_FAILED, SAVE_FAILED};
pub use form::{FormError, Mode, Submission, UserForm};
pub use state::UserDirectoryState;
pub use user::{User, UserId, UserPayload};
