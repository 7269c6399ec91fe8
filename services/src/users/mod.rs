//! The users collection: storage and HTTP routes.

pub mod routes;
pub mod storage;

pub use routes::{AppState, ErrorResponse, user_routes};
pub use storage::{InMemoryUserStorage, NewUser, StoreError, StoredUser, UserStorage};
