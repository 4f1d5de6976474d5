pub mod appointments;
pub mod error;
pub mod people;
pub mod risk;
pub mod sessions;

pub use appointments::*;
pub use error::ApiError;
pub use people::*;
pub use risk::*;
pub use sessions::*;

use axum::http::StatusCode;
use uuid::Uuid;

use crate::state::AppState;

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Run `f` against a live session, or fail with 404.
fn in_session<R>(
    state: &AppState,
    session_id: Uuid,
    f: impl FnOnce(&mut tibasasa_core::Session) -> R,
) -> Result<R, ApiError> {
    state
        .sessions
        .with_session(session_id, f)
        .ok_or_else(|| ApiError::unknown_session(session_id))
}
