//! Administrative handlers (table reset, root banner)

use axum::extract::State;

use super::super::state::AppState;
use super::super::types::ApiError;

/// Root banner route
///
/// GET /
pub async fn hello_world() -> &'static str {
    "Hello world!"
}

/// Reset the users table to empty, restarting id assignment
///
/// POST /api/reset/
///
/// Responds with plain text rather than JSON; clients depend on the
/// exact confirmation string.
#[utoipa::path(
    post,
    path = "/api/reset/",
    responses(
        (status = 200, description = "Plain-text confirmation", content_type = "text/plain")
    ),
    tag = "Admin"
)]
pub async fn reset_tables(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    state.db.reset_schema().await?;
    Ok("Tables reset successfully")
}
