//! User CRUD handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{ApiError, CreateUserRequest};
use crate::account::{User, UserRepository, UserSummary};

/// List all users
///
/// GET /api/users/
#[utoipa::path(
    get,
    path = "/api/users/",
    responses(
        (status = 200, description = "All users, balance omitted", body = [UserSummary])
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = UserRepository::list_all(state.db.pool()).await?;
    Ok(Json(users))
}

/// Create a user
///
/// POST /api/users/
#[utoipa::path(
    post,
    path = "/api/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user, full record", body = User),
        (status = 400, description = "Missing or empty name/username"),
        (status = 500, description = "Created record could not be re-read")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (name, username) = req.validate()?;

    let id = UserRepository::create(state.db.pool(), name, username, req.balance).await?;

    // Post-insert invariant check: the created record must be readable
    let user = UserRepository::get_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::internal("Something went wrong while creating user!"))?;

    tracing::info!(id, username, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by id
///
/// GET /api/user/{id}/
#[utoipa::path(
    get,
    path = "/api/user/{id}/",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Full record", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = UserRepository::get_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found!"))?;
    Ok(Json(user))
}

/// Delete a user by id, returning the deleted record
///
/// DELETE /api/user/{id}/
#[utoipa::path(
    delete,
    path = "/api/user/{id}/",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted record", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    // Existence check first; the repository delete itself is a blind DELETE
    let user = UserRepository::get_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found!"))?;

    UserRepository::delete(state.db.pool(), id).await?;

    tracing::info!(id, "user deleted");
    Ok(Json(user))
}
