//! Balance transfer handler

use axum::{Json, extract::State};

use super::super::state::AppState;
use super::super::types::ApiError;
use crate::transfer::{TransferService, service::TransferRequest};

/// Send an amount from one user to another
///
/// POST /api/send/
#[utoipa::path(
    post,
    path = "/api/send/",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer applied, request echoed back", body = TransferRequest),
        (status = 400, description = "Invalid sender/receiver id or insufficient funds")
    ),
    tag = "Transfer"
)]
pub async fn send_money(
    State(state): State<AppState>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<TransferRequest>, ApiError> {
    let echoed = TransferService::execute(state.db.pool(), req).await?;
    Ok(Json(echoed))
}
