//! Points endpoints

use std::collections::HashMap;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{parse_timestamp, AddPointsRequest, AddPointsResponse, SpendPointsRequest};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Add points for a payer
///
/// Negative points record a debit against the payer, reconciled lazily
/// when points are spent.
pub async fn add_points(
    State(state): State<AppState>,
    Json(req): Json<AddPointsRequest>,
) -> ApiResult<Json<AddPointsResponse>> {
    if req.payer.is_empty() {
        return Err(ApiError::Validation("payer must not be empty".to_string()));
    }
    if req.points == 0 {
        return Err(ApiError::Validation("points must be non-zero".to_string()));
    }
    let timestamp = parse_timestamp(&req.timestamp)
        .ok_or_else(|| ApiError::Validation("invalid timestamp format".to_string()))?;

    let balance = state
        .ledger
        .write()
        .await
        .credit(&req.payer, req.points, timestamp)
        .map_err(ApiError::Ledger)?;

    info!(payer = %req.payer, points = req.points, balance, "points added");

    Ok(Json(AddPointsResponse {
        payer: req.payer,
        points: req.points,
        timestamp: req.timestamp,
        balance,
    }))
}

/// Spend points, oldest contributions first across all payers
///
/// Returns the per-payer deductions as a payer->points object with
/// non-positive values.
pub async fn spend_points(
    State(state): State<AppState>,
    Json(req): Json<SpendPointsRequest>,
) -> ApiResult<Json<HashMap<String, i64>>> {
    if req.points <= 0 {
        return Err(ApiError::Validation("points must be positive".to_string()));
    }

    let deducted = state
        .ledger
        .write()
        .await
        .spend(req.points)
        .map_err(ApiError::Ledger)?;

    info!(points = req.points, "points spent");

    Ok(Json(deducted))
}

/// Get per-payer point totals
pub async fn get_balance(State(state): State<AppState>) -> ApiResult<Json<HashMap<String, i64>>> {
    let totals = state.ledger.read().await.payer_totals().clone();
    Ok(Json(totals))
}
