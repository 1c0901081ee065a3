use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::info;

use crate::db::models::{CreditRecord, CreditRecordInput};
use crate::db::query::ListParams;
use crate::error::ApiError;
use crate::router::AppState;

/// GET /credits -> all records matching the active filters, sorted and
/// paginated per the query string.
pub async fn list_credits(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CreditRecord>>, ApiError> {
    let rows = state.store.list(&params).await?;
    Ok(Json(rows))
}

/// GET /credit/{id} -> a single record, 404 when absent.
pub async fn get_credit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CreditRecord>, ApiError> {
    let record = state.store.get(id).await?;
    Ok(Json(record))
}

/// POST /credit -> 201 with the stored row, including the assigned id.
pub async fn create_credit(
    State(state): State<AppState>,
    Json(input): Json<CreditRecordInput>,
) -> Result<(StatusCode, Json<CreditRecord>), ApiError> {
    let created = state.store.create(&input).await?;
    info!(id = created.id, "credit record created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /credit/{id} -> partial update over exactly the supplied fields.
pub async fn update_credit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<CreditRecordInput>,
) -> Result<Json<CreditRecord>, ApiError> {
    let updated = state.store.update(id, &patch).await?;
    Ok(Json(updated))
}

/// DELETE /credit/{id} -> confirmation message, 404 when absent.
pub async fn delete_credit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete(id).await?;
    info!(id, "credit record deleted");
    Ok(Json(json!({ "message": "Record deleted successfully" })))
}
