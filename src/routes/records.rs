//! Record route handlers
//!
//! Each handler validates its input, runs a single storage call and
//! renders the outcome as JSON.

use crate::error::{not_found_error, ApiResult, AppError};
use crate::models::{parse_record_id, MessageResponse, Record, RecordPayload};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

const NOT_FOUND: &str = "record not found";

type PayloadBody = Result<Json<Option<RecordPayload>>, JsonRejection>;

/// Unwrap a JSON body, reporting any decode failure as "invalid data".
/// A literal `null` body is an empty payload.
fn decode_payload(payload: PayloadBody) -> ApiResult<RecordPayload> {
    payload.map(|Json(body)| body.unwrap_or_default()).map_err(|rejection| {
        debug!("Rejected record body: {}", rejection.body_text());
        AppError::BadRequest("invalid data".to_string())
    })
}

/// List all records
pub async fn list_records(State(state): State<SharedState>) -> ApiResult<Json<Vec<Record>>> {
    debug!("Listing records");

    let records = state.records.list().await?;

    debug!("Listed {} records", records.len());
    Ok(Json(records))
}

/// Create a new record
pub async fn create_record(
    State(state): State<SharedState>,
    payload: PayloadBody,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let payload = decode_payload(payload)?;
    payload.check()?;

    let record = state.records.create(&payload).await?;

    info!("Record {} created", record.id);
    Ok((StatusCode::CREATED, Json(record)))
}

/// Delete a record by id
pub async fn delete_record(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_record_id(&id)?;
    debug!("Deleting record {}", id);

    if state.records.delete(id).await? == 0 {
        return Err(not_found_error(NOT_FOUND));
    }

    info!("Record {} deleted", id);
    Ok(Json(MessageResponse::new("record deleted")))
}

/// Replace name and email of a record
///
/// The response echoes the path id; the row is not read back.
pub async fn update_record(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: PayloadBody,
) -> ApiResult<Json<Record>> {
    let id = parse_record_id(&id)?;
    let payload = decode_payload(payload)?;
    payload.check()?;

    if state.records.update(id, &payload).await? == 0 {
        return Err(not_found_error(NOT_FOUND));
    }

    info!("Record {} updated", id);
    Ok(Json(payload.into_record(id)))
}
