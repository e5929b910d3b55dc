use axum::{Json, extract::State, http::StatusCode};
use jobfair_core::{
    errors::AgendaError,
    models::{
        agenda::{GenerateSlotsRequest, GenerateSlotsResponse, ListSlotsQuery, UpdateStatusRequest},
        time_slot::TimeSlot,
    },
    slots::summarize,
};
use jobfair_db::store::DateRange;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{
        error_handling::AppError,
        extract::{AppJson, AppPath, AppQuery},
    },
};

/// Splits the selected range into slots and persists them as one batch.
///
/// Nothing is stored when the input is invalid or any slot overlaps one the
/// recruiter already has.
#[axum::debug_handler]
pub async fn generate_slots(
    State(state): State<Arc<ApiState>>,
    AppPath(recruiter_id): AppPath<Uuid>,
    AppJson(payload): AppJson<GenerateSlotsRequest>,
) -> Result<(StatusCode, Json<GenerateSlotsResponse>), AppError> {
    let plan = payload.into_plan()?;
    let slots = state
        .store
        .create_slots(recruiter_id, plan.iter().collect())
        .await?;

    info!(%recruiter_id, date = %plan.date(), count = slots.len(), "generated interview slots");

    let response = GenerateSlotsResponse {
        created: slots.len(),
        message: summarize(slots.len()),
        slots,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    AppPath(recruiter_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<ListSlotsQuery>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            return Err(AppError(AgendaError::Validation(format!(
                "from ({}) must not be after to ({})",
                from, to
            ))));
        }
    }

    let range = DateRange {
        from: query.from,
        to: query.to,
    };
    Ok(Json(state.store.list_slots(recruiter_id, range).await?))
}

#[axum::debug_handler]
pub async fn update_status(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateStatusRequest>,
) -> Result<Json<TimeSlot>, AppError> {
    Ok(Json(state.store.update_status(id, payload.status).await?))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.delete_slot(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
