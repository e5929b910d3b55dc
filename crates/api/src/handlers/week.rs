use axum::{Json, extract::State};
use chrono::Local;
use jobfair_core::{
    calendar::{build_week_view, week_dates},
    models::agenda::{WeekQuery, WeekResponse},
};
use jobfair_db::store::DateRange;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{
        error_handling::AppError,
        extract::{AppPath, AppQuery},
    },
};

/// Renders the recruiter's week around `anchor`.
///
/// Without both interview bounds the response carries no week, and the store
/// is not queried. An anchor whose week leaves the supported calendar is a
/// validation error.
#[axum::debug_handler]
pub async fn get_week(
    State(state): State<Arc<ApiState>>,
    AppPath(recruiter_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<WeekQuery>,
) -> Result<Json<WeekResponse>, AppError> {
    let today = Local::now().date_naive();
    let anchor = query.anchor.unwrap_or(today);

    if query.interview_start.is_none() || query.interview_end.is_none() {
        return Ok(Json(WeekResponse {
            week: None,
            grid: None,
        }));
    }

    let dates = week_dates(anchor)?;
    let range = DateRange {
        from: Some(dates[0]),
        to: Some(dates[6]),
    };
    let slots = state.store.list_slots(recruiter_id, range).await?;

    let week = build_week_view(
        anchor,
        query.interview_start,
        query.interview_end,
        &slots,
        query.selected,
        today,
    )?;
    let grid = week.as_ref().map(|view| state.grid.layout(view));

    Ok(Json(WeekResponse { week, grid }))
}
