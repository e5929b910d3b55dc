use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/recruiters/:recruiter_id/slots/generate",
            post(handlers::slots::generate_slots),
        )
        .route(
            "/api/recruiters/:recruiter_id/slots",
            get(handlers::slots::list_slots),
        )
        .route(
            "/api/recruiters/:recruiter_id/week",
            get(handlers::week::get_week),
        )
        .route("/api/slots/:id/status", patch(handlers::slots::update_status))
        .route("/api/slots/:id", delete(handlers::slots::delete_slot))
}
