use axum::{http::StatusCode, response::IntoResponse};
use jobfair_api::middleware::error_handling::AppError;
use jobfair_core::errors::AgendaError;
use jobfair_db::store::MockTimeSlotStore;
use mockall::predicate;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::TestContext;

#[rstest]
#[case(AgendaError::NotFound("slot".into()), StatusCode::NOT_FOUND)]
#[case(AgendaError::Validation("bad".into()), StatusCode::BAD_REQUEST)]
#[case(AgendaError::Conflict("taken".into()), StatusCode::CONFLICT)]
#[case(AgendaError::Configuration("grid".into()), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(AgendaError::Database(eyre::eyre!("down")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: AgendaError, #[case] status: StatusCode) {
    let response = AppError(error).into_response();
    assert_eq!(response.status(), status);
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let recruiter = Uuid::new_v4();
    let mut store = MockTimeSlotStore::new();
    store
        .expect_list_slots()
        .with(predicate::eq(recruiter), predicate::always())
        .times(1)
        .returning(|_, _| Err(AgendaError::Database(eyre::eyre!("connection reset"))));

    let ctx = TestContext::with_mock(store);
    let response = ctx
        .server
        .get(&format!("/api/recruiters/{}/slots", recruiter))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Database error: connection reset" })
    );
}

#[tokio::test]
async fn test_week_without_period_skips_store() {
    let mut store = MockTimeSlotStore::new();
    store.expect_list_slots().never();

    let ctx = TestContext::with_mock(store);
    let response = ctx
        .server
        .get(&format!("/api/recruiters/{}/week", Uuid::new_v4()))
        .await;

    response.assert_status_ok();
}
