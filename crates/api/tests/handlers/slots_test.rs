use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::TestContext;

fn generate_body(start: &str, end: &str, duration: Value) -> Value {
    json!({
        "date": "2024-03-12",
        "start_time": start,
        "end_time": end,
        "duration_minutes": duration,
        "type": "video",
    })
}

fn slots_path(recruiter: Uuid) -> String {
    format!("/api/recruiters/{}/slots", recruiter)
}

#[tokio::test]
async fn test_health_reports_store() {
    let ctx = TestContext::new();
    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok", "store": "memory" }));
}

#[tokio::test]
async fn test_generate_creates_truncated_batch() {
    let ctx = TestContext::new();
    let recruiter = Uuid::new_v4();

    let response = ctx
        .server
        .post(&format!("{}/generate", slots_path(recruiter)))
        .json(&generate_body("09:00", "09:50", json!(20)))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["created"], 3);
    assert_eq!(body["message"], "Created 3 interview slots");

    let ranges: Vec<(String, String, i64)> = body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| {
            (
                slot["start_time"].as_str().unwrap().to_string(),
                slot["end_time"].as_str().unwrap().to_string(),
                slot["duration"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        ranges,
        vec![
            ("09:00".to_string(), "09:20".to_string(), 20),
            ("09:20".to_string(), "09:40".to_string(), 20),
            ("09:40".to_string(), "09:50".to_string(), 10),
        ]
    );
    for slot in body["slots"].as_array().unwrap() {
        assert_eq!(slot["status"], "available");
        assert_eq!(slot["recruiter_id"], json!(recruiter));
    }
}

#[tokio::test]
async fn test_generate_accepts_reversed_range() {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .post(&format!("{}/generate", slots_path(Uuid::new_v4())))
        .json(&generate_body("15:00", "14:00", json!("30")))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["slots"][0]["start_time"], "14:00");
    assert_eq!(body["slots"][1]["end_time"], "15:00");
}

#[rstest]
#[case(generate_body("10:00", "10:00", json!(15)), "range must be greater than zero minutes")]
#[case(generate_body("09:00", "10:00", json!(0)), "duration must be a positive number of minutes, got 0")]
#[case(json!({"date": "2024-03-12", "start_time": "09:00", "end_time": "10:00"}), "duration_minutes is required")]
#[tokio::test]
async fn test_generate_rejects_invalid_input(#[case] body: Value, #[case] message: &str) {
    let ctx = TestContext::new();
    let recruiter = Uuid::new_v4();

    let response = ctx
        .server
        .post(&format!("{}/generate", slots_path(recruiter)))
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        format!("Validation error: {}", message)
    );

    let listed = ctx.server.get(&slots_path(recruiter)).await;
    assert_eq!(listed.json::<Value>(), json!([]));
}

#[rstest]
#[case(json!({"date": "tomorrow", "start_time": "09:00", "end_time": "10:00", "duration_minutes": 30}))]
#[case(json!({"date": "2024-03-12", "start_time": "09:00", "end_time": "10:00", "duration_minutes": 30, "type": "fax"}))]
#[tokio::test]
async fn test_generate_rejects_malformed_fields_as_json(#[case] body: Value) {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .post(&format!("{}/generate", slots_path(Uuid::new_v4())))
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(
        message.starts_with(
            "Validation error: Failed to deserialize the JSON body into the target type"
        ),
        "{}",
        message
    );
}

#[tokio::test]
async fn test_generate_rejects_unparseable_body_as_json() {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .post(&format!("{}/generate", slots_path(Uuid::new_v4())))
        .bytes("{\"date\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(
        message.starts_with("Validation error: Failed to parse the request body as JSON"),
        "{}",
        message
    );
}

#[tokio::test]
async fn test_unknown_status_value_is_a_json_validation_error() {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .patch(&format!("/api/slots/{}/status", Uuid::new_v4()))
        .json(&json!({ "status": "postponed" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error: "));
}

#[tokio::test]
async fn test_generate_conflict_stores_nothing() {
    let ctx = TestContext::new();
    let recruiter = Uuid::new_v4();
    let generate = format!("{}/generate", slots_path(recruiter));

    ctx.server
        .post(&generate)
        .json(&generate_body("10:00", "11:00", json!(30)))
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .post(&generate)
        .json(&generate_body("09:00", "10:30", json!(30)))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let listed = ctx.server.get(&slots_path(recruiter)).await.json::<Value>();
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_filters_by_date() {
    let ctx = TestContext::new();
    let recruiter = Uuid::new_v4();
    let generate = format!("{}/generate", slots_path(recruiter));

    for date in ["2024-03-12", "2024-03-19"] {
        ctx.server
            .post(&generate)
            .json(&json!({
                "date": date,
                "start_time": "09:00",
                "end_time": "10:00",
                "duration_minutes": 60,
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = ctx
        .server
        .get(&slots_path(recruiter))
        .add_query_param("from", "2024-03-11")
        .add_query_param("to", "2024-03-17")
        .await;
    response.assert_status_ok();
    let listed = response.json::<Value>();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["date"], "2024-03-12");
    assert_eq!(listed[0]["type"], "video");

    let reversed = ctx
        .server
        .get(&slots_path(recruiter))
        .add_query_param("from", "2024-03-17")
        .add_query_param("to", "2024-03-11")
        .await;
    reversed.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_and_delete() {
    let ctx = TestContext::new();
    let recruiter = Uuid::new_v4();

    let created = ctx
        .server
        .post(&format!("{}/generate", slots_path(recruiter)))
        .json(&generate_body("09:00", "09:30", json!(30)))
        .await
        .json::<Value>();
    let id = created["slots"][0]["id"].as_str().unwrap().to_string();

    let updated = ctx
        .server
        .patch(&format!("/api/slots/{}/status", id))
        .json(&json!({ "status": "booked" }))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["status"], "booked");

    ctx.server
        .delete(&format!("/api/slots/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    ctx.server
        .delete(&format!("/api/slots/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_slot_status_update_is_not_found() {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .patch(&format!("/api/slots/{}/status", Uuid::new_v4()))
        .json(&json!({ "status": "cancelled" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
