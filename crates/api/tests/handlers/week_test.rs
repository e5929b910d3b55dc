use axum::http::StatusCode;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::TestContext;

async fn seed(ctx: &TestContext, recruiter: Uuid, date: &str, start: &str, end: &str) {
    ctx.server
        .post(&format!("/api/recruiters/{}/slots/generate", recruiter))
        .json(&json!({
            "date": date,
            "start_time": start,
            "end_time": end,
            "duration_minutes": 30,
            "type": "video",
        }))
        .await
        .assert_status(StatusCode::CREATED);
}

fn week_path(recruiter: Uuid) -> String {
    format!("/api/recruiters/{}/week", recruiter)
}

#[tokio::test]
async fn test_week_around_wednesday() {
    let ctx = TestContext::new();
    let recruiter = Uuid::new_v4();
    seed(&ctx, recruiter, "2024-03-12", "10:00", "10:30").await;

    let response = ctx
        .server
        .get(&week_path(recruiter))
        .add_query_param("anchor", "2024-03-13")
        .add_query_param("interview_start", "2024-03-11")
        .add_query_param("interview_end", "2024-03-17")
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();

    let week = &body["week"];
    assert_eq!(week["week_start"], "2024-03-11");
    let days = week["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert!(days.iter().all(|day| day["is_in_period"] == json!(true)));

    let counts: Vec<usize> = days
        .iter()
        .map(|day| day["slots"].as_array().unwrap().len())
        .collect();
    assert_eq!(counts, vec![0, 1, 0, 0, 0, 0, 0]);
    assert_eq!(days[1]["slots"][0]["start_time"], "10:00");
    assert_eq!(days[1]["slots"][0]["type"], "video");

    // 10:00 is 24 five-minute cells after 08:00.
    let tuesday_cells = body["grid"]["columns"][1]["cells"].as_array().unwrap();
    assert_eq!(tuesday_cells[24]["time"], "10:00");
    assert_eq!(tuesday_cells[24]["placements"][0]["height"], 60.0);
    assert_eq!(tuesday_cells[24]["placements"][0]["top"], 0.0);
}

#[tokio::test]
async fn test_week_hides_slots_outside_period() {
    let ctx = TestContext::new();
    let recruiter = Uuid::new_v4();
    seed(&ctx, recruiter, "2024-03-11", "09:00", "09:30").await;
    seed(&ctx, recruiter, "2024-03-14", "09:00", "09:30").await;

    let body = ctx
        .server
        .get(&week_path(recruiter))
        .add_query_param("anchor", "2024-03-17")
        .add_query_param("interview_start", "2024-03-13")
        .add_query_param("interview_end", "2024-03-15")
        .add_query_param("selected", "2024-03-14")
        .await
        .json::<Value>();

    let days = body["week"]["days"].as_array().unwrap();
    assert_eq!(days[0]["is_in_period"], false);
    assert_eq!(days[0]["slots"], json!([]));
    assert_eq!(days[3]["slots"].as_array().unwrap().len(), 1);
    assert_eq!(days[3]["is_selected"], true);
}

#[tokio::test]
async fn test_week_without_period_is_empty() {
    let ctx = TestContext::new();
    let recruiter = Uuid::new_v4();
    seed(&ctx, recruiter, "2024-03-12", "10:00", "10:30").await;

    let response = ctx
        .server
        .get(&week_path(recruiter))
        .add_query_param("anchor", "2024-03-13")
        .add_query_param("interview_start", "2024-03-11")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "week": null, "grid": null }));
}

fn validation_message(response: &axum_test::TestResponse) -> String {
    let body = response.json::<Value>();
    body["error"]
        .as_str()
        .unwrap_or_else(|| panic!("no error message in {}", body))
        .to_string()
}

#[rstest]
#[case("anchor", "13/03/2024")]
#[case("interview_start", "soon")]
#[case("selected", "2024-02-30")]
#[tokio::test]
async fn test_malformed_query_date_is_a_json_validation_error(
    #[case] param: &str,
    #[case] value: &str,
) {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .get(&week_path(Uuid::new_v4()))
        .add_query_param(param, value)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = validation_message(&response);
    assert!(
        message.starts_with("Validation error: Failed to deserialize query string"),
        "{}",
        message
    );
}

#[tokio::test]
async fn test_malformed_recruiter_id_is_a_json_validation_error() {
    let ctx = TestContext::new();
    let response = ctx.server.get("/api/recruiters/not-a-uuid/week").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(validation_message(&response).starts_with("Validation error: "));
}

#[rstest]
#[case(NaiveDate::MAX)]
#[case(NaiveDate::MIN)]
#[tokio::test]
async fn test_week_beyond_calendar_limits_is_rejected(#[case] anchor: NaiveDate) {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .get(&week_path(Uuid::new_v4()))
        .add_query_param("anchor", anchor.to_string())
        .add_query_param("interview_start", "2024-03-11")
        .add_query_param("interview_end", "2024-03-17")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = validation_message(&response);
    assert_eq!(
        message,
        format!(
            "Validation error: the week of {} falls outside the supported calendar",
            anchor
        )
    );
}
