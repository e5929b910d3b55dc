use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    time_slot::{SlotStatus, SlotType, TimeSlot},
    week::WeekView,
};
use crate::{
    errors::{AgendaError, AgendaResult},
    grid::WeekGrid,
    slots::{SlotPlan, plan_slots},
};

/// Body of a slot generation request, as sent by the agenda form.
///
/// Every field is optional on the wire so that a missing one is reported as a
/// validation error naming it. Times are `HH:MM` between `00:00` and `23:59`;
/// `24:00` is rejected, so a range can stop one minute short of midnight at
/// most.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateSlotsRequest {
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// A number, or a numeric string as produced by form selects.
    pub duration_minutes: Option<Value>,
    /// Defaults to video.
    #[serde(rename = "type", default)]
    pub kind: Option<SlotType>,
}

impl GenerateSlotsRequest {
    pub fn into_plan(self) -> AgendaResult<SlotPlan> {
        let date = self.date.ok_or_else(|| missing("date"))?;
        let start_time = self.start_time.ok_or_else(|| missing("start_time"))?;
        let end_time = self.end_time.ok_or_else(|| missing("end_time"))?;
        let duration = parse_duration(self.duration_minutes.ok_or_else(|| missing("duration_minutes"))?)?;

        plan_slots(
            &start_time,
            &end_time,
            date,
            duration,
            self.kind.unwrap_or(SlotType::Video),
        )
    }
}

fn missing(field: &str) -> AgendaError {
    AgendaError::Validation(format!("{} is required", field))
}

fn parse_duration(raw: Value) -> AgendaResult<i64> {
    let parsed = match &raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        AgendaError::Validation(format!("duration_minutes must be a whole number, got {}", raw))
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSlotsResponse {
    pub created: usize,
    pub message: String,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSlotsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: SlotStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekQuery {
    /// Any date of the week to show; today when absent.
    pub anchor: Option<NaiveDate>,
    pub interview_start: Option<NaiveDate>,
    pub interview_end: Option<NaiveDate>,
    pub selected: Option<NaiveDate>,
}

/// Both fields are `None` when no interview period was given.
#[derive(Debug, Clone, Serialize)]
pub struct WeekResponse {
    pub week: Option<WeekView>,
    pub grid: Option<WeekGrid>,
}
