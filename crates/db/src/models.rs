use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{Result, WrapErr};
use jobfair_core::models::time_slot::{SlotStatus, SlotType, TimeSlot};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration: i32,
    pub slot_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbTimeSlot {
    pub fn into_time_slot(self) -> Result<TimeSlot> {
        Ok(TimeSlot {
            id: self.id,
            recruiter_id: self.recruiter_id,
            date: self.slot_date,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: i64::from(self.duration),
            kind: self
                .slot_type
                .parse::<SlotType>()
                .wrap_err_with(|| format!("slot {} has an invalid type", self.id))?,
            status: self
                .status
                .parse::<SlotStatus>()
                .wrap_err_with(|| format!("slot {} has an invalid status", self.id))?,
            created_at: self.created_at,
        })
    }
}
