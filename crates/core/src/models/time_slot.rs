use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AgendaError;

/// Wall-clock format used for every time-of-day on the wire.
pub const TIME_FORMAT: &str = "%H:%M";

/// How the interview is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Video,
    Phone,
}

impl SlotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotType::Video => "video",
            SlotType::Phone => "phone",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotType {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(SlotType::Video),
            "phone" => Ok(SlotType::Phone),
            other => Err(AgendaError::Validation(format!("unknown slot type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Completed,
    Cancelled,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Booked => "booked",
            SlotStatus::Completed => "completed",
            SlotStatus::Cancelled => "cancelled",
        }
    }

    /// Cancelled slots stay on record but no longer occupy their range.
    pub fn occupies_range(&self) -> bool {
        !matches!(self, SlotStatus::Cancelled)
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(SlotStatus::Available),
            "booked" => Ok(SlotStatus::Booked),
            "completed" => Ok(SlotStatus::Completed),
            "cancelled" => Ok(SlotStatus::Cancelled),
            other => Err(AgendaError::Validation(format!("unknown slot status '{}'", other))),
        }
    }
}

/// A slot produced by the generator that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTimeSlot {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Minutes, always `end_time - start_time`.
    pub duration: i64,
    #[serde(rename = "type")]
    pub kind: SlotType,
    pub status: SlotStatus,
}

impl NewTimeSlot {
    /// Attaches the identity handed out by the persistence layer.
    pub fn into_slot(self, id: Uuid, recruiter_id: Uuid, created_at: DateTime<Utc>) -> TimeSlot {
        TimeSlot {
            id,
            recruiter_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            kind: self.kind,
            status: self.status,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub duration: i64,
    #[serde(rename = "type")]
    pub kind: SlotType,
    pub status: SlotStatus,
    pub created_at: DateTime<Utc>,
}

/// Anything with a date and a half-open `[start, end)` wall-clock range.
pub trait SlotRange {
    fn date(&self) -> NaiveDate;
    fn start_time(&self) -> NaiveTime;
    fn end_time(&self) -> NaiveTime;

    fn overlaps<R: SlotRange + ?Sized>(&self, other: &R) -> bool {
        self.date() == other.date()
            && self.start_time() < other.end_time()
            && other.start_time() < self.end_time()
    }

    fn describe_range(&self) -> String {
        format!(
            "{} {}-{}",
            self.date(),
            self.start_time().format(TIME_FORMAT),
            self.end_time().format(TIME_FORMAT)
        )
    }
}

impl SlotRange for NewTimeSlot {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn start_time(&self) -> NaiveTime {
        self.start_time
    }
    fn end_time(&self) -> NaiveTime {
        self.end_time
    }
}

impl SlotRange for TimeSlot {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn start_time(&self) -> NaiveTime {
        self.start_time
    }
    fn end_time(&self) -> NaiveTime {
        self.end_time
    }
}

/// Serde adapter for `HH:MM` wall-clock times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(D::Error::custom)
    }
}
