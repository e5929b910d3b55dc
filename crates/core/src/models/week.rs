use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time_slot::TimeSlot;

/// Inclusive date bounds during which interviews may be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl InterviewPeriod {
    /// Both bounds are required; a missing bound means there is no period yet.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        Some(Self {
            start: start?,
            end: end?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub is_in_period: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// Empty whenever `is_in_period` is false.
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    /// Always a Monday.
    pub week_start: NaiveDate,
    /// Monday through Sunday.
    pub days: [WeekDay; 7],
}
