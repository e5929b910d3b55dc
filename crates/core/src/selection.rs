//! Drag selection over the time grid.
//!
//! Pointer events drive a two-state machine. Only releasing a selection yields
//! a range; slot math stays in [`crate::slots`].

use chrono::{NaiveDate, NaiveTime};

use crate::{
    errors::AgendaResult,
    models::time_slot::{NewTimeSlot, SlotType},
    slots::plan_slots_between,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotSelection {
    #[default]
    Idle,
    Selecting {
        date: NaiveDate,
        anchor: NaiveTime,
        current: NaiveTime,
    },
}

/// Raw pair accumulated by a drag. `start` is where the pointer went down and
/// may be later than `end` when dragging upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedRange {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl SelectedRange {
    pub fn generate(&self, duration_minutes: i64, kind: SlotType) -> AgendaResult<Vec<NewTimeSlot>> {
        Ok(plan_slots_between(self.start, self.end, self.date, duration_minutes, kind)?
            .iter()
            .collect())
    }
}

impl SlotSelection {
    pub fn is_selecting(&self) -> bool {
        matches!(self, SlotSelection::Selecting { .. })
    }

    pub fn pointer_down(&mut self, date: NaiveDate, time: NaiveTime) {
        if let SlotSelection::Idle = self {
            *self = SlotSelection::Selecting {
                date,
                anchor: time,
                current: time,
            };
        }
    }

    pub fn pointer_move(&mut self, time: NaiveTime) {
        if let SlotSelection::Selecting { current, .. } = self {
            *current = time;
        }
    }

    pub fn pointer_up(&mut self) -> Option<SelectedRange> {
        match std::mem::take(self) {
            SlotSelection::Idle => None,
            SlotSelection::Selecting {
                date,
                anchor,
                current,
            } => Some(SelectedRange {
                date,
                start: anchor,
                end: current,
            }),
        }
    }

    pub fn cancel(&mut self) {
        *self = SlotSelection::Idle;
    }
}
