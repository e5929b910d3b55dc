//! # Slot generation
//!
//! Splits a recruiter's selected time range into consecutive interview slots of
//! a fixed length. The last slot is truncated to the end of the range instead
//! of overflowing it, so the emitted slots partition `[start, end)` exactly.
//!
//! Generation is split in two steps:
//!
//! 1. [`plan_slots`] validates the input once and returns a [`SlotPlan`]
//! 2. [`SlotPlan::iter`] walks the plan lazily; every call starts over
//!
//! [`generate_slots`] does both and collects the result.

use chrono::{NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use crate::{
    errors::{AgendaError, AgendaResult},
    models::time_slot::{NewTimeSlot, SlotRange, SlotStatus, SlotType, TIME_FORMAT, TimeSlot},
};

/// Parses an `HH:MM` wall-clock time, naming `field` in the error.
///
/// Times run from `00:00` to `23:59`. `24:00` has no `NaiveTime`
/// representation, so a range can end at 23:59 at the latest and the last
/// minute of a day is never covered by a slot.
pub fn parse_time(field: &str, raw: &str) -> AgendaResult<NaiveTime> {
    if raw.trim() == "24:00" {
        return Err(AgendaError::Validation(format!(
            "{} cannot be 24:00, the latest time of day is 23:59",
            field
        )));
    }
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|_| {
        AgendaError::Validation(format!("{} must be a time formatted as HH:MM, got '{}'", field, raw))
    })
}

/// Validated generator input. Times are kept as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlan {
    date: NaiveDate,
    start: u32,
    end: u32,
    duration: u32,
    kind: SlotType,
}

impl SlotPlan {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> SlotType {
        self.kind
    }

    /// Number of slots the plan yields, counting a truncated trailing slot.
    pub fn len(&self) -> usize {
        (self.end - self.start).div_ceil(self.duration) as usize
    }

    /// A valid plan always yields at least one slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> SlotIter {
        SlotIter {
            plan: *self,
            current: self.start,
        }
    }
}

impl IntoIterator for &SlotPlan {
    type Item = NewTimeSlot;
    type IntoIter = SlotIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy walk over a [`SlotPlan`].
#[derive(Debug, Clone)]
pub struct SlotIter {
    plan: SlotPlan,
    current: u32,
}

impl Iterator for SlotIter {
    type Item = NewTimeSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.plan.end {
            return None;
        }

        let slice_start = self.current;
        let slice_end = (slice_start + self.plan.duration).min(self.plan.end);
        self.current = slice_end;

        Some(NewTimeSlot {
            date: self.plan.date,
            start_time: time_of_day(slice_start)?,
            end_time: time_of_day(slice_end)?,
            duration: i64::from(slice_end - slice_start),
            kind: self.plan.kind,
            status: SlotStatus::Available,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.plan.end.saturating_sub(self.current)).div_ceil(self.plan.duration) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlotIter {}

fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn time_of_day(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Validates a range given as `HH:MM` strings. See [`plan_slots_between`].
pub fn plan_slots(
    start_time: &str,
    end_time: &str,
    date: NaiveDate,
    duration_minutes: i64,
    kind: SlotType,
) -> AgendaResult<SlotPlan> {
    let start = parse_time("start_time", start_time)?;
    let end = parse_time("end_time", end_time)?;
    plan_slots_between(start, end, date, duration_minutes, kind)
}

/// Validates a range and slot length.
///
/// The range may be given in either order. Seconds are ignored.
///
/// # Errors
///
/// * `AgendaError::Validation` - `duration_minutes` is not positive, or the
///   range is empty once normalized
pub fn plan_slots_between(
    start: NaiveTime,
    end: NaiveTime,
    date: NaiveDate,
    duration_minutes: i64,
    kind: SlotType,
) -> AgendaResult<SlotPlan> {
    if duration_minutes <= 0 {
        return Err(AgendaError::Validation(format!(
            "duration must be a positive number of minutes, got {}",
            duration_minutes
        )));
    }
    // Longer than a day can never split anything.
    let duration = u32::try_from(duration_minutes.min(24 * 60)).unwrap_or(24 * 60);

    let (mut start, mut end) = (minutes_of_day(start), minutes_of_day(end));
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    if start == end {
        return Err(AgendaError::Validation(
            "range must be greater than zero minutes".to_string(),
        ));
    }

    let plan = SlotPlan {
        date,
        start,
        end,
        duration,
        kind,
    };
    debug!(%date, start, end, duration, slots = plan.len(), "planned interview slots");
    Ok(plan)
}

/// Splits `[start_time, end_time)` into slots of `duration_minutes`.
///
/// Every slot is `available` and shares `date` and `kind`.
pub fn generate_slots(
    start_time: &str,
    end_time: &str,
    date: NaiveDate,
    duration_minutes: i64,
    kind: SlotType,
) -> AgendaResult<Vec<NewTimeSlot>> {
    Ok(plan_slots(start_time, end_time, date, duration_minutes, kind)?
        .iter()
        .collect())
}

/// User-facing summary of a generated batch.
pub fn summarize(count: usize) -> String {
    match count {
        1 => "Created 1 interview slot".to_string(),
        n => format!("Created {} interview slots", n),
    }
}

/// First existing slot still occupying part of `candidate`'s range.
pub fn find_overlap<'a, C>(existing: &'a [TimeSlot], candidate: &C) -> Option<&'a TimeSlot>
where
    C: SlotRange + ?Sized,
{
    existing
        .iter()
        .filter(|slot| slot.status.occupies_range())
        .find(|slot| slot.overlaps(candidate))
}
