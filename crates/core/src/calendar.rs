//! # Week view
//!
//! Builds the Monday-to-Sunday view shown by the agenda. The view only depends
//! on its arguments: navigating is a matter of calling [`build_week_view`]
//! again with an anchor shifted by [`shift_week`].
//!
//! All date arithmetic is checked. A week reaching past the calendar limits
//! of `NaiveDate` is reported instead of panicking.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::{
    errors::{AgendaError, AgendaResult},
    models::{
        time_slot::TimeSlot,
        week::{InterviewPeriod, WeekDay, WeekView},
    },
};

/// Monday of the ISO week containing `date`.
///
/// `num_days_from_monday` maps Sunday to 6, so a Sunday anchor walks back to
/// the Monday six days earlier rather than forward to the next one. `None`
/// when that Monday precedes `NaiveDate::MIN`.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// Moves an anchor by whole weeks, backwards for negative `weeks`.
///
/// `None` when the result falls outside the representable calendar.
pub fn shift_week(anchor: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    let days = Days::new(weeks.checked_mul(7)?.unsigned_abs());
    if weeks < 0 {
        anchor.checked_sub_days(days)
    } else {
        anchor.checked_add_days(days)
    }
}

/// The seven dates, Monday first, of the week containing `anchor`.
///
/// # Errors
///
/// `AgendaError::Validation` when part of that week cannot be represented.
pub fn week_dates(anchor: NaiveDate) -> AgendaResult<[NaiveDate; 7]> {
    let monday = week_start(anchor).ok_or_else(|| unrepresentable(anchor))?;
    let mut dates = [monday; 7];
    for (offset, date) in (0u64..).zip(dates.iter_mut()) {
        *date = monday
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| unrepresentable(anchor))?;
    }
    Ok(dates)
}

fn unrepresentable(anchor: NaiveDate) -> AgendaError {
    AgendaError::Validation(format!(
        "the week of {} falls outside the supported calendar",
        anchor
    ))
}

/// Builds the view for the week containing `anchor`.
///
/// Returns `Ok(None)` when either interview bound is missing: without a
/// period there is nothing to show. Slots dated outside the period are left
/// out of the view even when they are part of `slots`.
///
/// # Errors
///
/// `AgendaError::Validation` when the anchor's week cannot be represented,
/// see [`week_dates`].
pub fn build_week_view(
    anchor: NaiveDate,
    interview_start: Option<NaiveDate>,
    interview_end: Option<NaiveDate>,
    slots: &[TimeSlot],
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> AgendaResult<Option<WeekView>> {
    let Some(period) = InterviewPeriod::from_bounds(interview_start, interview_end) else {
        debug!(%anchor, "no interview period configured, skipping week view");
        return Ok(None);
    };

    let dates = week_dates(anchor)?;
    let days = dates.map(|date| {
        let is_in_period = period.contains(date);
        let mut day_slots: Vec<TimeSlot> = if is_in_period {
            slots.iter().filter(|slot| slot.date == date).cloned().collect()
        } else {
            Vec::new()
        };
        day_slots.sort_by_key(|slot| slot.start_time);

        WeekDay {
            date,
            is_in_period,
            is_today: date == today,
            is_selected: selected == Some(date),
            slots: day_slots,
        }
    });

    Ok(Some(WeekView {
        week_start: dates[0],
        days,
    }))
}
