//! # Time grid layout
//!
//! Turns a [`WeekView`] into rows of fixed-size minute cells with pixel
//! positions for each slot. This is derived presentation data; nothing here
//! changes a slot.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::{AgendaError, AgendaResult},
    models::{time_slot::TimeSlot, week::WeekView},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeGrid {
    day_start_hour: u32,
    day_end_hour: u32,
    cell_minutes: u32,
    pixels_per_minute: f32,
    min_slot_height: f32,
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            day_start_hour: 8,
            day_end_hour: 18,
            cell_minutes: 5,
            pixels_per_minute: 2.0,
            min_slot_height: 20.0,
        }
    }
}

impl TimeGrid {
    /// # Errors
    ///
    /// * `AgendaError::Configuration` - hours out of `0..=23` or not ascending,
    ///   a cell size that does not divide an hour, or non-positive pixel sizes
    pub fn new(
        day_start_hour: u32,
        day_end_hour: u32,
        cell_minutes: u32,
        pixels_per_minute: f32,
        min_slot_height: f32,
    ) -> AgendaResult<Self> {
        if day_end_hour > 23 {
            return Err(AgendaError::Configuration(format!(
                "day end hour must be between 0 and 23, got {}",
                day_end_hour
            )));
        }
        if day_start_hour >= day_end_hour {
            return Err(AgendaError::Configuration(format!(
                "day start hour {} must be before day end hour {}",
                day_start_hour, day_end_hour
            )));
        }
        if cell_minutes == 0 || 60 % cell_minutes != 0 {
            return Err(AgendaError::Configuration(format!(
                "cell size must divide an hour evenly, got {} minutes",
                cell_minutes
            )));
        }
        if !(pixels_per_minute > 0.0) || !(min_slot_height > 0.0) {
            return Err(AgendaError::Configuration(
                "pixel sizes must be positive".to_string(),
            ));
        }

        Ok(Self {
            day_start_hour,
            day_end_hour,
            cell_minutes,
            pixels_per_minute,
            min_slot_height,
        })
    }

    pub fn day_start_hour(&self) -> u32 {
        self.day_start_hour
    }

    pub fn day_end_hour(&self) -> u32 {
        self.day_end_hour
    }

    pub fn cell_minutes(&self) -> u32 {
        self.cell_minutes
    }

    pub fn pixels_per_minute(&self) -> f32 {
        self.pixels_per_minute
    }

    pub fn min_slot_height(&self) -> f32 {
        self.min_slot_height
    }

    fn first_minute(&self) -> u32 {
        self.day_start_hour * 60
    }

    /// Start of the last cell: the top of the last hour.
    fn last_minute(&self) -> u32 {
        self.day_end_hour * 60
    }

    pub fn cell_count(&self) -> usize {
        ((self.last_minute() - self.first_minute()) / self.cell_minutes + 1) as usize
    }

    /// Start times of every cell, top to bottom.
    pub fn cell_times(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        (self.first_minute()..=self.last_minute())
            .step_by(self.cell_minutes as usize)
            .filter_map(|minute| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0))
    }

    /// Rendered height, never below the clickable minimum.
    pub fn slot_height(&self, duration_minutes: i64) -> f32 {
        (duration_minutes as f32 * self.pixels_per_minute).max(self.min_slot_height)
    }

    /// Cell index holding `slot`'s start, with its placement in that cell.
    pub fn place(&self, slot: &TimeSlot) -> Option<(usize, SlotPlacement)> {
        let start = slot.start_time.hour() * 60 + slot.start_time.minute();
        if start < self.first_minute() || start >= self.last_minute() + self.cell_minutes {
            return None;
        }

        let offset = start - self.first_minute();
        let index = (offset / self.cell_minutes) as usize;
        let within_cell = offset % self.cell_minutes;

        Some((
            index,
            SlotPlacement {
                slot_id: slot.id,
                duration: slot.duration,
                top: within_cell as f32 * self.pixels_per_minute,
                height: self.slot_height(slot.duration),
            },
        ))
    }

    pub fn layout(&self, view: &WeekView) -> WeekGrid {
        let columns = view
            .days
            .iter()
            .map(|day| {
                let mut cells: Vec<GridCell> = self
                    .cell_times()
                    .map(|time| GridCell {
                        time,
                        is_hour_boundary: time.minute() == 0,
                        is_quarter_boundary: time.minute() % 15 == 0,
                        placements: Vec::new(),
                    })
                    .collect();

                for slot in &day.slots {
                    if let Some((index, placement)) = self.place(slot) {
                        cells[index].placements.push(placement);
                    }
                }

                DayColumn {
                    date: day.date,
                    is_in_period: day.is_in_period,
                    cells,
                }
            })
            .collect();

        WeekGrid { columns }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotPlacement {
    pub slot_id: Uuid,
    pub duration: i64,
    /// Offset from the top of the cell, in pixels.
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    #[serde(with = "crate::models::time_slot::hhmm")]
    pub time: NaiveTime,
    pub is_hour_boundary: bool,
    pub is_quarter_boundary: bool,
    pub placements: Vec<SlotPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_in_period: bool,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekGrid {
    pub columns: Vec<DayColumn>,
}
