//! # Slot persistence
//!
//! The generator only guarantees that one batch does not overlap itself.
//! Stores are where a recruiter's slots are checked against each other: no
//! two slots of one recruiter that still occupy their range may overlap on
//! the same date.

use async_trait::async_trait;
use chrono::NaiveDate;
use jobfair_core::{
    errors::{AgendaError, AgendaResult},
    models::time_slot::{NewTimeSlot, SlotRange, SlotStatus, TimeSlot},
    slots::find_overlap,
};
use mockall::automock;
use uuid::Uuid;

/// Optional inclusive date bounds for listing slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

#[automock]
#[async_trait]
pub trait TimeSlotStore: Send + Sync {
    /// Persists a whole batch or nothing.
    ///
    /// # Errors
    ///
    /// * `AgendaError::Conflict` - a draft overlaps a stored slot or another draft
    async fn create_slots(
        &self,
        recruiter_id: Uuid,
        drafts: Vec<NewTimeSlot>,
    ) -> AgendaResult<Vec<TimeSlot>>;

    /// Slots ordered by date, then start time.
    async fn list_slots(&self, recruiter_id: Uuid, range: DateRange) -> AgendaResult<Vec<TimeSlot>>;

    async fn get_slot(&self, id: Uuid) -> AgendaResult<Option<TimeSlot>>;

    /// # Errors
    ///
    /// * `AgendaError::NotFound` - unknown slot
    /// * `AgendaError::Conflict` - reactivating a cancelled slot whose range is taken
    async fn update_status(&self, id: Uuid, status: SlotStatus) -> AgendaResult<TimeSlot>;

    /// # Errors
    ///
    /// * `AgendaError::NotFound` - unknown slot
    async fn delete_slot(&self, id: Uuid) -> AgendaResult<()>;
}

/// Checks a batch against `existing` and against itself.
pub fn check_batch(existing: &[TimeSlot], drafts: &[NewTimeSlot]) -> AgendaResult<()> {
    for (index, draft) in drafts.iter().enumerate() {
        if let Some(taken) = find_overlap(existing, draft) {
            return Err(conflict(draft, taken));
        }
        if let Some(other) = drafts[..index].iter().find(|other| other.overlaps(draft)) {
            return Err(conflict(draft, other));
        }
    }
    Ok(())
}

/// Checks that bringing `slot` back to an occupying status keeps the range free.
pub fn check_reactivation(
    existing: &[TimeSlot],
    slot: &TimeSlot,
    status: SlotStatus,
) -> AgendaResult<()> {
    if slot.status.occupies_range() || !status.occupies_range() {
        return Ok(());
    }
    let others: Vec<TimeSlot> = existing.iter().filter(|s| s.id != slot.id).cloned().collect();
    match find_overlap(&others, slot) {
        Some(taken) => Err(conflict(slot, taken)),
        None => Ok(()),
    }
}

pub fn not_found(id: Uuid) -> AgendaError {
    AgendaError::NotFound(format!("Time slot with ID {} not found", id))
}

fn conflict<A: SlotRange + ?Sized, B: SlotRange + ?Sized>(wanted: &A, taken: &B) -> AgendaError {
    AgendaError::Conflict(format!(
        "{} overlaps existing slot {}",
        wanted.describe_range(),
        taken.describe_range()
    ))
}

/// Date span covered by a batch, used to narrow the overlap lookup.
pub fn batch_range(drafts: &[NewTimeSlot]) -> DateRange {
    DateRange {
        from: drafts.iter().map(|d| d.date).min(),
        to: drafts.iter().map(|d| d.date).max(),
    }
}
