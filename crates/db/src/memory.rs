use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use jobfair_core::{
    errors::AgendaResult,
    models::time_slot::{NewTimeSlot, SlotStatus, TimeSlot},
};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::store::{DateRange, TimeSlotStore, check_batch, check_reactivation, not_found};

/// Process-local [`TimeSlotStore`], used when no database is configured.
///
/// Writers hold the lock for the whole check-then-insert, so batches are
/// atomic with respect to each other.
#[derive(Default)]
pub struct InMemoryTimeSlotStore {
    slots: RwLock<HashMap<Uuid, TimeSlot>>,
}

impl InMemoryTimeSlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn recruiter_slots<'a>(
    slots: &'a HashMap<Uuid, TimeSlot>,
    recruiter_id: Uuid,
    range: DateRange,
) -> impl Iterator<Item = &'a TimeSlot> {
    slots
        .values()
        .filter(move |slot| slot.recruiter_id == recruiter_id && range.contains(slot.date))
}

#[async_trait]
impl TimeSlotStore for InMemoryTimeSlotStore {
    async fn create_slots(
        &self,
        recruiter_id: Uuid,
        drafts: Vec<NewTimeSlot>,
    ) -> AgendaResult<Vec<TimeSlot>> {
        let mut slots = self.slots.write().await;

        let existing: Vec<TimeSlot> = recruiter_slots(&slots, recruiter_id, DateRange::default())
            .cloned()
            .collect();
        if let Err(err) = check_batch(&existing, &drafts) {
            warn!(%recruiter_id, error = %err, "rejected slot batch");
            return Err(err);
        }

        let now = Utc::now();
        let created: Vec<TimeSlot> = drafts
            .into_iter()
            .map(|draft| draft.into_slot(Uuid::new_v4(), recruiter_id, now))
            .collect();
        for slot in &created {
            slots.insert(slot.id, slot.clone());
        }

        debug!(%recruiter_id, count = created.len(), "stored interview slots in memory");
        Ok(created)
    }

    async fn list_slots(&self, recruiter_id: Uuid, range: DateRange) -> AgendaResult<Vec<TimeSlot>> {
        let slots = self.slots.read().await;
        let mut listed: Vec<TimeSlot> = recruiter_slots(&slots, recruiter_id, range).cloned().collect();
        listed.sort_by_key(|slot| (slot.date, slot.start_time, slot.created_at));
        Ok(listed)
    }

    async fn get_slot(&self, id: Uuid) -> AgendaResult<Option<TimeSlot>> {
        Ok(self.slots.read().await.get(&id).cloned())
    }

    async fn update_status(&self, id: Uuid, status: SlotStatus) -> AgendaResult<TimeSlot> {
        let mut slots = self.slots.write().await;
        let current = slots.get(&id).cloned().ok_or_else(|| not_found(id))?;

        let same_day = DateRange {
            from: Some(current.date),
            to: Some(current.date),
        };
        let existing: Vec<TimeSlot> = recruiter_slots(&slots, current.recruiter_id, same_day)
            .cloned()
            .collect();
        check_reactivation(&existing, &current, status)?;

        let slot = slots.get_mut(&id).ok_or_else(|| not_found(id))?;
        slot.status = status;
        Ok(slot.clone())
    }

    async fn delete_slot(&self, id: Uuid) -> AgendaResult<()> {
        match self.slots.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}
