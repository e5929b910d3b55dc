use async_trait::async_trait;
use eyre::Result;
use jobfair_core::{
    errors::AgendaResult,
    models::time_slot::{NewTimeSlot, SlotStatus, TimeSlot},
};
use sqlx::PgConnection;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    DbPool,
    models::DbTimeSlot,
    repositories::time_slot,
    store::{DateRange, TimeSlotStore, batch_range, check_batch, check_reactivation, not_found},
};

/// [`TimeSlotStore`] backed by the `interview_slots` table.
pub struct PgTimeSlotStore {
    pool: DbPool,
}

impl PgTimeSlotStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_slots(rows: Vec<DbTimeSlot>) -> Result<Vec<TimeSlot>> {
    rows.into_iter().map(DbTimeSlot::into_time_slot).collect()
}

async fn slots_in_range(
    conn: &mut PgConnection,
    recruiter_id: Uuid,
    range: DateRange,
) -> Result<Vec<TimeSlot>> {
    let rows =
        time_slot::get_time_slots_by_recruiter_id(conn, recruiter_id, range.from, range.to).await?;
    into_slots(rows)
}

#[async_trait]
impl TimeSlotStore for PgTimeSlotStore {
    async fn create_slots(
        &self,
        recruiter_id: Uuid,
        drafts: Vec<NewTimeSlot>,
    ) -> AgendaResult<Vec<TimeSlot>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await.map_err(eyre::Report::from)?;
        time_slot::lock_recruiter(&mut tx, recruiter_id).await?;

        let existing = slots_in_range(&mut tx, recruiter_id, batch_range(&drafts)).await?;
        if let Err(err) = check_batch(&existing, &drafts) {
            warn!(%recruiter_id, error = %err, "rejected slot batch");
            return Err(err);
        }

        let mut created = Vec::with_capacity(drafts.len());
        for draft in &drafts {
            let row = time_slot::create_time_slot(&mut tx, recruiter_id, draft).await?;
            created.push(row.into_time_slot()?);
        }
        tx.commit().await.map_err(eyre::Report::from)?;

        info!(%recruiter_id, count = created.len(), "persisted interview slots");
        Ok(created)
    }

    async fn list_slots(&self, recruiter_id: Uuid, range: DateRange) -> AgendaResult<Vec<TimeSlot>> {
        let mut conn = self.pool.acquire().await.map_err(eyre::Report::from)?;
        Ok(slots_in_range(&mut conn, recruiter_id, range).await?)
    }

    async fn get_slot(&self, id: Uuid) -> AgendaResult<Option<TimeSlot>> {
        let mut conn = self.pool.acquire().await.map_err(eyre::Report::from)?;
        let row = time_slot::get_time_slot_by_id(&mut conn, id).await?;
        Ok(row.map(DbTimeSlot::into_time_slot).transpose()?)
    }

    async fn update_status(&self, id: Uuid, status: SlotStatus) -> AgendaResult<TimeSlot> {
        let mut tx = self.pool.begin().await.map_err(eyre::Report::from)?;

        let current = time_slot::get_time_slot_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| not_found(id))?
            .into_time_slot()?;
        time_slot::lock_recruiter(&mut tx, current.recruiter_id).await?;

        let same_day = DateRange {
            from: Some(current.date),
            to: Some(current.date),
        };
        let existing = slots_in_range(&mut tx, current.recruiter_id, same_day).await?;
        check_reactivation(&existing, &current, status)?;

        let updated = time_slot::update_time_slot_status(&mut tx, id, status)
            .await?
            .ok_or_else(|| not_found(id))?
            .into_time_slot()?;
        tx.commit().await.map_err(eyre::Report::from)?;

        info!(%id, %status, "updated slot status");
        Ok(updated)
    }

    async fn delete_slot(&self, id: Uuid) -> AgendaResult<()> {
        let mut conn = self.pool.acquire().await.map_err(eyre::Report::from)?;
        if !time_slot::delete_time_slot(&mut conn, id).await? {
            return Err(not_found(id));
        }

        info!(%id, "deleted slot");
        Ok(())
    }
}
