use crate::models::DbTimeSlot;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use jobfair_core::models::time_slot::{NewTimeSlot, SlotStatus};
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str =
    "id, recruiter_id, slot_date, start_time, end_time, duration, slot_type, status, created_at";

/// Serializes slot writes of one recruiter until the surrounding transaction ends.
pub async fn lock_recruiter(conn: &mut PgConnection, recruiter_id: Uuid) -> Result<()> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text))")
        .bind(recruiter_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

pub async fn create_time_slot(
    conn: &mut PgConnection,
    recruiter_id: Uuid,
    slot: &NewTimeSlot,
) -> Result<DbTimeSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let time_slot = sqlx::query_as::<_, DbTimeSlot>(&format!(
        r#"
        INSERT INTO interview_slots ({COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(recruiter_id)
    .bind(slot.date)
    .bind(slot.start_time)
    .bind(slot.end_time)
    .bind(i32::try_from(slot.duration)?)
    .bind(slot.kind.as_str())
    .bind(slot.status.as_str())
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    Ok(time_slot)
}

pub async fn get_time_slots_by_recruiter_id(
    conn: &mut PgConnection,
    recruiter_id: Uuid,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM interview_slots
        WHERE recruiter_id = $1
          AND ($2::date IS NULL OR slot_date >= $2)
          AND ($3::date IS NULL OR slot_date <= $3)
        ORDER BY slot_date ASC, start_time ASC
        "#
    ))
    .bind(recruiter_id)
    .bind(from)
    .bind(to)
    .fetch_all(&mut *conn)
    .await?;

    Ok(time_slots)
}

pub async fn get_time_slot_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(&format!(
        "SELECT {COLUMNS} FROM interview_slots WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(time_slot)
}

pub async fn update_time_slot_status(
    conn: &mut PgConnection,
    id: Uuid,
    status: SlotStatus,
) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(&format!(
        r#"
        UPDATE interview_slots
        SET status = $2
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(&mut *conn)
    .await?;

    Ok(time_slot)
}

/// Returns whether a row was removed.
pub async fn delete_time_slot(conn: &mut PgConnection, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM interview_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}
