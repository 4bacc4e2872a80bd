//! Slot store access.
//!
//! Table names come from `SlotCategory::table_name` (a closed enum, never
//! caller input), so interpolating them into the query text is safe; all
//! values go through bind parameters.

use crate::models::DbSlot;
use eyre::Result;
use hirondelle_core::models::slot::{SlotCategory, SlotKey, SlotShape};
use sqlx::{Pool, Postgres};

pub async fn find_slot(
    pool: &Pool<Postgres>,
    category: SlotCategory,
    key: &SlotKey,
) -> Result<Option<DbSlot>> {
    let slot = match key {
        SlotKey::Timed { time_label, position_index } => {
            let sql = format!(
                r#"
                SELECT time_slot, spot_index, name, email
                FROM {}
                WHERE time_slot = $1 AND spot_index = $2
                "#,
                category.table_name(),
            );
            sqlx::query_as::<_, DbSlot>(&sql)
                .bind(time_label.as_str())
                .bind(*position_index)
                .fetch_optional(pool)
                .await?
        }
        SlotKey::Flat { position_index } => {
            let sql = format!(
                r#"
                SELECT NULL::TEXT AS time_slot, spot_index, name, email
                FROM {}
                WHERE spot_index = $1
                "#,
                category.table_name(),
            );
            sqlx::query_as::<_, DbSlot>(&sql)
                .bind(*position_index)
                .fetch_optional(pool)
                .await?
        }
    };

    Ok(slot)
}

/// Claims a slot with a single conditional update: the claimant fields are
/// written only where the row is still unclaimed, and the affected-row
/// count decides the outcome. Under two concurrent claims for the same key
/// exactly one caller sees `true`; the other gets `false` and is rejected
/// upstream as already reserved.
pub async fn claim_slot(
    pool: &Pool<Postgres>,
    category: SlotCategory,
    key: &SlotKey,
    name: &str,
    email: &str,
) -> Result<bool> {
    let affected = match key {
        SlotKey::Timed { time_label, position_index } => {
            let sql = format!(
                r#"
                UPDATE {}
                SET name = $1, email = $2
                WHERE time_slot = $3 AND spot_index = $4
                  AND (name IS NULL OR name = '')
                "#,
                category.table_name(),
            );
            sqlx::query(&sql)
                .bind(name)
                .bind(email)
                .bind(time_label.as_str())
                .bind(*position_index)
                .execute(pool)
                .await?
                .rows_affected()
        }
        SlotKey::Flat { position_index } => {
            let sql = format!(
                r#"
                UPDATE {}
                SET name = $1, email = $2
                WHERE spot_index = $3
                  AND (name IS NULL OR name = '')
                "#,
                category.table_name(),
            );
            sqlx::query(&sql)
                .bind(name)
                .bind(email)
                .bind(*position_index)
                .execute(pool)
                .await?
                .rows_affected()
        }
    };

    Ok(affected == 1)
}

/// All rows of a category, in listing order: by stored time label then
/// position for timed tables, by position for flat ones.
pub async fn list_slots(pool: &Pool<Postgres>, category: SlotCategory) -> Result<Vec<DbSlot>> {
    let sql = match category.shape() {
        SlotShape::Timed => format!(
            r#"
            SELECT time_slot, spot_index, name, email
            FROM {}
            ORDER BY time_slot ASC, spot_index ASC
            "#,
            category.table_name(),
        ),
        SlotShape::Flat => format!(
            r#"
            SELECT NULL::TEXT AS time_slot, spot_index, name, email
            FROM {}
            ORDER BY spot_index ASC
            "#,
            category.table_name(),
        ),
    };

    let slots = sqlx::query_as::<_, DbSlot>(&sql).fetch_all(pool).await?;

    Ok(slots)
}
