use crate::models::DbRsvp;
use chrono::Utc;
use eyre::Result;
use hirondelle_core::models::rsvp::NewRsvp;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn insert_rsvp(pool: &Pool<Postgres>, rsvp: &NewRsvp) -> Result<DbRsvp> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbRsvp>(
        r#"
        INSERT INTO rsvp (id, first_name, last_name, email, attendance, children, comments, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, first_name, last_name, email, attendance, children, comments, created_at
        "#,
    )
    .bind(id)
    .bind(&rsvp.first_name)
    .bind(&rsvp.last_name)
    .bind(&rsvp.email)
    .bind(&rsvp.attendance)
    .bind(rsvp.children)
    .bind(&rsvp.comments)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
