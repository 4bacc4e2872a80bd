use crate::models::DbCarpoolOffer;
use chrono::Utc;
use eyre::Result;
use hirondelle_core::models::carpool::NewCarpoolOffer;
use sqlx::{Pool, Postgres};

pub async fn insert_offer(pool: &Pool<Postgres>, offer: &NewCarpoolOffer) -> Result<DbCarpoolOffer> {
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbCarpoolOffer>(
        r#"
        INSERT INTO carpool_offers
            (name, whatsapp, departure_city, departure_day, departure_time, seats_available, comments, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, whatsapp, departure_city, departure_day, departure_time,
                  seats_available, comments, created_at
        "#,
    )
    .bind(&offer.name)
    .bind(&offer.whatsapp)
    .bind(&offer.departure_city)
    .bind(&offer.departure_day)
    .bind(&offer.departure_time)
    .bind(offer.seats_available)
    .bind(&offer.comments)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_offers(pool: &Pool<Postgres>) -> Result<Vec<DbCarpoolOffer>> {
    let offers = sqlx::query_as::<_, DbCarpoolOffer>(
        r#"
        SELECT id, name, whatsapp, departure_city, departure_day, departure_time,
               seats_available, comments, created_at
        FROM carpool_offers
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(offers)
}

pub async fn get_offer_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbCarpoolOffer>> {
    let offer = sqlx::query_as::<_, DbCarpoolOffer>(
        r#"
        SELECT id, name, whatsapp, departure_city, departure_day, departure_time,
               seats_available, comments, created_at
        FROM carpool_offers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(offer)
}
