use eyre::Result;
use hirondelle_core::catalog::{
    volunteer_seed_count, BRUNCH_POSITIONS_PER_TIME, BRUNCH_TIME_SLOTS, DJ_TIME_SLOTS,
};
use hirondelle_core::models::slot::SlotCategory;
use sqlx::{Pool, Postgres};
use tracing::info;

const FLAT_SLOT_CATEGORIES: [SlotCategory; 4] = [
    SlotCategory::Voiturier,
    SlotCategory::Accueil,
    SlotCategory::Cafe,
    SlotCategory::Rangement,
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Timed slot tables, keyed by (time range, position)
    for table in ["dj_spots", "brunch_cooking_slots"] {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                time_slot TEXT NOT NULL,
                spot_index INT NOT NULL,
                name TEXT NULL,
                email TEXT NULL,
                PRIMARY KEY (time_slot, spot_index)
            );
            "#,
        ))
        .execute(pool)
        .await?;
    }

    // Flat volunteer slot tables, keyed by position alone
    for category in FLAT_SLOT_CATEGORIES {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                spot_index INT PRIMARY KEY,
                name TEXT NULL,
                email TEXT NULL
            );
            "#,
            category.table_name(),
        ))
        .execute(pool)
        .await?;
    }

    // Guest submissions, append-only
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rsvp (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            attendance VARCHAR(16) NOT NULL,
            children INT NOT NULL DEFAULT 0,
            comments TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS carpool_offers (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            whatsapp VARCHAR(32) NOT NULL,
            departure_city VARCHAR(255) NOT NULL,
            departure_day VARCHAR(255) NOT NULL,
            departure_time VARCHAR(255) NOT NULL,
            seats_available INT NOT NULL,
            comments TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_rsvp_created_at ON rsvp(created_at);")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_carpool_offers_created_at ON carpool_offers(created_at);",
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}

/// Seeds every reservable slot row from the catalog. Idempotent: rows
/// already present (claimed or not) are left untouched, so this is safe
/// to run on every startup. Listings only ever show seeded rows.
pub async fn seed_slots(pool: &Pool<Postgres>) -> Result<()> {
    info!("Seeding slot rows from catalog...");

    for time_slot in DJ_TIME_SLOTS {
        sqlx::query(
            r#"
            INSERT INTO dj_spots (time_slot, spot_index)
            VALUES ($1, 0)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(time_slot)
        .execute(pool)
        .await?;
    }

    for time_slot in BRUNCH_TIME_SLOTS {
        for spot_index in 0..BRUNCH_POSITIONS_PER_TIME {
            sqlx::query(
                r#"
                INSERT INTO brunch_cooking_slots (time_slot, spot_index)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(time_slot)
            .bind(spot_index)
            .execute(pool)
            .await?;
        }
    }

    for category in FLAT_SLOT_CATEGORIES {
        let count = volunteer_seed_count(category).unwrap_or(0);
        for spot_index in 0..count {
            sqlx::query(&format!(
                r#"
                INSERT INTO {} (spot_index)
                VALUES ($1)
                ON CONFLICT DO NOTHING
                "#,
                category.table_name(),
            ))
            .bind(spot_index)
            .execute(pool)
            .await?;
        }
    }

    info!("Slot rows seeded.");
    Ok(())
}
