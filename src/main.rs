use color_eyre::eyre::Result;
use dotenv::dotenv;
use hirondelle_api::config::ApiConfig;
use hirondelle_db::{create_pool, schema};
use hirondelle_notify::{config::NotifyConfig, Notifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    let notify_config = NotifyConfig::from_env();

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema and seed the slot catalog
    schema::initialize_database(&db_pool).await?;
    schema::seed_slots(&db_pool).await?;

    // Notification channels are built once here and injected; handlers
    // never read the environment themselves.
    let notifier = Notifier::new(notify_config);

    // Start API server
    hirondelle_api::start_server(config, db_pool, notifier).await?;

    Ok(())
}
