use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use jobfair_api::{ApiState, config::ApiConfig};
use jobfair_db::{
    create_pool, memory::InMemoryTimeSlotStore, postgres::PgTimeSlotStore,
    schema::initialize_database, store::TimeSlotStore,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (store, store_backend): (Arc<dyn TimeSlotStore>, &'static str) = match &config.database_url {
        Some(database_url) => {
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;
            info!("Using PostgreSQL slot store");
            let store: Arc<dyn TimeSlotStore> = Arc::new(PgTimeSlotStore::new(db_pool));
            (store, "postgres")
        }
        None => {
            warn!("DATABASE_URL not set, slots will only be kept in memory");
            let store: Arc<dyn TimeSlotStore> = Arc::new(InMemoryTimeSlotStore::new());
            (store, "memory")
        }
    };

    let state = ApiState {
        store,
        store_backend,
        grid: config.grid,
    };

    // Start API server
    jobfair_api::start_server(config, state).await?;

    Ok(())
}
