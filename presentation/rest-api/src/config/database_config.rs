use std::sync::Arc;

use persistence::db::{DatabaseConfig, MIGRATIONS_DIR, create_postgres_pool, run_migrations};
use persistence::kv::memory::InMemoryKeyValueStore;
use persistence::kv::postgres::KeyValueStorePostgres;
use persistence::kv::store::KeyValueStore;

use super::env_opt;

/// Initialize the blob store backing carts and query history
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional)
///
/// Without a database the store lives in memory and is lost on restart.
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_store() -> anyhow::Result<Arc<dyn KeyValueStore>> {
    match env_opt("DATABASE_URL") {
        Some(db_url) => {
            let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
            run_migrations(&pool, MIGRATIONS_DIR).await?;
            tracing::info!("Blob store: postgres");
            Ok(Arc::new(KeyValueStorePostgres::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, carts and query history are kept in memory");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
    }
}
