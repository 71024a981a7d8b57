use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;

use super::entity::BlobEntity;
use super::store::KeyValueStore;

pub struct KeyValueStorePostgres {
    pool: PgPool,
}

impl KeyValueStorePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for KeyValueStorePostgres {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, BlobEntity>(
            "SELECT key, value, updated_at FROM kv_blobs WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read blob {}: {}", key, e);
            RepositoryError::Persistence
        })?;

        Ok(entity.map(|e| e.value))
    }

    async fn put(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO kv_blobs (key, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to write blob {}: {}", key, e);
            RepositoryError::Persistence
        })?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM kv_blobs WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(())
    }
}
