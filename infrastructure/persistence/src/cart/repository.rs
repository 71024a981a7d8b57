use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

use crate::kv::store::KeyValueStore;

/// Carts serialized as JSON under `cart:{session_id}`.
pub struct CartRepositoryKv {
    store: Arc<dyn KeyValueStore>,
}

impl CartRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(session_id: &SessionId) -> String {
        format!("cart:{}", session_id)
    }
}

#[async_trait]
impl CartRepository for CartRepositoryKv {
    async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError> {
        let key = Self::key(session_id);
        let Some(blob) = self.store.get(&key).await? else {
            return Ok(Cart::default());
        };

        match serde_json::from_str::<Cart>(&blob) {
            Ok(cart) => Ok(cart),
            Err(e) => {
                tracing::warn!("{} for {}, starting empty: {}", RepositoryError::Corrupt, key, e);
                Ok(Cart::default())
            }
        }
    }

    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError> {
        let blob = serde_json::to_string(cart).map_err(|_| RepositoryError::Persistence)?;
        self.store.put(&Self::key(session_id), blob).await
    }

    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        self.store.delete(&Self::key(session_id)).await
    }
}
