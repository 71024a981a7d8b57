use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Cart;

/// Persistence port for session carts.
///
/// `get` returns an empty cart when none is stored or the stored blob is
/// corrupt. Writes are last-write-wins.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
    async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
}
