use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{Language, SessionId};

pub struct GetCartParams {
    pub session_id: SessionId,
    pub language: Language,
}

/// Cart contents priced against the current catalog.
#[derive(Debug, Clone)]
pub struct CartSummary {
    pub cart: Cart,
    pub total: f64,
    pub item_count: u32,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<CartSummary, CartError>;
}
