use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{Language, SessionId};

pub struct AddCartItemParams {
    pub session_id: SessionId,
    pub language: Language,
    pub item_id: String,
    pub quantity: u8,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
}
