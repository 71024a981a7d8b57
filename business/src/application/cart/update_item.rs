use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::{CartEvent, CartEventKind, CartNotifier};
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_item::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notifier: CartNotifier,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting {} to x{} in cart {}",
            params.item_id, params.quantity, params.session_id
        ));

        let mut cart = self.repository.get(&params.session_id).await?;
        cart.update_quantity(&params.item_id, params.quantity)?;
        self.repository.save(&params.session_id, &cart).await?;

        self.notifier.publish(CartEvent {
            session_id: params.session_id,
            kind: CartEventKind::QuantityChanged {
                item_id: params.item_id,
                quantity: params.quantity,
            },
        });

        Ok(cart)
    }
}
