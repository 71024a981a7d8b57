use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::{CartEvent, CartEventKind, CartNotifier};
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notifier: CartNotifier,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing {} from cart {}",
            params.item_id, params.session_id
        ));

        let mut cart = self.repository.get(&params.session_id).await?;
        cart.remove(&params.item_id)?;
        self.repository.save(&params.session_id, &cart).await?;

        self.notifier.publish(CartEvent {
            session_id: params.session_id,
            kind: CartEventKind::ItemRemoved {
                item_id: params.item_id,
            },
        });

        Ok(cart)
    }
}
