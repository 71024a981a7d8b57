use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::{CartEvent, CartEventKind, CartNotifier};
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub notifier: CartNotifier,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {} x{} to cart {}",
            params.item_id, params.quantity, params.session_id
        ));

        let catalog = self.catalog_repository.get_all(params.language).await?;
        if !catalog.iter().any(|item| item.id == params.item_id) {
            return Err(CartError::UnknownItem);
        }

        let mut cart = self.repository.get(&params.session_id).await?;
        cart.add(&params.item_id, params.quantity, Utc::now())?;
        self.repository.save(&params.session_id, &cart).await?;

        self.notifier.publish(CartEvent {
            session_id: params.session_id,
            kind: CartEventKind::ItemAdded {
                item_id: params.item_id,
            },
        });

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::CatalogItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{Language, SessionId};
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
            async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
            async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self, language: Language) -> Result<Vec<CatalogItem>, RepositoryError>;
        }
    }

    fn catalog_repo() -> Arc<dyn CatalogRepository> {
        let mut repository = MockCatalogRepo::new();
        repository.expect_get_all().returning(|_| {
            Ok(vec![
                CatalogItem::new("42", "Chablis", "19,90 €"),
                CatalogItem::new("43", "Barolo", "39,00 €"),
            ])
        });
        Arc::new(repository)
    }

    fn params(item_id: &str, quantity: u8) -> AddCartItemParams {
        AddCartItemParams {
            session_id: SessionId::new("tab-1"),
            language: Language::En,
            item_id: item_id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_add_item_and_publish_event() {
        let mut repository = MockCartRepo::new();
        repository.expect_get().returning(|_| Ok(Cart::default()));
        repository
            .expect_save()
            .withf(|_, cart| cart.entries.len() == 1 && cart.entries[0].quantity == 2)
            .times(1)
            .returning(|_, _| Ok(()));
        let notifier = CartNotifier::new();
        let mut events = notifier.subscribe();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repository),
            catalog_repository: catalog_repo(),
            notifier,
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("42", 2)).await.unwrap();

        assert_eq!(cart.item_count(), 2);
        let event = events.recv().await.unwrap();
        assert_eq!(
            event.kind,
            CartEventKind::ItemAdded {
                item_id: "42".to_string()
            }
        );
    }

    #[tokio::test]
    async fn should_clamp_merged_quantity() {
        let mut repository = MockCartRepo::new();
        repository.expect_get().returning(|_| {
            let mut cart = Cart::default();
            cart.add("43", 9, Utc::now()).unwrap();
            Ok(cart)
        });
        repository.expect_save().returning(|_, _| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repository),
            catalog_repository: catalog_repo(),
            notifier: CartNotifier::new(),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("43", 5)).await.unwrap();

        assert_eq!(cart.entries[0].quantity, 10);
    }

    #[tokio::test]
    async fn should_reject_item_missing_from_catalog() {
        let mut repository = MockCartRepo::new();
        repository.expect_save().never();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repository),
            catalog_repository: catalog_repo(),
            notifier: CartNotifier::new(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("999", 1)).await;

        assert!(matches!(result.unwrap_err(), CartError::UnknownItem));
    }

    #[tokio::test]
    async fn should_reject_invalid_quantity_without_saving() {
        let mut repository = MockCartRepo::new();
        repository.expect_get().returning(|_| Ok(Cart::default()));
        repository.expect_save().never();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repository),
            catalog_repository: catalog_repo(),
            notifier: CartNotifier::new(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("42", 0)).await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
