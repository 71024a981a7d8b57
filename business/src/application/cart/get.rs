use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{CartSummary, GetCartParams, GetCartUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<CartSummary, CartError> {
        let cart = self.repository.get(&params.session_id).await?;
        let catalog = self.catalog_repository.get_all(params.language).await?;

        let total = cart.total(&catalog);
        let item_count = cart.item_count();
        self.logger.debug(&format!(
            "Cart {} holds {} bottles, total {:.2}",
            params.session_id, item_count, total
        ));

        Ok(CartSummary {
            cart,
            total,
            item_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::catalog::model::CatalogItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{Language, SessionId};
    use chrono::Utc;
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

    #[tokio::test]
    async fn should_price_cart_against_catalog() {
        let mut repository = MockCartRepo::new();
        repository.expect_get().returning(|_| {
            let mut cart = Cart::default();
            cart.add("42", 2, Utc::now()).unwrap();
            cart.add("gone", 1, Utc::now()).unwrap();
            Ok(cart)
        });
        let mut catalog = MockCatalogRepo::new();
        catalog
            .expect_get_all()
            .withf(|language| *language == Language::Fr)
            .returning(|_| Ok(vec![CatalogItem::new("42", "Chablis", "19,90 €")]));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(repository),
            catalog_repository: Arc::new(catalog),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(GetCartParams {
                session_id: SessionId::new("tab-1"),
                language: Language::Fr,
            })
            .await
            .unwrap();

        assert!((summary.total - 39.80).abs() < 1e-9);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.cart.entries.len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_summary_for_new_session() {
        let mut repository = MockCartRepo::new();
        repository.expect_get().returning(|_| Ok(Cart::default()));
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_all().returning(|_| Ok(vec![]));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(repository),
            catalog_repository: Arc::new(catalog),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(GetCartParams {
                session_id: SessionId::new("new-tab"),
                language: Language::En,
            })
            .await
            .unwrap();

        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.item_count, 0);
    }
}
