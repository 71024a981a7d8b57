use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::{CartEvent, CartEventKind, CartNotifier};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notifier: CartNotifier,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Clearing cart {}", params.session_id));

        self.repository.delete(&params.session_id).await?;

        self.notifier.publish(CartEvent {
            session_id: params.session_id,
            kind: CartEventKind::Cleared,
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::SessionId;
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

    #[tokio::test]
    async fn should_delete_cart_and_publish_event() {
        let mut repository = MockCartRepo::new();
        repository
            .expect_delete()
            .withf(|session_id| session_id.as_str() == "tab-1")
            .times(1)
            .returning(|_| Ok(()));
        let notifier = CartNotifier::new();
        let mut events = notifier.subscribe();

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(repository),
            notifier,
            logger: mock_logger(),
        };

        use_case
            .execute(ClearCartParams {
                session_id: SessionId::new("tab-1"),
            })
            .await
            .unwrap();

        assert_eq!(events.recv().await.unwrap().kind, CartEventKind::Cleared);
    }

    #[tokio::test]
    async fn should_not_publish_when_delete_fails() {
        let mut repository = MockCartRepo::new();
        repository
            .expect_delete()
            .returning(|_| Err(RepositoryError::Persistence));
        let notifier = CartNotifier::new();
        let mut events = notifier.subscribe();

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(repository),
            notifier,
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ClearCartParams {
                session_id: SessionId::new("tab-1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
        assert!(events.try_recv().is_err());
    }
}
