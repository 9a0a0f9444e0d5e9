use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::hydrate::HydrateCartUseCase;
use crate::domain::cart::value_objects::HydrationOutcome;
use crate::domain::logger::Logger;

pub struct HydrateCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl HydrateCartUseCase for HydrateCartUseCaseImpl {
    async fn execute(&self) -> HydrationOutcome {
        self.logger.info("Loading cart from storage");

        // Held across the read so that no mutation interleaves with hydration.
        let mut cart = self.state.lock().await;

        let (loaded, outcome) = match self.repository.load().await {
            Ok(Some(stored)) => {
                let count = stored.len();
                (stored, HydrationOutcome::Restored(count))
            }
            Ok(None) => (Cart::new(), HydrationOutcome::Empty),
            Err(err) => {
                self.logger
                    .warn(&format!("Ignoring stored cart snapshot: {}", err));
                (Cart::new(), HydrationOutcome::Discarded)
            }
        };

        *cart = loaded;
        self.state.publish(&cart);

        self.logger
            .info(&format!("Cart hydrated with {} items", cart.len()));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::cart::value_objects::CartItemId;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
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

    fn stored_cart() -> Cart {
        Cart::from_items(vec![
            CartItem::from_repository(
                CartItemId::new("p1"),
                "Camiseta".to_string(),
                "https://cdn.example.com/tee.png".to_string(),
                Decimal::from(10),
                2,
            ),
            CartItem::from_repository(
                CartItemId::new("p2"),
                "Caneca".to_string(),
                "https://cdn.example.com/mug.png".to_string(),
                Decimal::from(5),
                3,
            ),
        ])
    }

    #[tokio::test]
    async fn should_restore_stored_snapshot() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .times(1)
            .returning(|| Ok(Some(stored_cart())));
        mock_repo.expect_save().never();

        let state = Arc::new(CartState::new());
        let use_case = HydrateCartUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let outcome = use_case.execute().await;

        assert_eq!(outcome, HydrationOutcome::Restored(2));
        assert_eq!(*state.snapshot(), stored_cart());
    }

    #[tokio::test]
    async fn should_start_empty_when_nothing_is_stored() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(None));

        let state = Arc::new(CartState::new());
        let use_case = HydrateCartUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await, HydrationOutcome::Empty);
        assert!(state.snapshot().is_empty());
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_cart_when_snapshot_is_malformed() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Err(RepositoryError::MalformedSnapshot));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let state = Arc::new(CartState::new());
        let use_case = HydrateCartUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        assert_eq!(use_case.execute().await, HydrationOutcome::Discarded);
        assert!(state.snapshot().is_empty());
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_cart_when_storage_is_unavailable() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Err(RepositoryError::StorageUnavailable));

        let state = Arc::new(CartState::new());
        let use_case = HydrateCartUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await, HydrationOutcome::Discarded);
        assert!(state.snapshot().is_empty());
    }
}
