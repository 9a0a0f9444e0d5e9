use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use crate::domain::cart::value_objects::MutationOutcome;
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> MutationOutcome {
        let id = params.item.id.clone();
        self.logger.info(&format!("Adding product to cart: {}", id));

        let outcome = self
            .state
            .commit(self.repository.as_ref(), self.logger.as_ref(), |cart| {
                cart.add(params.item);
                true
            })
            .await;

        self.logger
            .debug(&format!("Add to cart for {} finished: {}", id, outcome));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, NewCartItem};
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

    fn product(id: &str, price: i64) -> NewCartItem {
        NewCartItem {
            id: CartItemId::new(id),
            title: "Camiseta".to_string(),
            image_url: "https://cdn.example.com/tee.png".to_string(),
            price: Decimal::from(price),
        }
    }

    #[tokio::test]
    async fn should_append_new_item_and_persist_snapshot() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_save()
            .withf(|cart| cart.len() == 1 && cart.items()[0].quantity == 1)
            .times(1)
            .returning(|_| Ok(()));

        let state = Arc::new(CartState::new());
        let use_case = AddToCartUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(AddToCartParams {
                item: product("p1", 10),
            })
            .await;

        assert_eq!(outcome, MutationOutcome::Applied);
        let cart = state.snapshot();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].id.as_str(), "p1");
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[tokio::test]
    async fn should_not_duplicate_when_item_already_in_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().times(2).returning(|_| Ok(()));

        let state = Arc::new(CartState::new());
        let use_case = AddToCartUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        use_case
            .execute(AddToCartParams {
                item: product("p1", 10),
            })
            .await;
        let outcome = use_case
            .execute(AddToCartParams {
                item: product("p1", 10),
            })
            .await;

        assert_eq!(outcome, MutationOutcome::Applied);
        let cart = state.snapshot();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_keep_in_memory_change_when_write_fails() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::Persistence));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger.expect_error().times(1).returning(|_| ());

        let state = Arc::new(CartState::new());
        let use_case = AddToCartUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        let outcome = use_case
            .execute(AddToCartParams {
                item: product("p1", 10),
            })
            .await;

        assert_eq!(outcome, MutationOutcome::NotPersisted);
        assert_eq!(state.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn should_notify_subscribers_on_change() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let state = Arc::new(CartState::new());
        let mut changes = state.subscribe();
        let use_case = AddToCartUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(!changes.has_changed().unwrap());
        use_case
            .execute(AddToCartParams {
                item: product("p1", 10),
            })
            .await;

        assert!(changes.has_changed().unwrap());
        assert_eq!(changes.borrow_and_update().total_quantity(), 1);
    }
}
