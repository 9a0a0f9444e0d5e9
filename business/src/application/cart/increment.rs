use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::increment::{
    IncrementCartItemParams, IncrementCartItemUseCase,
};
use crate::domain::cart::value_objects::MutationOutcome;
use crate::domain::logger::Logger;

pub struct IncrementCartItemUseCaseImpl {
    pub state: Arc<CartState>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IncrementCartItemUseCase for IncrementCartItemUseCaseImpl {
    async fn execute(&self, params: IncrementCartItemParams) -> MutationOutcome {
        self.logger
            .info(&format!("Incrementing cart item: {}", params.id));

        let outcome = self
            .state
            .commit(self.repository.as_ref(), self.logger.as_ref(), |cart| {
                cart.increment(&params.id)
            })
            .await;

        if !outcome.changed() {
            self.logger
                .debug(&format!("Cart item {} not found, nothing to increment", params.id));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartItem};
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

    async fn state_with(entries: &[(&str, u32)]) -> Arc<CartState> {
        let state = Arc::new(CartState::new());
        {
            let mut cart = state.lock().await;
            *cart = Cart::from_items(
                entries
                    .iter()
                    .map(|(id, quantity)| {
                        CartItem::from_repository(
                            CartItemId::new(*id),
                            "Caneca".to_string(),
                            String::new(),
                            Decimal::from(10),
                            *quantity,
                        )
                    })
                    .collect(),
            );
            state.publish(&cart);
        }
        state
    }

    #[tokio::test]
    async fn should_increment_existing_item_only() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let state = state_with(&[("p1", 2), ("p2", 1)]).await;
        let use_case = IncrementCartItemUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(IncrementCartItemParams {
                id: CartItemId::new("p1"),
            })
            .await;

        assert_eq!(outcome, MutationOutcome::Applied);
        let cart = state.snapshot();
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[1].quantity, 1);
    }

    #[tokio::test]
    async fn should_not_write_when_id_is_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().never();

        let state = state_with(&[("p1", 1)]).await;
        let before = state.snapshot();
        let mut changes = state.subscribe();
        let use_case = IncrementCartItemUseCaseImpl {
            state: state.clone(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(IncrementCartItemParams {
                id: CartItemId::new("nope"),
            })
            .await;

        assert_eq!(outcome, MutationOutcome::Unchanged);
        assert_eq!(*state.snapshot(), *before);
        assert!(!changes.has_changed().unwrap());
    }
}
