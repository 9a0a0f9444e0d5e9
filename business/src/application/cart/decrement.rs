use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::decrement::{
    DecrementCartItemParams, DecrementCartItemUseCase,
};
use crate::domain::cart::value_objects::MutationOutcome;
use crate::domain::logger::Logger;

pub struct DecrementCartItemUseCaseImpl {
    pub state: Arc<CartState>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DecrementCartItemUseCase for DecrementCartItemUseCaseImpl {
    async fn execute(&self, params: DecrementCartItemParams) -> MutationOutcome {
        self.logger
            .info(&format!("Decrementing cart item: {}", params.id));

        let outcome = self
            .state
            .commit(self.repository.as_ref(), self.logger.as_ref(), |cart| {
                cart.decrement(&params.id)
            })
            .await;

        if !outcome.changed() {
            self.logger
                .debug(&format!("Cart item {} not found, nothing to decrement", params.id));
        } else if self.state.snapshot().get(&params.id).is_none() {
            self.logger
                .info(&format!("Cart item removed: {}", params.id));
        }
        outcome
    }
}
