use async_trait::async_trait;

use crate::domain::cart::value_objects::{CartItemId, MutationOutcome};

pub struct DecrementCartItemParams {
    pub id: CartItemId,
}

#[async_trait]
pub trait DecrementCartItemUseCase: Send + Sync {
    async fn execute(&self, params: DecrementCartItemParams) -> MutationOutcome;
}
