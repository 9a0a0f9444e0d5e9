use async_trait::async_trait;

use crate::domain::cart::value_objects::{CartItemId, MutationOutcome};

pub struct IncrementCartItemParams {
    pub id: CartItemId,
}

#[async_trait]
pub trait IncrementCartItemUseCase: Send + Sync {
    async fn execute(&self, params: IncrementCartItemParams) -> MutationOutcome;
}
