use async_trait::async_trait;

use crate::domain::cart::value_objects::HydrationOutcome;

#[async_trait]
pub trait HydrateCartUseCase: Send + Sync {
    async fn execute(&self) -> HydrationOutcome;
}
