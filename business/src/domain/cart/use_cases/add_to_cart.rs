use async_trait::async_trait;

use crate::domain::cart::model::NewCartItem;
use crate::domain::cart::value_objects::MutationOutcome;

pub struct AddToCartParams {
    pub item: NewCartItem,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> MutationOutcome;
}
