use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemEntity;
use crate::storage::KeyValueStorage;

/// Key the cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "@GoMarketplace:products";

/// Stores the whole cart as a JSON array under a single storage key.
pub struct CartRepositoryStorage {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl CartRepositoryStorage {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryStorage {
    async fn load(&self) -> Result<Option<Cart>, RepositoryError> {
        let raw = self.storage.get(&self.key).await.map_err(|err| {
            tracing::warn!(key = %self.key, error = %err, "cart snapshot could not be read");
            RepositoryError::StorageUnavailable
        })?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let entities: Vec<CartItemEntity> = serde_json::from_str(&raw).map_err(|err| {
            tracing::warn!(key = %self.key, error = %err, "cart snapshot is malformed");
            RepositoryError::MalformedSnapshot
        })?;

        Ok(Some(Cart::from_items(
            entities.into_iter().map(|e| e.into_domain()).collect(),
        )))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let entities: Vec<CartItemEntity> =
            cart.items().iter().map(CartItemEntity::from_domain).collect();
        let raw = serde_json::to_string(&entities).map_err(|_| RepositoryError::Persistence)?;

        self.storage.set(&self.key, &raw).await.map_err(|err| {
            tracing::warn!(key = %self.key, error = %err, "cart snapshot could not be written");
            RepositoryError::Persistence
        })
    }
}
