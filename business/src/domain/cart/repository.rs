use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Persistence port for the full cart snapshot.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns `None` when no snapshot has been stored yet.
    async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
    /// Overwrites the stored snapshot with the whole cart.
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
