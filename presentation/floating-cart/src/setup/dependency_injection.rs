use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryStorage;
use persistence::storage::FileStorage;

use business::application::cart::provider::{CartProvider, CartScope};
use business::domain::formatter::PriceFormatter;
use business::domain::navigation::Navigator;

use crate::config::app_config::AppConfig;
use crate::navigation::RouteHistory;
use crate::view::floating_cart::FloatingCart;

pub struct DependencyContainer {
    pub cart_scope: CartScope,
    pub formatter: Arc<dyn PriceFormatter>,
    pub navigator: Arc<dyn Navigator>,
}

impl DependencyContainer {
    /// Must run inside a Tokio runtime: activating the cart spawns its writer.
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let storage = Arc::new(FileStorage::new(config.storage.path.clone()));
        let cart_repository = Arc::new(CartRepositoryStorage::with_key(
            storage,
            config.storage.key.clone(),
        ));
        let formatter = Arc::new(config.currency.formatter());
        let navigator = Arc::new(RouteHistory::new());

        let cart_scope = CartProvider::new(cart_repository, logger).activate();

        Self {
            cart_scope,
            formatter,
            navigator,
        }
    }

    pub fn floating_cart(&self) -> anyhow::Result<FloatingCart> {
        let floating_cart = FloatingCart::new(
            &self.cart_scope,
            self.formatter.clone(),
            self.navigator.clone(),
        )?;
        Ok(floating_cart)
    }
}
