use std::env;
use std::path::PathBuf;

use persistence::cart::repository::CART_STORAGE_KEY;

/// Device storage configuration for the cart snapshot
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub key: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_STORAGE_PATH: JSON file backing the key-value storage (default: "./cart-storage.json")
    /// - CART_STORAGE_KEY: Key of the cart snapshot (default: "@GoMarketplace:products")
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let path = var("CART_STORAGE_PATH").unwrap_or_else(|| "./cart-storage.json".to_string());
        let key = var("CART_STORAGE_KEY").unwrap_or_else(|| CART_STORAGE_KEY.to_string());

        Self {
            path: PathBuf::from(path),
            key,
        }
    }
}
