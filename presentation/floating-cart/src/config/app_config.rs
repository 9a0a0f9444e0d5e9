use super::{currency_config::CurrencyConfig, storage_config::StorageConfig};

pub struct AppConfig {
    pub storage: StorageConfig,
    pub currency: CurrencyConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            currency: CurrencyConfig::from_env(),
        }
    }
}
