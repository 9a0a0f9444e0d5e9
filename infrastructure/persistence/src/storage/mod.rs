use async_trait::async_trait;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.read")]
    Read(#[source] std::io::Error),
    #[error("storage.write")]
    Write(#[source] std::io::Error),
    #[error("storage.encoding")]
    Encoding(#[source] serde_json::Error),
}

/// Device-local string key-value storage.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
