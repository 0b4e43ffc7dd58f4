use crate::error::Result;
use async_trait::async_trait;

pub mod file_storage;
pub mod memory_storage;

/// Key-value storage trait for persisting the board collection.
///
/// The board store writes its whole collection as one serialized value
/// under a single fixed key; backends only need `get` and `set`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the serialized value stored under a key, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes the serialized value under a key, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
