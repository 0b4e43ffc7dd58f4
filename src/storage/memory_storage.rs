use crate::{
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Mutex};

/// In-memory storage backend.
///
/// Used by tests, and as the session-only fallback when the host offers
/// no durable storage capability.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| BoardError::StorageError("storage mutex poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| BoardError::StorageError("storage mutex poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
