use crate::{error::Result, storage::Storage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation.
///
/// Each key maps to one JSON file under a data directory created on
/// first write.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const DATA_DIR: &'static str = ".dragboard";

    /// Creates a new FileStorage instance rooted in the given directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: base_dir.as_ref().join(Self::DATA_DIR),
        }
    }

    fn value_file(&self, key: &str) -> PathBuf {
        self.root_path.join(format!("{}.json", key))
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_file(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_directory_exists().await?;
        fs::write(self.value_file(key), value).await?;
        Ok(())
    }
}
