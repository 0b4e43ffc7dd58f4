//! File interface around the store's serialized form: exports land in a
//! `board_data.json` download, imports come from a user-supplied JSON
//! file.

use crate::{error::Result, store::BoardStore};
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name used for exported board data
pub const EXPORT_FILE_NAME: &str = "board_data.json";

/// Writes the exported collection to `dir/board_data.json` and returns
/// the path of the written file
pub async fn export_to_dir(store: &BoardStore, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let json = store.export_collection()?;
    let path = dir.as_ref().join(EXPORT_FILE_NAME);

    fs::write(&path, json).await?;
    Ok(path)
}

/// Reads a user-supplied JSON file and imports it as the full collection.
///
/// An unreadable file surfaces as an error for the caller to report.
/// Unparsable content leaves the collection unchanged and returns
/// `Ok(false)`.
pub async fn import_from_file(store: &mut BoardStore, path: impl AsRef<Path>) -> Result<bool> {
    let contents = fs::read_to_string(path.as_ref()).await?;
    Ok(store.import_collection(&contents).await)
}
