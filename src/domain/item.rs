use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
};
use uuid::Uuid;

use crate::error::Result;

/// Unique identifier for a board item.
///
/// Ids are opaque strings: freshly created items get a UUID, while ids
/// arriving through import are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Generates a fresh unique identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminant determining how an item is rendered and dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Text,
    Image,
    Document,
}

impl ItemKind {
    /// Derives the kind from a file's MIME type
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else {
            Self::Document
        }
    }
}

impl Default for ItemKind {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
            Self::Document => write!(f, "document"),
        }
    }
}

/// A binary payload attached to a file-backed item.
///
/// Payloads live only for the session that attached them and are never
/// serialized; after a reload the owning item comes back detached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    /// Where the payload was read from, when it came from disk
    pub source: Option<PathBuf>,
}

impl FilePayload {
    pub fn new(
        name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
            source: None,
        }
    }

    /// Reads a picked file into a payload, deriving the MIME type from
    /// its extension. A missing or unreadable file surfaces as an IO
    /// error for the caller to report.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Ok(Self {
            name,
            mime,
            bytes,
            source: Some(path.to_path_buf()),
        })
    }
}

/// A single card on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
    #[serde(default)]
    pub kind: ItemKind,
    /// Binary payload, present only for image/document items created or
    /// re-attached in this session
    #[serde(skip)]
    pub file: Option<FilePayload>,
    /// Locally-resolvable reference to the payload source, valid only
    /// for the session that attached it
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a text item
    pub fn text(content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::generate(),
            content: content.into(),
            kind: ItemKind::Text,
            file: None,
            file_path: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a file-backed item: the content is the file name and the
    /// kind follows the payload's MIME type
    pub fn from_file(payload: FilePayload) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::generate(),
            content: payload.name.clone(),
            kind: ItemKind::from_mime(&payload.mime),
            file_path: payload.source.clone(),
            file: Some(payload),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the display content, leaving kind and file untouched
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }

    /// Re-attaches a payload: content, kind and path all follow the file
    pub fn attach_file(&mut self, payload: FilePayload) {
        self.content = payload.name.clone();
        self.kind = ItemKind::from_mime(&payload.mime);
        self.file_path = payload.source.clone();
        self.file = Some(payload);
        self.updated_at = Utc::now();
    }

    /// A file-backed item whose payload did not survive a reload
    pub fn is_detached(&self) -> bool {
        self.kind != ItemKind::Text && self.file.is_none()
    }

    /// The `text/plain` payload handed to a drag operation
    pub fn drag_text(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_mime() {
        assert_eq!(ItemKind::from_mime("image/png"), ItemKind::Image);
        assert_eq!(ItemKind::from_mime("image/svg+xml"), ItemKind::Image);
        assert_eq!(ItemKind::from_mime("application/pdf"), ItemKind::Document);
        assert_eq!(ItemKind::from_mime("text/plain"), ItemKind::Document);
    }

    #[test]
    fn test_text_item() {
        let item = Item::text("Buy milk");

        assert_eq!(item.content, "Buy milk");
        assert_eq!(item.kind, ItemKind::Text);
        assert!(item.file.is_none());
        assert!(item.file_path.is_none());
        assert!(!item.is_detached());
    }

    #[test]
    fn test_file_item_takes_name_and_kind_from_payload() {
        let payload = FilePayload::new("cat.png", "image/png", vec![1, 2, 3]);
        let item = Item::from_file(payload);

        assert_eq!(item.content, "cat.png");
        assert_eq!(item.kind, ItemKind::Image);
        assert!(item.file.is_some());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Item::text("a");
        let b = Item::text("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_set_content_leaves_kind_and_file_untouched() {
        let payload = FilePayload::new("report.pdf", "application/pdf", vec![0]);
        let mut item = Item::from_file(payload);

        item.set_content("renamed".to_string());

        assert_eq!(item.content, "renamed");
        assert_eq!(item.kind, ItemKind::Document);
        assert!(item.file.is_some());
    }

    #[test]
    fn test_set_content_updates_updated_at() {
        let mut item = Item::text("a");
        let initial = item.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        item.set_content("b");

        assert!(item.updated_at > initial);
    }

    #[test]
    fn test_attach_file_replaces_content_kind_and_path() {
        let mut item = Item::text("note");
        let payload = FilePayload::new("dog.jpg", "image/jpeg", vec![9]);

        item.attach_file(payload);

        assert_eq!(item.content, "dog.jpg");
        assert_eq!(item.kind, ItemKind::Image);
        assert!(item.file.is_some());
    }

    #[test]
    fn test_payload_is_not_serialized() {
        let payload = FilePayload::new("cat.png", "image/png", vec![1, 2, 3]);
        let item = Item::from_file(payload);

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("bytes"));
        assert!(!json.contains("file_path"));

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, ItemKind::Image);
        assert!(back.file.is_none());
        assert!(back.is_detached());
    }

    #[test]
    fn test_deserializes_minimal_foreign_json() {
        let json = r#"{"id": "1712345678901", "content": "from elsewhere"}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.id.as_str(), "1712345678901");
        assert_eq!(item.content, "from elsewhere");
        assert_eq!(item.kind, ItemKind::Text);
    }

    #[tokio::test]
    async fn test_payload_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("photo.png");
        tokio::fs::write(&path, b"not really a png").await.unwrap();

        let payload = FilePayload::from_path(&path).await.unwrap();

        assert_eq!(payload.name, "photo.png");
        assert_eq!(payload.mime, "image/png");
        assert_eq!(payload.bytes, b"not really a png");
        assert_eq!(payload.source.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn test_payload_from_path_covers_uncommon_extensions() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scan.tiff");
        tokio::fs::write(&path, b"tiff bytes").await.unwrap();

        let payload = FilePayload::from_path(&path).await.unwrap();

        assert_eq!(payload.mime, "image/tiff");
        assert_eq!(ItemKind::from_mime(&payload.mime), ItemKind::Image);
    }

    #[tokio::test]
    async fn test_payload_from_missing_path_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = FilePayload::from_path(dir.path().join("gone.pdf")).await;
        assert!(result.is_err());
    }
}
