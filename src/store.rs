//! The board store: owner of the item collection, its mutation
//! operations, and the write-through mirror to durable storage.
//!
//! Every mutating operation either succeeds or no-ops; business-rule
//! violations (empty input, unknown id, unparsable import) never
//! surface as errors. After each successful mutation the full
//! collection is re-serialized and written under a single fixed storage
//! key, and registered observers are notified so a UI layer can re-read
//! and redraw.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    domain::item::{FilePayload, Item, ItemId},
    error::Result,
    storage::Storage,
};

/// Storage key under which the whole collection is mirrored
pub const STORAGE_KEY: &str = "board_items";

/// Notification delivered to observers after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    ItemAdded(ItemId),
    ItemEdited(ItemId),
    ItemFileReplaced(ItemId),
    ItemDeleted(ItemId),
    Cleared,
    /// The whole collection was swapped out (hydrate or import)
    CollectionReplaced,
}

type Listener = Box<dyn Fn(&BoardEvent) + Send + Sync>;

/// Owner of the ordered item collection.
///
/// Collection order is insertion order; nothing reorders items.
pub struct BoardStore {
    items: Vec<Item>,
    storage: Arc<dyn Storage>,
    listeners: Vec<Listener>,
}

impl BoardStore {
    /// Creates an empty store backed by the given storage
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            listeners: Vec::new(),
        }
    }

    /// Loads the collection persisted under [`STORAGE_KEY`].
    ///
    /// An absent, unreadable, or malformed value starts the board empty;
    /// the failure is logged, never surfaced.
    pub async fn hydrate(&mut self) {
        let stored = match self.storage.get(STORAGE_KEY).await {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read stored board items: {err}");
                None
            }
        };

        self.items = match stored {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!("discarding malformed stored board items: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        debug!("hydrated {} board items", self.items.len());
        self.notify(&BoardEvent::CollectionReplaced);
    }

    /// Registers an observer invoked after every successful mutation
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&BoardEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a new item built from a text snippet or a file payload.
    ///
    /// A file payload wins over text and yields a file-backed item named
    /// after the file; text alone must be non-empty once trimmed. With
    /// neither, nothing is added and `None` is returned.
    pub async fn add(&mut self, text: Option<&str>, file: Option<FilePayload>) -> Option<ItemId> {
        let item = match (text, file) {
            (_, Some(payload)) => Item::from_file(payload),
            (Some(content), None) if !content.trim().is_empty() => Item::text(content),
            _ => return None,
        };

        let id = item.id.clone();
        self.items.push(item);
        self.persist().await;
        self.notify(&BoardEvent::ItemAdded(id.clone()));
        Some(id)
    }

    /// Removes the item with the given id; `false` if not found
    pub async fn delete(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);

        if self.items.len() == before {
            return false;
        }

        self.persist().await;
        self.notify(&BoardEvent::ItemDeleted(id.clone()));
        true
    }

    /// Replaces the content of the matching item, leaving its kind and
    /// file untouched; `false` if not found
    pub async fn edit(&mut self, id: &ItemId, new_content: &str) -> bool {
        let item = match self.items.iter_mut().find(|item| item.id == *id) {
            Some(item) => item,
            None => return false,
        };

        item.set_content(new_content);
        self.persist().await;
        self.notify(&BoardEvent::ItemEdited(id.clone()));
        true
    }

    /// Re-attaches a payload to the matching item, replacing its file,
    /// path, kind and content; no-op when the payload is absent or the
    /// id is unknown
    pub async fn replace_file(&mut self, id: &ItemId, file: Option<FilePayload>) -> bool {
        let payload = match file {
            Some(payload) => payload,
            None => return false,
        };
        let item = match self.items.iter_mut().find(|item| item.id == *id) {
            Some(item) => item,
            None => return false,
        };

        item.attach_file(payload);
        self.persist().await;
        self.notify(&BoardEvent::ItemFileReplaced(id.clone()));
        true
    }

    /// Empties the collection unconditionally
    pub async fn clear(&mut self) {
        self.items.clear();
        self.persist().await;
        self.notify(&BoardEvent::Cleared);
    }

    /// Parses a serialized collection and replaces the current one.
    ///
    /// On parse failure the current collection is left unchanged, the
    /// error is logged, and `false` is returned.
    pub async fn import_collection(&mut self, serialized: &str) -> bool {
        match serde_json::from_str::<Vec<Item>>(serialized) {
            Ok(items) => {
                self.items = items;
                self.persist().await;
                self.notify(&BoardEvent::CollectionReplaced);
                true
            }
            Err(err) => {
                warn!("rejecting unparsable board import: {err}");
                false
            }
        }
    }

    /// Pretty-printed JSON of the collection, binary payloads omitted
    pub fn export_collection(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }

    /// The items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Write-through mirror: failures are logged and swallowed so
    // callers keep the fire-and-forget contract.
    async fn persist(&self) {
        let serialized = match serde_json::to_string_pretty(&self.items) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialize board items: {err}");
                return;
            }
        };

        if let Err(err) = self.storage.set(STORAGE_KEY, &serialized).await {
            warn!("failed to persist board items: {err}");
        }
    }

    fn notify(&self, event: &BoardEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}
