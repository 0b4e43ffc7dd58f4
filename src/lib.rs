//! # DragBoard Core
//!
//! Board state and persistence core for the DragBoard sticky-note app.
//!
//! This crate provides the item collection, its mutation operations,
//! and write-through persistence without any dependency on a specific
//! UI implementation or storage backend.

pub mod bridge;
pub mod clipboard;
pub mod domain;
pub mod error;
pub mod storage;
pub mod store;
pub mod transfer;

// Re-export commonly used types
pub use domain::item::{FilePayload, Item, ItemId, ItemKind};
pub use error::{BoardError, Result};
pub use storage::Storage;
pub use store::{BoardEvent, BoardStore};
