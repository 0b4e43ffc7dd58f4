pub mod item;

pub use item::{FilePayload, Item, ItemId, ItemKind};
