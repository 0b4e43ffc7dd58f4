//! Clipboard collaborator: consumes a plain string and reports success
//! or failure back to the caller for user notification only. Failures
//! are never retried.

use crate::{
    domain::item::ItemId,
    error::{BoardError, Result},
    store::BoardStore,
};

/// Plain-text clipboard sink
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|err| BoardError::ClipboardError(err.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|err| BoardError::ClipboardError(err.to_string()))
    }
}

/// Copies an item's content to the clipboard.
///
/// An unknown id surfaces as [`BoardError::ItemNotFound`], a failed
/// write as the clipboard's own error; both are for a transient
/// notification and the board itself is untouched either way.
pub fn copy_item(store: &BoardStore, clipboard: &mut dyn Clipboard, id: &ItemId) -> Result<()> {
    let item = store
        .get(id)
        .ok_or_else(|| BoardError::ItemNotFound(id.to_string()))?;

    clipboard.write_text(&item.content)
}
