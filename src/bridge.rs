//! Companion settings/messaging bridge, shipped alongside the board as
//! an independent utility. The board store does not depend on it.
//!
//! Every operation degrades to a no-op or `None` when the hosting
//! environment lacks the corresponding capability, so callers never
//! need to branch on where they are running.

use async_trait::async_trait;
use std::{collections::HashMap, sync::Mutex};

#[async_trait]
pub trait ExtensionBridge: Send + Sync {
    /// Reads a setting; `None` when unset or the capability is missing
    async fn get_setting(&self, key: &str) -> Option<String>;

    /// Stores a setting; silently dropped when the capability is missing
    async fn set_setting(&self, key: &str, value: &str);

    /// Sends a message to the active surface and returns its response,
    /// or `None` when no surface can be reached
    async fn send_to_active_surface(&self, message: &str) -> Option<String>;
}

/// Bridge for hosts with a settings capability but no reachable surface
#[derive(Debug, Default)]
pub struct LocalBridge {
    settings: Mutex<HashMap<String, String>>,
}

impl LocalBridge {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExtensionBridge for LocalBridge {
    async fn get_setting(&self, key: &str) -> Option<String> {
        self.settings.lock().ok()?.get(key).cloned()
    }

    async fn set_setting(&self, key: &str, value: &str) {
        if let Ok(mut settings) = self.settings.lock() {
            settings.insert(key.to_string(), value.to_string());
        }
    }

    async fn send_to_active_surface(&self, _message: &str) -> Option<String> {
        None
    }
}

/// Bridge for hosts with no capabilities at all: every call is a no-op
#[derive(Debug, Default, Clone, Copy)]
pub struct DisconnectedBridge;

#[async_trait]
impl ExtensionBridge for DisconnectedBridge {
    async fn get_setting(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set_setting(&self, _key: &str, _value: &str) {}

    async fn send_to_active_surface(&self, _message: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_bridge_settings_round_trip() {
        let bridge = LocalBridge::new();

        assert_eq!(bridge.get_setting("theme").await, None);

        bridge.set_setting("theme", "dark").await;
        assert_eq!(bridge.get_setting("theme").await.as_deref(), Some("dark"));

        bridge.set_setting("theme", "light").await;
        assert_eq!(bridge.get_setting("theme").await.as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn test_local_bridge_has_no_active_surface() {
        let bridge = LocalBridge::new();
        assert_eq!(bridge.send_to_active_surface("ping").await, None);
    }

    #[tokio::test]
    async fn test_disconnected_bridge_degrades_everything() {
        let bridge = DisconnectedBridge;

        bridge.set_setting("theme", "dark").await;

        assert_eq!(bridge.get_setting("theme").await, None);
        assert_eq!(bridge.send_to_active_surface("ping").await, None);
    }
}
