//! Durable storage for the visitor's language choice.

use crate::config;

/// Best-effort persistence: failures read as "nothing stored" and writes
/// that fail are dropped. Interpreting the stored string is the caller's
/// concern.
pub trait PreferenceStore: 'static {
    fn load(&self) -> Option<String>;
    fn store(&self, value: &str);
}

/// `localStorage`-backed store used in the browser.
#[derive(Clone)]
pub struct LocalStoragePrefs;

impl LocalStoragePrefs {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
    }
}

impl PreferenceStore for LocalStoragePrefs {
    fn load(&self) -> Option<String> {
        Self::storage()
            .and_then(|storage| storage.get_item(config::LANG_STORAGE_KEY).ok())
            .flatten()
    }

    fn store(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(config::LANG_STORAGE_KEY, value);
        }
    }
}
