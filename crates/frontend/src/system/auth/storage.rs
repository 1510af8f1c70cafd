use contracts::shared::storage::KeyValueStore;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage` of the current window
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = get_local_storage() else {
            log::warn!("localStorage unavailable, '{}' not saved", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::error!("Failed to save '{}' to localStorage: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
