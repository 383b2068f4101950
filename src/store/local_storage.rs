use super::KeyValueBackend;
use crate::error::StoreError;

/// `window.localStorage` del navegador.
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Web("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Web(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Web("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Web(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Web(format!("{e:?}")))
    }
}
