use super::KeyValueBackend;
use crate::error::StoreError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Backend en memoria. Los clones comparten los datos, así un test puede
/// inspeccionar lo que escribió la aplicación.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    items: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryBackend {
    pub fn value(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Siembra un valor sin contarlo como escritura de la aplicación.
    pub fn insert(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert(key, value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
