use super::KeyValueBackend;
use crate::error::StoreError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Backend de escritorio: un objeto JSON en disco, reescrito en cada `set`.
pub struct FileBackend {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileBackend {
    /// Abre (o prepara) el fichero. Si no existe o está corrupto se empieza vacío.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match Self::load(&path) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Preferencias en {} ilegibles, se empieza vacío: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");

        let mut backend = FileBackend::open(&path);
        backend.set_item("h5_theme", "light").expect("write");
        backend.set_item("h5_draft", "<p>hola</p>\n").expect("write");

        let reopened = FileBackend::open(&path);
        assert_eq!(reopened.get_item("h5_theme").expect("read").as_deref(), Some("light"));
        assert_eq!(
            reopened.get_item("h5_draft").expect("read").as_deref(),
            Some("<p>hola</p>\n")
        );
        assert_eq!(reopened.get_item("h5_completed").expect("read"), None);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[1, 2").expect("seed");

        let mut backend = FileBackend::open(&path);
        assert_eq!(backend.get_item("h5_theme").expect("read"), None);

        backend.set_item("h5_theme", "dark").expect("write");
        assert_eq!(
            FileBackend::open(&path).get_item("h5_theme").expect("read").as_deref(),
            Some("dark")
        );
    }
}
