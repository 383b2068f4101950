//! Preferencias persistentes (tema, lecciones completadas, borrador).
//!
//! Cada `set` escribe inmediatamente en el backend. Las lecturas nunca fallan:
//! una clave ausente o corrupta devuelve el valor por defecto documentado.

use crate::error::StoreError;
use crate::model::{LessonId, Theme};
use indexmap::IndexSet;

mod file;
mod memory;
#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use file::FileBackend;
pub use memory::MemoryBackend;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageBackend;

pub const DEFAULT_KEY_PREFIX: &str = "h5_";

/// Borrador inicial cuando no hay nada guardado
pub const PLACEHOLDER_DRAFT: &str = "\n<h1 style=\"color: coral\">¡Hola Mundo!</h1>";

/// Área clave/valor duradera (localStorage, fichero, memoria).
pub trait KeyValueBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefKey {
    Theme,
    Completed,
    Draft,
}

impl PrefKey {
    pub fn name(self) -> &'static str {
        match self {
            PrefKey::Theme => "theme",
            PrefKey::Completed => "completed",
            PrefKey::Draft => "draft",
        }
    }
}

pub struct PreferenceStore {
    backend: Box<dyn KeyValueBackend>,
    prefix: String,
}

impl PreferenceStore {
    pub fn new(backend: Box<dyn KeyValueBackend>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::default()), DEFAULT_KEY_PREFIX)
    }

    pub fn full_key(&self, key: PrefKey) -> String {
        format!("{}{}", self.prefix, key.name())
    }

    /// Valor crudo; un error del backend cuenta como ausencia.
    pub fn get(&self, key: PrefKey) -> Option<String> {
        let full = self.full_key(key);
        match self.backend.get_item(&full) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("No se pudo leer {full}: {e}");
                None
            }
        }
    }

    pub fn set(&mut self, key: PrefKey, value: &str) {
        let full = self.full_key(key);
        match self.backend.set_item(&full, value) {
            Ok(()) => log::debug!("Guardado {full} ({} bytes)", value.len()),
            Err(e) => log::warn!("No se pudo guardar {full}: {e}"),
        }
    }

    pub fn theme(&self) -> Theme {
        self.get(PrefKey::Theme)
            .map(|raw| Theme::parse_or_default(&raw))
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.set(PrefKey::Theme, theme.as_str());
    }

    /// Lecciones completadas en orden de visita. Los ids inválidos se descartan.
    pub fn completed(&self) -> IndexSet<LessonId> {
        let Some(raw) = self.get(PrefKey::Completed) else {
            return IndexSet::new();
        };
        let tokens: Vec<String> = match serde_json::from_str(&raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                log::warn!("Lista de completadas corrupta, se ignora: {e}");
                return IndexSet::new();
            }
        };
        tokens
            .iter()
            .filter_map(|token| match token.parse::<LessonId>() {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("Se descarta la lección persistida {token:?}: {e}");
                    None
                }
            })
            .collect()
    }

    pub fn set_completed(&mut self, completed: &IndexSet<LessonId>) {
        match serde_json::to_string(completed) {
            Ok(json) => self.set(PrefKey::Completed, &json),
            Err(e) => log::warn!("No se pudo serializar el progreso: {e}"),
        }
    }

    /// Un borrador vacío se trata como ausente.
    pub fn draft(&self) -> String {
        self.get(PrefKey::Draft)
            .filter(|draft| !draft.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_DRAFT.to_string())
    }

    pub fn set_draft(&mut self, draft: &str) {
        self.set(PrefKey::Draft, draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(backend: &MemoryBackend) -> PreferenceStore {
        PreferenceStore::new(Box::new(backend.clone()), DEFAULT_KEY_PREFIX)
    }

    #[test]
    fn fresh_store_yields_documented_defaults() {
        let store = PreferenceStore::in_memory();
        assert_eq!(store.theme(), Theme::Dark);
        assert!(store.completed().is_empty());
        assert_eq!(store.draft(), PLACEHOLDER_DRAFT);
    }

    #[test]
    fn writes_go_through_under_prefixed_keys() {
        let backend = MemoryBackend::default();
        let mut store = store_with(&backend);

        store.set_theme(Theme::Light);
        store.set_draft("<p>x</p>");
        let mut completed = IndexSet::new();
        completed.insert(LessonId::new(3, 4).expect("valid"));
        completed.insert(LessonId::new(1, 2).expect("valid"));
        store.set_completed(&completed);

        assert_eq!(backend.value("h5_theme").as_deref(), Some("light"));
        assert_eq!(backend.value("h5_draft").as_deref(), Some("<p>x</p>"));
        assert_eq!(backend.value("h5_completed").as_deref(), Some(r#"["3-4","1-2"]"#));
        assert_eq!(backend.writes(), 3);
        assert_eq!(store.completed(), completed);
    }

    #[test]
    fn malformed_values_degrade_to_defaults() {
        let backend = MemoryBackend::default();
        backend.insert("h5_theme", "sepia");
        backend.insert("h5_completed", "{not json");
        backend.insert("h5_draft", "");
        let store = store_with(&backend);

        assert_eq!(store.theme(), Theme::Dark);
        assert!(store.completed().is_empty());
        assert_eq!(store.draft(), PLACEHOLDER_DRAFT);
    }

    #[test]
    fn invalid_ids_inside_the_array_are_dropped() {
        let backend = MemoryBackend::default();
        backend.insert("h5_completed", r#"["2-3","99-1","nope","2-3","5-10"]"#);
        let store = store_with(&backend);

        let ids: Vec<String> = store.completed().iter().map(ToString::to_string).collect();
        assert_eq!(ids, vec!["2-3", "5-10"]);
    }

    #[test]
    fn custom_prefix_isolates_keys() {
        let backend = MemoryBackend::default();
        backend.insert("h5_theme", "light");
        let store = PreferenceStore::new(Box::new(backend.clone()), "other_");
        assert_eq!(store.full_key(PrefKey::Theme), "other_theme");
        assert_eq!(store.theme(), Theme::Dark);
    }
}
