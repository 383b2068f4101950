use crate::model::{LessonId, ProgressRatio, Theme};
use crate::store::PreferenceStore;
use indexmap::IndexSet;

/// Estado en memoria de la sesión, sincronizado con `PreferenceStore`.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub active: LessonId,
    pub theme: Theme,
    completed: IndexSet<LessonId>,
    pub draft: String,
}

impl Session {
    /// Construye la sesión desde las preferencias, con valores por defecto si faltan.
    pub fn restore(store: &PreferenceStore) -> Self {
        let session = Self {
            active: LessonId::default(),
            theme: store.theme(),
            completed: store.completed(),
            draft: store.draft(),
        };
        log::info!(
            "Sesión restaurada: tema {}, {} lecciones completadas",
            session.theme.as_str(),
            session.completed.len()
        );
        session
    }

    pub fn active_module(&self) -> u8 {
        self.active.module()
    }

    pub fn active_lesson(&self) -> u8 {
        self.active.lesson()
    }

    pub fn completed(&self) -> &IndexSet<LessonId> {
        &self.completed
    }

    pub fn is_completed(&self, id: LessonId) -> bool {
        self.completed.contains(&id)
    }

    /// Devuelve `true` sólo si la lección no estaba ya registrada.
    /// El conjunto sólo crece.
    pub fn mark_completed(&mut self, id: LessonId) -> bool {
        self.completed.insert(id)
    }

    pub fn progress(&self) -> ProgressRatio {
        ProgressRatio::from_completed(self.completed.len())
    }
}
