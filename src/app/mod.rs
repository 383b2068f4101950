use crate::config::AcademyConfig;
use crate::data::{Catalog, read_catalog_embedded};
use crate::model::{LessonId, Theme};
use crate::pages::PageShelf;
use crate::preview::{PreviewRenderer, PreviewSurface};
use crate::session::Session;
use crate::store::PreferenceStore;

// Submódulos
pub mod actions;
pub mod events;
pub mod navigation;
pub mod progress;
pub mod splash;
pub mod view_models;

pub use events::{Binding, Target, TriggerKind, UiEvent};
pub use navigation::NavigationOutcome;
pub use splash::{Splash, SplashFrame};

/// Etiquetas de módulo/lección de la cabecera
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels {
    pub module: String,
    pub lesson: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub text: String,
    pub expires_at: Option<f64>,
}

/// Controlador único de la aplicación. Posee la sesión; la tienda de
/// preferencias y la superficie de vista previa se inyectan.
pub struct Academy {
    pub session: Session,
    pub store: PreferenceStore,
    pub catalog: Catalog,
    pub shelf: PageShelf,
    pub preview: PreviewRenderer,
    surface: Box<dyn PreviewSurface>,
    pub labels: Labels,
    pub confirm_clear: bool,
    pub toast: Option<Toast>,
    pub splash: Splash,
    /// Cambia en cada navegación (reinicia el scroll de la página)
    pub page_visits: u64,
    pub(crate) applied_theme: Option<Theme>,
}

impl Academy {
    pub fn new(store: PreferenceStore, surface: Box<dyn PreviewSurface>, catalog: Catalog) -> Self {
        let session = Session::restore(&store);
        let shelf = PageShelf::from_catalog(&catalog);

        let mut academy = Self {
            session,
            store,
            catalog,
            shelf,
            preview: PreviewRenderer::new(),
            surface,
            labels: Labels::default(),
            confirm_clear: false,
            toast: None,
            splash: Splash::default(),
            page_visits: 0,
            applied_theme: None,
        };

        academy.show_initial_page();
        academy.apply_theme();
        academy.load_last_session();
        academy
    }

    /// Monta la aplicación con los backends de la plataforma.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_config(config: &AcademyConfig) -> Self {
        use crate::preview::FileSurface;
        use crate::store::FileBackend;

        let backend = FileBackend::open(&config.store_path);
        log::info!("Preferencias en {}", backend.path().display());
        let store = PreferenceStore::new(Box::new(backend), config.key_prefix.clone());
        let surface = FileSurface::new(&config.preview_path);
        Self::new(store, Box::new(surface), read_catalog_embedded())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_config(config: &AcademyConfig) -> Self {
        use crate::config::PREVIEW_ELEMENT_ID;
        use crate::preview::IframeSurface;
        use crate::store::{KeyValueBackend, LocalStorageBackend, MemoryBackend};

        let backend: Box<dyn KeyValueBackend> = match LocalStorageBackend::open() {
            Ok(backend) => Box::new(backend),
            Err(e) => {
                log::warn!("localStorage no disponible, el progreso no sobrevivirá: {e}");
                Box::new(MemoryBackend::default())
            }
        };
        let store = PreferenceStore::new(backend, config.key_prefix.clone());
        let surface = IframeSurface::new(PREVIEW_ELEMENT_ID);
        Self::new(store, Box::new(surface), read_catalog_embedded())
    }

    /// Página inicial sin registrar progreso
    fn show_initial_page(&mut self) {
        let id = self.session.active;
        let source = self.shelf.resolve(id);
        self.shelf.show(source);
        self.update_labels(id);
    }

    pub(crate) fn update_labels(&mut self, id: LessonId) {
        self.labels = Labels {
            module: format!("MÓDULO {}", id.module()),
            lesson: self.catalog.nav_label(id),
        };
    }

    pub fn preview_location(&self) -> Option<String> {
        self.surface.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::MemorySurface;
    use crate::store::{MemoryBackend, PLACEHOLDER_DRAFT};

    #[test]
    fn startup_restores_session_and_renders_draft() {
        let backend = MemoryBackend::default();
        backend.insert("h5_draft", "<p>guardado</p>");
        backend.insert("h5_completed", r#"["1-2"]"#);
        let surface = MemorySurface::default();

        let academy = Academy::new(
            PreferenceStore::new(Box::new(backend.clone()), "h5_"),
            Box::new(surface.clone()),
            read_catalog_embedded(),
        );

        assert_eq!(academy.session.completed().len(), 1);
        assert_eq!(surface.presented(), 1);
        assert_eq!(
            surface.last().map(|d| d.body().to_string()).as_deref(),
            Some("<p>guardado</p>")
        );
        assert_eq!(academy.labels.module, "MÓDULO 1");
        assert_eq!(academy.labels.lesson, "1.1 Qué es HTML5");
        assert_eq!(academy.shelf.active().map(|p| p.page.id), Some(LessonId::default()));
        // la página inicial no cuenta como visitada
        assert!(!academy.session.is_completed(LessonId::default()));
    }

    #[test]
    fn fresh_start_persists_default_theme_only() {
        let backend = MemoryBackend::default();
        let surface = MemorySurface::default();
        let academy = Academy::new(
            PreferenceStore::new(Box::new(backend.clone()), "h5_"),
            Box::new(surface.clone()),
            Catalog::default(),
        );

        assert_eq!(academy.session.theme, Theme::Dark);
        assert_eq!(academy.session.draft, PLACEHOLDER_DRAFT);
        assert_eq!(backend.value("h5_theme").as_deref(), Some("dark"));
        assert_eq!(backend.value("h5_completed"), None);
        assert_eq!(academy.progress_view().percent_label, "0%");
    }
}
