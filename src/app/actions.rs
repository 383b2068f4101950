use super::*;

/// Segundos que un aviso permanece visible
const TOAST_SECS: f64 = 4.0;

impl Academy {
    /// Regenera la vista previa desde el borrador actual y la presenta.
    pub fn run_preview(&mut self) {
        let document = self.preview.render(&self.session.draft);
        if let Err(e) = self.surface.present(document) {
            log::warn!("La vista previa no se pudo presentar: {e}");
        }
    }

    /// Cada edición se guarda al momento; la vista previa no se toca.
    pub fn edit_draft(&mut self, text: String) {
        if text == self.session.draft {
            return;
        }
        self.session.draft = text;
        self.store.set_draft(&self.session.draft);
    }

    /// Abre la confirmación; nada cambia hasta que el usuario acepte.
    pub fn request_clear(&mut self) {
        self.confirm_clear = true;
    }

    pub fn confirm_clear_editor(&mut self) {
        self.confirm_clear = false;
        self.session.draft.clear();
        self.store.set_draft(&self.session.draft);
        self.run_preview();
    }

    pub fn decline_clear(&mut self) {
        self.confirm_clear = false;
    }

    pub fn toggle_theme(&mut self) {
        self.session.theme = self.session.theme.toggled();
        self.apply_theme();
    }

    /// Persiste el tema actual; los visuales de egui se aplican en el siguiente frame.
    pub(crate) fn apply_theme(&mut self) {
        self.store.set_theme(self.session.theme);
    }

    pub(crate) fn load_last_session(&mut self) {
        self.run_preview();
    }

    pub fn show_toast(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("[Toast]: {text}");
        self.toast = Some(Toast {
            text,
            expires_at: None,
        });
    }

    /// Texto del aviso vigente; el plazo empieza a contar al mostrarse.
    pub fn visible_toast(&mut self, now: f64) -> Option<&str> {
        let expired = match self.toast.as_mut() {
            Some(toast) => *toast.expires_at.get_or_insert(now + TOAST_SECS) <= now,
            None => return None,
        };
        if expired {
            self.toast = None;
            return None;
        }
        self.toast.as_ref().map(|t| t.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::MemorySurface;
    use crate::store::MemoryBackend;

    fn academy() -> (Academy, MemoryBackend, MemorySurface) {
        let backend = MemoryBackend::default();
        let surface = MemorySurface::default();
        let academy = Academy::new(
            PreferenceStore::new(Box::new(backend.clone()), "h5_"),
            Box::new(surface.clone()),
            read_catalog_embedded(),
        );
        (academy, backend, surface)
    }

    #[test]
    fn edit_then_run_embeds_text_verbatim() {
        let (mut academy, backend, surface) = academy();

        academy.edit_draft("<h1>Hi</h1>\nok".to_string());
        assert_eq!(backend.value("h5_draft").as_deref(), Some("<h1>Hi</h1>\nok"));
        assert_eq!(crate::code_utils::gutter_lines(&academy.session.draft), vec!["1", "2"]);
        // editar no re-renderiza
        assert_eq!(surface.presented(), 1);

        academy.run_preview();
        let doc = surface.last().expect("rendered");
        assert_eq!(doc.body(), "<h1>Hi</h1>\nok");
        assert_eq!(surface.presented(), 2);
    }

    #[test]
    fn clear_requires_confirmation() {
        let (mut academy, backend, surface) = academy();
        academy.edit_draft("<p>keep</p>".to_string());

        academy.request_clear();
        assert!(academy.confirm_clear);
        academy.decline_clear();
        assert!(!academy.confirm_clear);
        assert_eq!(academy.session.draft, "<p>keep</p>");
        assert_eq!(surface.presented(), 1);

        academy.request_clear();
        academy.confirm_clear_editor();
        assert_eq!(academy.session.draft, "");
        assert_eq!(backend.value("h5_draft").as_deref(), Some(""));
        assert_eq!(surface.last().map(|d| d.body().to_string()).as_deref(), Some(""));
    }

    #[test]
    fn toggling_theme_twice_restores_it_and_persists_each_time() {
        let (mut academy, backend, _) = academy();
        let original = academy.session.theme;

        academy.toggle_theme();
        assert_eq!(backend.value("h5_theme").as_deref(), Some("light"));
        academy.toggle_theme();
        assert_eq!(academy.session.theme, original);
        assert_eq!(backend.value("h5_theme").as_deref(), Some("dark"));
    }

    #[test]
    fn toast_expires_after_being_shown() {
        let (mut academy, _, _) = academy();
        academy.show_toast("hola");
        assert_eq!(academy.visible_toast(10.0), Some("hola"));
        assert_eq!(academy.visible_toast(13.9), Some("hola"));
        assert_eq!(academy.visible_toast(14.0), None);
        assert!(academy.toast.is_none());
    }
}
