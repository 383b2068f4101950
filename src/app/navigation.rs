use super::*;
use crate::error::LessonIdError;
use crate::pages::PageOrigin;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub id: LessonId,
    pub origin: PageOrigin,
    /// `true` si la visita añadió la lección al conjunto de completadas
    pub newly_completed: bool,
}

impl Academy {
    /// Navega a partir del token "modulo-leccion" de un elemento del menú.
    /// Un token inválido no toca el estado.
    pub fn navigate_to(&mut self, token: &str) -> Result<NavigationOutcome, LessonIdError> {
        let id: LessonId = token.parse()?;
        Ok(self.navigate_to_id(id))
    }

    pub fn navigate_to_id(&mut self, id: LessonId) -> NavigationOutcome {
        self.session.active = id;

        // Cambiar de página (estática o sintetizada)
        let source = self.shelf.resolve(id);
        let origin = self.shelf.show(source).origin;
        self.page_visits += 1;

        self.update_labels(id);

        // Registrar progreso
        let newly_completed = self.register_progress(id);

        log::info!(
            "Lección {id} ({origin:?}){}",
            if newly_completed { ", nueva" } else { "" }
        );
        NavigationOutcome {
            id,
            origin,
            newly_completed,
        }
    }
}
