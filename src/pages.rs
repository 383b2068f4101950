//! Páginas del libro: estáticas (del temario) o sintetizadas al vuelo.

use crate::data::Catalog;
use crate::model::LessonId;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LessonPage {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub example: Option<String>,
}

impl LessonPage {
    /// Página genérica para lecciones sin contenido estático.
    pub fn placeholder(id: LessonId) -> Self {
        Self {
            id,
            title: format!("Lección {}.{}", id.module(), id.lesson()),
            subtitle: Some("Contenido técnico avanzado en desarrollo...".to_string()),
            paragraphs: vec![
                "Estamos procesando la información de esta lección para ofrecerte la documentación más actualizada de 2026."
                    .to_string(),
            ],
            example: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageOrigin {
    Static,
    Synthesized,
}

#[derive(Clone, Debug)]
pub struct MountedPage {
    pub page: LessonPage,
    pub origin: PageOrigin,
    pub active: bool,
}

/// Resultado de resolver un id contra el libro.
#[derive(Clone, Debug, PartialEq)]
pub enum PageSource {
    /// Índice de la página estática montada
    Static(usize),
    Synthesized(LessonPage),
}

/// Páginas montadas. Las sintetizadas no se cachean: cada visita a una
/// lección sin página estática añade una copia nueva.
#[derive(Clone, Debug, Default)]
pub struct PageShelf {
    pages: Vec<MountedPage>,
}

impl PageShelf {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let pages = catalog
            .pages
            .iter()
            .cloned()
            .map(|page| MountedPage {
                page,
                origin: PageOrigin::Static,
                active: false,
            })
            .collect();
        Self { pages }
    }

    pub fn resolve(&self, id: LessonId) -> PageSource {
        match self
            .pages
            .iter()
            .position(|p| p.origin == PageOrigin::Static && p.page.id == id)
        {
            Some(idx) => PageSource::Static(idx),
            None => PageSource::Synthesized(LessonPage::placeholder(id)),
        }
    }

    /// Desactiva todas las páginas y activa la resuelta.
    pub fn show(&mut self, source: PageSource) -> &MountedPage {
        for p in &mut self.pages {
            p.active = false;
        }
        let idx = match source {
            PageSource::Static(idx) => idx,
            PageSource::Synthesized(page) => {
                log::debug!("Página sintetizada para {}", page.id);
                self.pages.push(MountedPage {
                    page,
                    origin: PageOrigin::Synthesized,
                    active: false,
                });
                self.pages.len() - 1
            }
        };
        let mounted = &mut self.pages[idx];
        mounted.active = true;
        mounted
    }

    pub fn active(&self) -> Option<&MountedPage> {
        self.pages.iter().find(|p| p.active)
    }

    pub fn mounted(&self) -> &[MountedPage] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> PageShelf {
        let yaml = "pages:\n  - id: \"1-1\"\n    title: Uno\n  - id: \"2-5\"\n    title: Dos\n";
        PageShelf::from_catalog(&Catalog::from_yaml(yaml).expect("catalog"))
    }

    fn id(token: &str) -> LessonId {
        token.parse().expect("valid id")
    }

    #[test]
    fn static_pages_resolve_by_id() {
        let shelf = shelf();
        assert_eq!(shelf.resolve(id("2-5")), PageSource::Static(1));
        assert!(matches!(shelf.resolve(id("4-4")), PageSource::Synthesized(p) if p.title == "Lección 4.4"));
    }

    #[test]
    fn exactly_one_page_is_active() {
        let mut shelf = shelf();
        let src = shelf.resolve(id("1-1"));
        shelf.show(src);
        let src = shelf.resolve(id("9-9"));
        shelf.show(src);
        let src = shelf.resolve(id("2-5"));
        shelf.show(src);

        let active: Vec<_> = shelf.mounted().iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].page.id, id("2-5"));
    }

    #[test]
    fn synthesized_pages_are_regenerated_on_every_visit() {
        let mut shelf = shelf();
        for _ in 0..3 {
            let src = shelf.resolve(id("6-2"));
            shelf.show(src);
        }
        let copies: Vec<_> = shelf
            .mounted()
            .iter()
            .filter(|p| p.page.id == id("6-2"))
            .collect();
        assert_eq!(copies.len(), 3);
        assert!(copies.iter().all(|p| p.page == LessonPage::placeholder(id("6-2"))));
        assert!(copies.iter().all(|p| p.origin == PageOrigin::Synthesized));
        assert_eq!(shelf.len(), 5);
    }
}
