// src/data.rs

use crate::error::CatalogError;
use crate::model::LessonId;
use crate::pages::LessonPage;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Deserialize, Debug, Clone)]
pub struct LessonEntry {
    pub number: u8,
    pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ModuleEntry {
    pub number: u8,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<LessonEntry>,
}

/// Temario: títulos de módulos/lecciones y páginas estáticas.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Catalog {
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
    #[serde(default)]
    pub pages: Vec<LessonPage>,
}

impl Catalog {
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        let mut seen = HashSet::new();
        for page in &catalog.pages {
            if !seen.insert(page.id) {
                return Err(CatalogError::DuplicatePage(page.id.to_string()));
            }
        }
        Ok(catalog)
    }

    pub fn module_title(&self, module: u8) -> String {
        self.modules
            .iter()
            .find(|m| m.number == module)
            .map(|m| m.title.clone())
            .unwrap_or_else(|| format!("Módulo {module}"))
    }

    pub fn lesson_title(&self, id: LessonId) -> Option<&str> {
        self.modules
            .iter()
            .find(|m| m.number == id.module())?
            .lessons
            .iter()
            .find(|l| l.number == id.lesson())
            .map(|l| l.title.as_str())
    }

    /// Texto del elemento de navegación (también es la etiqueta de lección).
    pub fn nav_label(&self, id: LessonId) -> String {
        match self.lesson_title(id) {
            Some(title) => format!("{}.{} {}", id.module(), id.lesson(), title),
            None => format!("Lección {}.{}", id.module(), id.lesson()),
        }
    }
}

/// Carga el temario desde el YAML embebido. Si falla, temario vacío:
/// todas las páginas se sintetizan.
pub fn read_catalog_embedded() -> Catalog {
    let file_content = include_str!("data/lessons.yaml");
    match Catalog::from_yaml(file_content) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("No se pudo cargar el temario embebido: {e}");
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::from_yaml(include_str!("data/lessons.yaml")).expect("catalog");
        assert!(!catalog.pages.is_empty());
        let first = LessonId::default();
        assert!(catalog.pages.iter().any(|p| p.id == first));
        assert!(catalog.lesson_title(first).is_some());
    }

    #[test]
    fn untitled_lessons_get_generic_labels() {
        let catalog = Catalog::default();
        let id = LessonId::new(7, 3).expect("valid");
        assert_eq!(catalog.nav_label(id), "Lección 7.3");
        assert_eq!(catalog.module_title(7), "Módulo 7");
    }

    #[test]
    fn duplicate_pages_are_rejected() {
        let yaml = r#"
pages:
  - id: "1-1"
    title: Uno
  - id: "1-1"
    title: Otra vez
"#;
        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(CatalogError::DuplicatePage(id)) if id == "1-1"
        ));
    }

    #[test]
    fn invalid_page_ids_fail_to_parse() {
        let yaml = "pages:\n  - id: \"25-1\"\n    title: Fuera\n";
        assert!(matches!(Catalog::from_yaml(yaml), Err(CatalogError::Yaml(_))));
    }
}
