//! Tipos de error del crate.

use thiserror::Error;

/// Fallos al interpretar un token "modulo-leccion".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LessonIdError {
    #[error("lesson id is empty")]
    Empty,
    #[error("lesson id {0:?} is not of the form module-lesson")]
    Malformed(String),
    #[error("lesson {module}-{lesson} is outside modules 1-20 / lessons 1-10")]
    OutOfRange { module: u32, lesson: u32 },
}

/// Errores de los backends clave/valor. `PreferenceStore` los registra y sigue.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not a json object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("web storage unavailable: {0}")]
    Web(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("lesson catalog is not valid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("lesson catalog lists page {0} twice")]
    DuplicatePage(String),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreviewError {
    #[error("could not write preview document: {0}")]
    Io(#[from] std::io::Error),
    #[error("browser refused the preview document: {0}")]
    Web(String),
}
