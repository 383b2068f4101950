//! Vista previa en vivo: el texto del editor envuelto en una plantilla fija.
//!
//! No hay validación ni diff. Cada render sustituye por completo al anterior.

use std::ops::Range;

mod surface;

pub use surface::{FileSurface, MemorySurface, PreviewSurface};
#[cfg(target_arch = "wasm32")]
pub use surface::IframeSurface;

const TEMPLATE_HEAD: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="UTF-8">
        <style>
            body { font-family: sans-serif; padding: 2rem; background: #fff; color: #1a1a1a; }
            h1 { color: #E34F26; border-bottom: 2px solid #eee; padding-bottom: 10px; }
            pre { background: #f4f4f4; padding: 15px; border-radius: 8px; }
        </style>
    </head>
    <body>"#;

const TEMPLATE_TAIL: &str = "</body>\n</html>\n";

/// Documento efímero; no se persiste.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewDocument {
    html: String,
    body: Range<usize>,
    generation: u64,
}

impl PreviewDocument {
    fn wrap(source: &str, generation: u64) -> Self {
        let mut html = String::with_capacity(TEMPLATE_HEAD.len() + source.len() + TEMPLATE_TAIL.len());
        html.push_str(TEMPLATE_HEAD);
        let start = html.len();
        html.push_str(source);
        let end = html.len();
        html.push_str(TEMPLATE_TAIL);
        Self {
            html,
            body: start..end,
            generation,
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Contenido del body, idéntico al texto fuente.
    pub fn body(&self) -> &str {
        &self.html[self.body.clone()]
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct PreviewRenderer {
    current: Option<PreviewDocument>,
    generation: u64,
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, source: &str) -> &PreviewDocument {
        self.generation += 1;
        log::debug!(
            "Render de vista previa #{} ({} bytes)",
            self.generation,
            source.len()
        );
        self.current
            .insert(PreviewDocument::wrap(source, self.generation))
    }

    pub fn current(&self) -> Option<&PreviewDocument> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_the_source_verbatim() {
        let mut renderer = PreviewRenderer::new();
        let doc = renderer.render("<h1>Hi</h1>\nok");
        assert_eq!(doc.body(), "<h1>Hi</h1>\nok");
        assert!(doc.html().starts_with("<!DOCTYPE html>"));
        assert!(doc.html().contains("<body><h1>Hi</h1>\nok</body>"));
    }

    #[test]
    fn render_is_a_pure_function_of_the_text() {
        let mut renderer = PreviewRenderer::new();
        let first = renderer.render("<p>same</p>").html().to_string();
        let second = renderer.render("<p>same</p>").html().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_markup_passes_through() {
        let mut renderer = PreviewRenderer::new();
        let doc = renderer.render("<div><span>unclosed");
        assert_eq!(doc.body(), "<div><span>unclosed");
    }

    #[test]
    fn each_render_replaces_the_previous_one() {
        let mut renderer = PreviewRenderer::new();
        renderer.render("<p>a</p>");
        renderer.render("");
        let current = renderer.current().expect("rendered");
        assert_eq!(current.body(), "");
        assert_eq!(current.generation(), 2);
    }
}
