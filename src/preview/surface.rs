use super::PreviewDocument;
use crate::error::PreviewError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Superficie donde se muestra la vista previa. Presentar un documento
/// descarta el anterior.
pub trait PreviewSurface {
    fn present(&mut self, document: &PreviewDocument) -> Result<(), PreviewError>;

    /// Enlace abrible por el usuario, si la superficie lo tiene
    fn location(&self) -> Option<String> {
        None
    }
}

/// Guarda sólo el último documento presentado.
#[derive(Clone, Default)]
pub struct MemorySurface {
    last: Rc<RefCell<Option<PreviewDocument>>>,
    presented: Rc<RefCell<usize>>,
}

impl MemorySurface {
    pub fn last(&self) -> Option<PreviewDocument> {
        self.last.borrow().clone()
    }

    pub fn presented(&self) -> usize {
        *self.presented.borrow()
    }
}

impl PreviewSurface for MemorySurface {
    fn present(&mut self, document: &PreviewDocument) -> Result<(), PreviewError> {
        *self.last.borrow_mut() = Some(document.clone());
        *self.presented.borrow_mut() += 1;
        Ok(())
    }
}

/// Escritorio: el documento se vuelca a un `.html` que el navegador del
/// sistema puede abrir. Cada render sobrescribe el fichero.
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreviewSurface for FileSurface {
    fn present(&mut self, document: &PreviewDocument) -> Result<(), PreviewError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("html.tmp");
        std::fs::write(&tmp, document.html())?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn location(&self) -> Option<String> {
        let absolute = std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        Some(format!("file://{}", absolute.display()))
    }
}

/// Web: Blob `text/html` + object URL en el iframe `live-out`.
/// La URL anterior se revoca en cada render.
#[cfg(target_arch = "wasm32")]
pub struct IframeSurface {
    element_id: String,
    current_url: Option<String>,
}

#[cfg(target_arch = "wasm32")]
impl IframeSurface {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            current_url: None,
        }
    }

    fn iframe(&self) -> Result<web_sys::HtmlIFrameElement, PreviewError> {
        use wasm_bindgen::JsCast;

        let web = |e: wasm_bindgen::JsValue| PreviewError::Web(format!("{e:?}"));
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PreviewError::Web("no document".into()))?;

        if let Some(existing) = document.get_element_by_id(&self.element_id) {
            return existing
                .dyn_into::<web_sys::HtmlIFrameElement>()
                .map_err(|_| PreviewError::Web(format!("#{} is not an iframe", self.element_id)));
        }

        // La página anfitriona no trae iframe: se crea uno
        let frame = document
            .create_element("iframe")
            .map_err(web)?
            .dyn_into::<web_sys::HtmlIFrameElement>()
            .map_err(|_| PreviewError::Web("created element is not an iframe".into()))?;
        frame.set_id(&self.element_id);
        let body = document
            .body()
            .ok_or_else(|| PreviewError::Web("no body".into()))?;
        body.append_child(&frame).map_err(web)?;
        Ok(frame)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreviewSurface for IframeSurface {
    fn present(&mut self, document: &PreviewDocument) -> Result<(), PreviewError> {
        let web = |e: wasm_bindgen::JsValue| PreviewError::Web(format!("{e:?}"));

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(document.html()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/html");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(web)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(web)?;

        self.iframe()?.set_src(&url);
        if let Some(stale) = self.current_url.replace(url) {
            web_sys::Url::revoke_object_url(&stale).map_err(web)?;
        }
        Ok(())
    }

    fn location(&self) -> Option<String> {
        self.current_url.clone()
    }
}
