use crate::store::DEFAULT_KEY_PREFIX;
use std::path::PathBuf;

/// Configuración de arranque.
///
/// Escritorio: variables de entorno. Web: variable de compilación y después
/// el parámetro `key_prefix` de la URL.
#[derive(Clone, Debug, PartialEq)]
pub struct AcademyConfig {
    pub key_prefix: String,
    pub store_path: PathBuf,
    pub preview_path: PathBuf,
    pub log_filter: String,
}

pub const ENV_KEY_PREFIX: &str = "LESSON_ACADEMY_KEY_PREFIX";
pub const ENV_STORE: &str = "LESSON_ACADEMY_STORE";
pub const ENV_PREVIEW: &str = "LESSON_ACADEMY_PREVIEW";
pub const ENV_LOG: &str = "LESSON_ACADEMY_LOG";

/// id del iframe de vista previa en `index.html`
pub const PREVIEW_ELEMENT_ID: &str = "live-out";

impl Default for AcademyConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            store_path: PathBuf::from("academy_prefs.json"),
            preview_path: std::env::temp_dir().join("lesson_academy_preview.html"),
            log_filter: "info".to_string(),
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl AcademyConfig {
    /// Lee la configuración con una función de búsqueda (normalmente `std::env::var`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).as_deref().and_then(normalize);
        Self {
            key_prefix: get(ENV_KEY_PREFIX).unwrap_or(defaults.key_prefix),
            store_path: get(ENV_STORE).map(PathBuf::from).unwrap_or(defaults.store_path),
            preview_path: get(ENV_PREVIEW)
                .map(PathBuf::from)
                .unwrap_or(defaults.preview_path),
            log_filter: get(ENV_LOG).unwrap_or(defaults.log_filter),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let key_prefix = option_env!("LESSON_ACADEMY_KEY_PREFIX")
            .and_then(normalize)
            .or_else(key_prefix_from_querystring)
            .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string());
        Self {
            key_prefix,
            ..Self::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn key_prefix_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };

        if key == "key_prefix" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize(&decoded);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = AcademyConfig::from_lookup(|_| None);
        assert_eq!(config, AcademyConfig::default());
        assert_eq!(config.key_prefix, "h5_");
    }

    #[test]
    fn variables_override_defaults_and_blank_is_ignored() {
        let vars: HashMap<&str, &str> = [
            (ENV_KEY_PREFIX, " demo_ "),
            (ENV_STORE, "/tmp/prefs.json"),
            (ENV_LOG, "   "),
        ]
        .into_iter()
        .collect();
        let config = AcademyConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.key_prefix, "demo_");
        assert_eq!(config.store_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.log_filter, "info");
    }
}
