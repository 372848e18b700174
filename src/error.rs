//! Error type shared by every page enhancement.
//!
//! ERROR HANDLING
//! ==============
//! Faults come from the page template (missing elements, missing tooltip
//! library) or from the browser (storage quota, DOM exceptions). None are
//! retried. Load-time faults abort the remaining initialization and surface in
//! the developer console only; the end user never sees them.

#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    #[error("element not found: #{id}")]
    MissingElement { id: String },
    #[error("document has no <body>")]
    MissingBody,
    #[error("tooltip library is not loaded")]
    TooltipUnavailable,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
}

pub type Result<T, E = ChromeError> = std::result::Result<T, E>;

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ChromeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(describe_js(&value))
    }
}

#[cfg(feature = "hydrate")]
impl From<ChromeError> for wasm_bindgen::JsValue {
    fn from(err: ChromeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Render a thrown JS value as text, preferring `Error.message`.
#[cfg(feature = "hydrate")]
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
