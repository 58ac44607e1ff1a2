use crate::error::SortControlError;
use commstat_config::ConfigLoadError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("window is unavailable")]
    MissingWindow,

    #[error("document is unavailable")]
    MissingDocument,

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("element {0} has an unexpected type")]
    WrongElementType(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid page data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("sort control is busy handling another event")]
    Busy,

    #[error(transparent)]
    Control(#[from] SortControlError),

    #[error(transparent)]
    Config(#[from] ConfigLoadError),
}

impl WebError {
    pub fn js(value: JsValue) -> Self {
        WebError::Js(describe_js(&value))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Message of a thrown JS value, falling back to its debug form.
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
