use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the interactive map. None of these reach the page: the map
/// logs them and stays inert.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("{0} not found")]
    ContainerNotFound(String),
    #[error("{url} not found (status {status})")]
    ContentLoad { url: String, status: u16 },
    #[error(transparent)]
    Request(#[from] gloo_net::Error),
    #[error("invalid listing data: {0}")]
    Listing(#[source] serde_json::Error),
    #[error("invalid map config: {0}")]
    Config(#[source] serde_json::Error),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MapError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
