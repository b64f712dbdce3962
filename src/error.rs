use thiserror::Error;

/// Why a single dataset could not be turned into a layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unexpected status {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("request for '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("invalid JSON in '{url}': {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{url}' is not a list of records")]
    Shape { url: String },
}
