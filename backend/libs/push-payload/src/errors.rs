use thiserror::Error;

/// Payload composition errors
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown push platform: {0}")]
    UnknownPlatform(String),
}

/// Errors surfaced while handing a payload to the dispatch backend
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to compose payload: {0}")]
    Payload(#[from] PayloadError),

    #[error("Dispatch backend error: {0}")]
    Backend(String),
}
