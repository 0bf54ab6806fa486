use serde::Deserialize;

/// Error body returned by the backend on non-success responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human readable reason.
    pub detail: String,
}
