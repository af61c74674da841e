//! Client error types.

/// Errors that can occur when calling the postcodes.io API.
///
/// Non-2xx HTTP statuses are not errors at this level: the API reports them
/// through the `status` field of the response envelope, which decodes
/// normally. The two variants here distinguish network-layer failures from
/// payload-layer failures.
#[derive(Debug, thiserror::Error)]
pub enum PostcodesError {
    /// Request construction or HTTP transport failed (malformed URL,
    /// connection failure, timeout, body read failure)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not decode as the expected envelope
    #[error("JSON parse error: {message}")]
    Decode {
        message: String,
        /// Offending body, truncated, for diagnostics
        body: Option<String>,
    },
}
