/// Errors surfaced by the watchlist client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// Machine-readable error code from the body, when present.
        code: Option<String>,
        message: String,
    },

    /// The form cannot be submitted as filled in.
    #[error("Invalid form: {0}")]
    InvalidForm(String),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
