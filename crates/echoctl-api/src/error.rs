use thiserror::Error;

/// Top-level error type for the `echoctl-api` crate.
///
/// Covers every failure mode of the wire layer: session validation,
/// transport, structured service errors, and payload decoding.
/// `echoctl-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The service rejected the session cookie (expired or revoked).
    #[error("Authentication rejected: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Service ─────────────────────────────────────────────────────
    /// Non-success response from the service.
    #[error("Service error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Operation cannot be performed on this resource.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl Error {
    /// Returns `true` if this error indicates the session has expired
    /// and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        match self {
            Self::Authentication { .. } => true,
            Self::Api { status, .. } => matches!(status, 401 | 403),
            Self::Transport(e) => {
                matches!(e.status().map(|s| s.as_u16()), Some(401 | 403))
            }
            _ => false,
        }
    }
}
