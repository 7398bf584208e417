// ── Core error types ──
//
// User-facing errors from echoctl-core. Consumers never see HTTP status
// codes or JSON parse failures directly; the `From<echoctl_api::Error>`
// impl translates wire-layer errors into domain-appropriate variants.
// Every variant is terminal for the current command -- nothing here is
// retried internally.

use thiserror::Error;

use crate::credentials::StoreError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No credentials stored. Resolved by running the authentication flow.
    #[error("not authenticated -- run `echoctl auth` to store a session cookie")]
    NotAuthenticated,

    /// Credentials were present but the handshake failed (stale cookie,
    /// network failure). Carries the underlying cause for diagnostics.
    #[error("connection to the device service failed: {reason}")]
    ConnectionFailed { reason: String },

    /// A remote call failed after the session was established.
    #[error("remote call failed: {message}")]
    Remote { message: String },

    /// Resolution could not pick a single device without more input.
    #[error("multiple devices found -- specify one with `-d <name>` or set a default")]
    AmbiguousTarget,

    /// The requested or default name matched no controllable device.
    #[error("device not found: \"{name}\"")]
    DeviceNotFound { name: String },

    /// Credential persistence failed.
    #[error("credential store error: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Wrap a handshake failure, preserving the cause text.
    pub fn connection_failed(cause: impl std::fmt::Display) -> Self {
        Self::ConnectionFailed {
            reason: cause.to_string(),
        }
    }
}

// ── Conversion from wire-layer errors ───────────────────────────────
//
// Applies to calls made through an established session. Handshake
// failures are mapped explicitly to `ConnectionFailed` by the backend.

impl From<echoctl_api::Error> for CoreError {
    fn from(err: echoctl_api::Error) -> Self {
        if err.is_auth_expired() {
            Self::Remote {
                message: format!("{err} (session may have expired; run `echoctl auth`)"),
            }
        } else {
            Self::Remote {
                message: err.to_string(),
            }
        }
    }
}
