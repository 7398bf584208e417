// ── Credential store contract ──
//
// The session layer needs exactly three operations from persistent
// storage. The file-backed implementation lives in `echoctl-config`;
// tests substitute an in-memory map. Implementations must treat a
// missing or corrupt backing store as empty rather than failing reads.

use thiserror::Error;

/// Well-known keys in the credential record.
pub mod keys {
    /// The session cookie blob (primary credential).
    pub const COOKIE: &str = "cookie";
    /// Optional csrf token; derivable from the cookie when absent.
    pub const CSRF: &str = "csrf";
    /// The user's default device preference (serial or name).
    pub const DEFAULT_DEVICE: &str = "defaultDevice";
    /// Optional service host override (e.g. a regional endpoint).
    pub const SERVICE_HOST: &str = "serviceHost";
}

/// A credential persistence failure (I/O or serialization).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Durable key/value persistence for session secrets and preferences.
pub trait CredentialStore: Send + Sync {
    /// Read a value. Absent keys and unreadable storage both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, creating the backing store if needed.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the entire record.
    fn clear(&self) -> Result<(), StoreError>;
}
