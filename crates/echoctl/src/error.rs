//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help
//! text and a distinct exit code per kind.

use miette::Diagnostic;
use thiserror::Error;

use echoctl_core::CoreError;

/// Exit codes, one per error kind, stable for scripting.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────

    #[error("Not authenticated")]
    #[diagnostic(
        code(echoctl::not_authenticated),
        help(
            "Sign in to the vendor's web console, capture the session cookie,\n\
             then run: echoctl auth"
        )
    )]
    NotAuthenticated,

    #[error("Could not connect to the device service: {reason}")]
    #[diagnostic(
        code(echoctl::connection_failed),
        help(
            "The stored session cookie may be stale.\n\
             Re-authenticate with: echoctl auth"
        )
    )]
    ConnectionFailed { reason: String },

    // ── Resolution ───────────────────────────────────────────────────

    #[error("Multiple devices found")]
    #[diagnostic(
        code(echoctl::ambiguous_target),
        help(
            "Specify a device with -d <name>, or set a default:\n\
             \x20 echoctl default \"<device name>\""
        )
    )]
    AmbiguousTarget,

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(echoctl::not_found), help("{hint}"))]
    NotFound {
        resource_type: String,
        identifier: String,
        hint: String,
    },

    // ── Remote ───────────────────────────────────────────────────────

    #[error("Remote command failed: {message}")]
    #[diagnostic(code(echoctl::remote))]
    Remote { message: String },

    // ── Credentials ──────────────────────────────────────────────────

    #[error("Credential store error: {message}")]
    #[diagnostic(code(echoctl::store))]
    Store { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(echoctl::validation))]
    Validation { field: String, reason: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn device_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: "Device".into(),
            identifier: identifier.into(),
            hint: "Run: echoctl devices to list available devices".into(),
        }
    }

    pub fn routine_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: "Routine".into(),
            identifier: identifier.into(),
            hint: "Check the routine's name or trigger phrase in the companion app".into(),
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotAuthenticated => exit_code::AUTH,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::AmbiguousTarget | Self::Validation { .. } => exit_code::USAGE,
            Self::Remote { .. } | Self::Store { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotAuthenticated => Self::NotAuthenticated,
            CoreError::ConnectionFailed { reason } => Self::ConnectionFailed { reason },
            CoreError::Remote { message } => Self::Remote { message },
            CoreError::AmbiguousTarget => Self::AmbiguousTarget,
            CoreError::DeviceNotFound { name } => Self::device_not_found(name),
            CoreError::Store(e) => Self::Store {
                message: e.to_string(),
            },
        }
    }
}

impl From<echoctl_core::StoreError> for CliError {
    fn from(err: echoctl_core::StoreError) -> Self {
        Self::Store {
            message: err.to_string(),
        }
    }
}
