//! Domain layer between `echoctl-api` and the CLI.
//!
//! This crate owns the session and device-resolution logic for the
//! echoctl workspace:
//!
//! - **[`SessionManager`]** — lazily establishes the one authenticated
//!   connection a process gets. Concurrent callers share a single in-flight
//!   handshake; a rotated session cookie is written back to the credential
//!   store before the first caller proceeds.
//!
//! - **[`CredentialStore`]** — the narrow key/value contract the session
//!   layer needs from persistent storage (`echoctl-config` provides the
//!   file-backed implementation).
//!
//! - **[`catalog`]** — fetches the raw device list and filters it down to
//!   controllable devices (audio-capable, or a basic smart speaker by
//!   family tag).
//!
//! - **[`resolve`](resolve::resolve)** — maps an optional user-supplied
//!   name, or the stored default preference, to exactly one [`Device`].
//!
//! - **[`broadcast`](broadcast::broadcast)** — concurrent fan-out of one
//!   command to many devices, collecting a per-device outcome.

pub mod backend;
pub mod broadcast;
pub mod catalog;
pub mod convert;
pub mod credentials;
pub mod device;
pub mod error;
pub mod remote;
pub mod resolve;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backend::ApiBackend;
pub use broadcast::{BroadcastOutcome, broadcast};
pub use credentials::{CredentialStore, StoreError, keys};
pub use device::{Device, DeviceCommand};
pub use error::CoreError;
pub use remote::{Connect, RemoteControl};
pub use session::{Connection, Credentials, SessionManager};

// Re-export the API types the CLI reads through the concrete client.
pub use echoctl_api::{Automation, PlayerInfo, TransportConfig};
