// ── Remote-control capability traits ──
//
// The session, catalog, and resolution layers depend on the remote
// service through these traits rather than the concrete HTTP client,
// so tests can substitute fakes with scripted device lists and
// counted connection attempts.

use std::future::Future;

use crate::device::{Device, DeviceCommand};
use crate::error::CoreError;
use crate::session::{Connection, Credentials};

/// An authenticated handle to the device-control service.
pub trait RemoteControl: Send + Sync {
    /// List every device on the account, unfiltered, in service order.
    fn devices(&self) -> impl Future<Output = Result<Vec<Device>, CoreError>> + Send;

    /// Send one command to one device.
    fn send(
        &self,
        device: &Device,
        command: &DeviceCommand,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Constructs an authenticated [`RemoteControl`] from stored credentials.
///
/// A failed handshake must surface as [`CoreError::ConnectionFailed`]
/// carrying the underlying cause; the session layer never retries it.
pub trait Connect: Send + Sync {
    type Client: RemoteControl;

    fn connect(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Connection<Self::Client>, CoreError>> + Send;
}
