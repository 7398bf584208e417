// ── Device catalog ──

use tracing::debug;

use crate::device::Device;
use crate::error::CoreError;
use crate::remote::RemoteControl;

/// Fetch the device list and keep only controllable devices.
///
/// Service order is preserved -- it makes sole-device resolution
/// deterministic and keeps listing output stable between calls. Each
/// invocation performs a fresh listing; an empty result is not an error.
pub async fn list_controllable<C: RemoteControl>(client: &C) -> Result<Vec<Device>, CoreError> {
    let devices = client.devices().await?;
    let controllable: Vec<Device> = devices
        .into_iter()
        .filter(Device::is_controllable)
        .collect();
    debug!(count = controllable.len(), "controllable devices");
    Ok(controllable)
}
