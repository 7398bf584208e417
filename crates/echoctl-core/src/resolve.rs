// ── Device resolution ──
//
// Maps an optional user-supplied name, or the stored default preference,
// to exactly one device. Re-runs the full list+match on every invocation;
// device names and serials can change between commands, so nothing is
// cached.

use tracing::debug;

use crate::catalog;
use crate::credentials::{CredentialStore, keys};
use crate::device::Device;
use crate::error::CoreError;
use crate::remote::RemoteControl;

/// Resolve a device selector to one device.
///
/// Precedence with no name supplied: stored default (exact serial match or
/// case-insensitive full-name match), then sole-device convenience, then
/// [`CoreError::AmbiguousTarget`]. With a name: first device in catalog
/// order whose name contains it case-insensitively, or whose serial equals
/// it exactly.
pub async fn resolve<C, S>(
    client: &C,
    store: &S,
    requested: Option<&str>,
) -> Result<Device, CoreError>
where
    C: RemoteControl,
    S: CredentialStore,
{
    let mut devices = catalog::list_controllable(client).await?;

    // Empty catalog: nothing can resolve. Name the selector we would
    // have used so the message points at something actionable.
    if devices.is_empty() {
        let attempted = requested
            .map(str::to_owned)
            .or_else(|| store.get(keys::DEFAULT_DEVICE))
            .unwrap_or_else(|| "default".to_owned());
        return Err(CoreError::DeviceNotFound { name: attempted });
    }

    let Some(name) = requested else {
        if let Some(default) = store.get(keys::DEFAULT_DEVICE) {
            let wanted = default.to_lowercase();
            if let Some(found) = devices
                .iter()
                .find(|d| d.serial == default || d.name.to_lowercase() == wanted)
            {
                debug!(device = %found.name, "resolved via stored default");
                return Ok(found.clone());
            }
        }
        if devices.len() == 1 {
            return Ok(devices.remove(0));
        }
        return Err(CoreError::AmbiguousTarget);
    };

    let needle = name.to_lowercase();
    devices
        .iter()
        .find(|d| d.name.to_lowercase().contains(&needle) || d.serial == name)
        .cloned()
        .inspect(|d| debug!(device = %d.name, "resolved by name"))
        .ok_or_else(|| CoreError::DeviceNotFound {
            name: name.to_owned(),
        })
}
