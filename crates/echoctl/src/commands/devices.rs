//! Device listing and default-device selection.

use serde::Serialize;
use tabled::Tabled;

use echoctl_core::{CredentialStore, Device, catalog, keys, resolve::resolve};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::{CliSession, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Online")]
    online: String,
    #[tabled(rename = "Default")]
    default: String,
}

/// Device plus the default marker, so structured output carries it too.
#[derive(Serialize)]
struct DeviceEntry {
    #[serde(flatten)]
    device: Device,
    is_default: bool,
}

fn row(entry: &DeviceEntry) -> DeviceRow {
    DeviceRow {
        name: entry.device.name.clone(),
        family: entry.device.family.clone(),
        serial: entry.device.serial.clone(),
        online: if entry.device.online { "yes" } else { "no" }.into(),
        default: if entry.is_default { "*" } else { "" }.into(),
    }
}

// ── Handlers ────────────────────────────────────────────────────────

/// `echoctl devices`
pub async fn list(session: &CliSession, global: &GlobalOpts) -> Result<(), CliError> {
    let spinner = util::spinner("Fetching devices...", global);
    let client = session.get().await?;
    let devices = catalog::list_controllable(client).await?;
    spinner.finish_and_clear();

    if devices.is_empty() {
        output::info("No playback-capable devices found.", global);
        return Ok(());
    }

    let default = session.store().get(keys::DEFAULT_DEVICE);
    let entries: Vec<DeviceEntry> = devices
        .into_iter()
        .map(|device| {
            let is_default = default
                .as_deref()
                .is_some_and(|d| device.serial == d || device.name == d);
            DeviceEntry { device, is_default }
        })
        .collect();

    let out = output::render_list(&global.output, &entries, row, |e| e.device.serial.clone());
    output::print_output(&out, global.quiet);

    if default.is_none() {
        output::info("Set a default: echoctl default \"<device name>\"", global);
    }
    Ok(())
}

/// `echoctl default <name>`
pub async fn set_default(
    session: &CliSession,
    name: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let spinner = util::spinner("Looking up device...", global);
    let client = session.get().await?;
    let device = resolve(client, session.store(), Some(name)).await?;
    spinner.finish_and_clear();

    session.store().set(keys::DEFAULT_DEVICE, &device.serial)?;
    output::success(
        &format!("Default device set to: {}", output::bold(&device.name, global)),
        global,
    );
    Ok(())
}
