// ── API-to-domain type conversions ──
//
// Bridges raw `echoctl_api` response records into the canonical `Device`
// type. Normalizes missing optional fields and collapses the capability
// list into a single audio-support flag.

use echoctl_api::RawDevice;

use crate::device::{AUDIO_PLAYER_CAPABILITY, Device};

impl From<RawDevice> for Device {
    fn from(raw: RawDevice) -> Self {
        let supports_audio = raw
            .capabilities
            .iter()
            .any(|c| c.interface_name.as_deref() == Some(AUDIO_PLAYER_CAPABILITY));
        Self {
            name: raw
                .account_name
                .unwrap_or_else(|| raw.serial_number.clone()),
            serial: raw.serial_number,
            family: raw.device_family.unwrap_or_default(),
            kind: raw.device_type.unwrap_or_default(),
            customer_id: raw.device_owner_customer_id,
            online: raw.online,
            supports_audio,
        }
    }
}
