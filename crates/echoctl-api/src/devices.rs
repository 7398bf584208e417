// Device listing endpoint
//
// `GET /api/devices-v2/device` returns every device registered to the
// account, wrapped in a `{ "devices": [...] }` envelope. Filtering down to
// controllable devices is the domain layer's concern; this module returns
// the list verbatim, order preserved.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::Client;
use crate::error::Error;

/// One capability entry on a raw device record.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub interface_name: Option<String>,
}

/// A device record exactly as the service reports it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDevice {
    pub serial_number: String,
    pub account_name: Option<String>,
    pub device_family: Option<String>,
    pub device_type: Option<String>,
    pub device_owner_customer_id: Option<String>,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

#[derive(Deserialize)]
struct DevicesEnvelope {
    #[serde(default)]
    devices: Vec<RawDevice>,
}

impl Client {
    /// List all devices on the account, in service order.
    ///
    /// `GET /api/devices-v2/device?cached=false`
    pub async fn list_devices(&self) -> Result<Vec<RawDevice>, Error> {
        let mut url = self.api_url("api/devices-v2/device");
        url.set_query(Some("cached=false"));
        debug!("listing devices");
        let envelope: DevicesEnvelope = self.get(url).await?;
        Ok(envelope.devices)
    }
}
