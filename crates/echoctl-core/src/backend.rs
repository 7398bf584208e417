// ── Production backend ──
//
// Bridges the capability traits onto the concrete `echoctl_api::Client`.
// Handshake failures map to `ConnectionFailed`; failures on established
// calls map to `Remote` via `From<echoctl_api::Error>`.

use echoctl_api::{Client, PlayerCommand, SequenceNode, TransportConfig};
use url::Url;

use crate::device::{Device, DeviceCommand};
use crate::error::CoreError;
use crate::remote::{Connect, RemoteControl};
use crate::session::{Connection, Credentials};

/// Connects to the real device-control service over HTTPS.
pub struct ApiBackend {
    base_url: Url,
    transport: TransportConfig,
}

impl ApiBackend {
    pub fn new(base_url: Url, transport: TransportConfig) -> Self {
        Self {
            base_url,
            transport,
        }
    }
}

impl Connect for ApiBackend {
    type Client = Client;

    async fn connect(&self, credentials: Credentials) -> Result<Connection<Client>, CoreError> {
        let connected = Client::connect(
            self.base_url.clone(),
            &credentials.cookie,
            credentials.csrf.as_deref(),
            &self.transport,
        )
        .await
        .map_err(CoreError::connection_failed)?;

        Ok(Connection {
            client: connected.client,
            refreshed_cookie: connected.refreshed_cookie,
        })
    }
}

impl RemoteControl for Client {
    async fn devices(&self) -> Result<Vec<Device>, CoreError> {
        let raw = self.list_devices().await?;
        Ok(raw.into_iter().map(Device::from).collect())
    }

    async fn send(&self, device: &Device, command: &DeviceCommand) -> Result<(), CoreError> {
        let customer_id = device.customer_id.as_deref();
        match command {
            DeviceCommand::Play => {
                self.player_command(&device.serial, &device.kind, PlayerCommand::Play)
                    .await?;
            }
            DeviceCommand::Pause => {
                self.player_command(&device.serial, &device.kind, PlayerCommand::Pause)
                    .await?;
            }
            DeviceCommand::Next => {
                self.player_command(&device.serial, &device.kind, PlayerCommand::Next)
                    .await?;
            }
            DeviceCommand::Previous => {
                self.player_command(&device.serial, &device.kind, PlayerCommand::Previous)
                    .await?;
            }
            DeviceCommand::SetVolume(level) => {
                self.send_sequence(
                    &device.serial,
                    &device.kind,
                    customer_id,
                    &SequenceNode::Volume { level: *level },
                )
                .await?;
            }
            DeviceCommand::Speak(text) => {
                self.send_sequence(
                    &device.serial,
                    &device.kind,
                    customer_id,
                    &SequenceNode::Speak { text: text.clone() },
                )
                .await?;
            }
            DeviceCommand::Announce(text) => {
                self.send_sequence(
                    &device.serial,
                    &device.kind,
                    customer_id,
                    &SequenceNode::Announce { text: text.clone() },
                )
                .await?;
            }
            DeviceCommand::Text(text) => {
                self.send_sequence(
                    &device.serial,
                    &device.kind,
                    customer_id,
                    &SequenceNode::TextCommand { text: text.clone() },
                )
                .await?;
            }
        }
        Ok(())
    }
}
