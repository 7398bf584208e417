// Player transport commands and playback status
//
// Play/pause/skip go through `np/command`; the current playback snapshot
// comes from `np/player`. Both are scoped to one device via query params.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::Client;
use crate::error::Error;

/// Transport-control commands understood by the player endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Next,
    Previous,
}

impl PlayerCommand {
    fn wire_type(self) -> &'static str {
        match self {
            Self::Play => "PlayCommand",
            Self::Pause => "PauseCommand",
            Self::Next => "NextCommand",
            Self::Previous => "PreviousCommand",
        }
    }
}

/// Playback state snapshot for one device.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub state: Option<PlayerState>,
    pub info_text: Option<InfoText>,
    pub volume: Option<VolumeInfo>,
    pub provider: Option<Provider>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoText {
    pub title: Option<String>,
    pub sub_text1: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub volume: Option<u8>,
    #[serde(default)]
    pub muted: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub provider_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerEnvelope {
    #[serde(default)]
    player_info: PlayerInfo,
}

impl Client {
    /// Send a transport-control command to one device.
    ///
    /// `POST /api/np/command?deviceSerialNumber={serial}&deviceType={type}`
    pub async fn player_command(
        &self,
        serial: &str,
        device_type: &str,
        command: PlayerCommand,
    ) -> Result<(), Error> {
        let mut url = self.api_url("api/np/command");
        url.query_pairs_mut()
            .append_pair("deviceSerialNumber", serial)
            .append_pair("deviceType", device_type);
        debug!(serial, command = command.wire_type(), "player command");
        self.post_ok(url, &serde_json::json!({ "type": command.wire_type() }))
            .await
    }

    /// Fetch the current playback snapshot for one device.
    ///
    /// `GET /api/np/player?deviceSerialNumber={serial}&deviceType={type}`
    pub async fn player_info(&self, serial: &str, device_type: &str) -> Result<PlayerInfo, Error> {
        let mut url = self.api_url("api/np/player");
        url.query_pairs_mut()
            .append_pair("deviceSerialNumber", serial)
            .append_pair("deviceType", device_type);
        debug!(serial, "fetching player info");
        let envelope: PlayerEnvelope = self.get(url).await?;
        Ok(envelope.player_info)
    }
}
