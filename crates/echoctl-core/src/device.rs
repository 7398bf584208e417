// ── Device domain types ──

use serde::{Deserialize, Serialize};

/// Capability interface name marking a device as audio-capable.
pub const AUDIO_PLAYER_CAPABILITY: &str = "AUDIO_PLAYER";

/// Family tag for basic smart speakers. Some models in this family omit
/// the explicit audio capability yet are universally audio-capable, so
/// the catalog filter accepts the family tag as a fallback.
pub const BASIC_SPEAKER_FAMILY: &str = "ECHO";

/// One controllable physical unit.
///
/// An immutable snapshot of what the service reported at listing time;
/// nothing here is cached across commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Stable serial identifier (primary key).
    pub serial: String,
    /// Human-readable account name.
    pub name: String,
    /// Device family/class tag.
    pub family: String,
    /// Vendor device-type identifier, required on every wire call.
    pub kind: String,
    /// Account identifier the device is registered under.
    pub customer_id: Option<String>,
    pub online: bool,
    /// Whether the device advertises audio playback.
    pub supports_audio: bool,
}

impl Device {
    /// The catalog filter: audio capability, or the basic-speaker family.
    pub fn is_controllable(&self) -> bool {
        self.supports_audio || self.family == BASIC_SPEAKER_FAMILY
    }
}

/// A command addressed to one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    /// Resume playback.
    Play,
    Pause,
    Next,
    Previous,
    /// Absolute volume, 0-100.
    SetVolume(u8),
    /// Text-to-speech.
    Speak(String),
    /// Announcement chime + speech.
    Announce(String),
    /// Free text, handled as if spoken to the device.
    Text(String),
}
