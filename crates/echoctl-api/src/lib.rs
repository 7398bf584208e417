// echoctl-api: Async Rust client for the voice-assistant device-control service

pub mod client;
pub mod commands;
pub mod cookie;
pub mod devices;
pub mod error;
pub mod player;
pub mod routines;
pub mod transport;

pub use client::{Client, Connected};
pub use commands::SequenceNode;
pub use devices::RawDevice;
pub use error::Error;
pub use player::{PlayerCommand, PlayerInfo};
pub use routines::Automation;
pub use transport::TransportConfig;
