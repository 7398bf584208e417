// ── Broadcast fan-out ──
//
// One command, every device, concurrently. The join completes only after
// every send has finished; a failure on one device never aborts the
// others, and the caller gets a per-device outcome rather than a bare
// completion count.

use futures::future::join_all;
use tracing::debug;

use crate::device::{Device, DeviceCommand};
use crate::error::CoreError;
use crate::remote::RemoteControl;

/// The result of one device's send within a broadcast.
#[derive(Debug)]
pub struct BroadcastOutcome {
    pub device: Device,
    pub result: Result<(), CoreError>,
}

impl BroadcastOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Send `command` to every device concurrently, collecting all outcomes.
///
/// Outcomes are returned in the same order as `devices`.
pub async fn broadcast<C: RemoteControl>(
    client: &C,
    devices: Vec<Device>,
    command: &DeviceCommand,
) -> Vec<BroadcastOutcome> {
    debug!(count = devices.len(), "broadcasting command");
    let sends = devices.into_iter().map(|device| async move {
        let result = client.send(&device, command).await;
        BroadcastOutcome { device, result }
    });
    join_all(sends).await
}

/// Count of successful sends in a set of outcomes.
pub fn delivered(outcomes: &[BroadcastOutcome]) -> usize {
    outcomes.iter().filter(|o| o.succeeded()).count()
}
