#![allow(clippy::unwrap_used)]
// Broadcast fan-out tests: every device gets its own outcome, and one
// failure never aborts the rest.

mod common;

use echoctl_core::{CoreError, DeviceCommand, broadcast};

use common::{FakeClient, speaker};

#[tokio::test]
async fn every_device_gets_an_outcome_in_order() {
    let devices = vec![
        speaker("A1", "Kitchen Echo"),
        speaker("B2", "Office Dot"),
        speaker("C3", "Bedroom Echo"),
    ];
    let client = FakeClient::with_devices(devices.clone());

    let outcomes = broadcast::broadcast(
        &client,
        devices,
        &DeviceCommand::Announce("dinner time".into()),
    )
    .await;

    assert_eq!(outcomes.len(), 3);
    let serials: Vec<&str> = outcomes.iter().map(|o| o.device.serial.as_str()).collect();
    assert_eq!(serials, vec!["A1", "B2", "C3"]);
    assert_eq!(broadcast::delivered(&outcomes), 3);

    let sent = client.sent.lock().unwrap();
    assert_eq!(sent.len(), 3);
}

#[tokio::test]
async fn one_failure_does_not_abort_the_others() {
    let devices = vec![
        speaker("A1", "Kitchen Echo"),
        speaker("B2", "Office Dot"),
        speaker("C3", "Bedroom Echo"),
    ];
    let client = FakeClient {
        devices: devices.clone(),
        failing: vec!["B2".to_owned()],
        ..FakeClient::default()
    };

    let outcomes =
        broadcast::broadcast(&client, devices, &DeviceCommand::Speak("hello".into())).await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(broadcast::delivered(&outcomes), 2);

    let failed = outcomes.iter().find(|o| !o.succeeded()).unwrap();
    assert_eq!(failed.device.serial, "B2");
    assert!(matches!(failed.result, Err(CoreError::Remote { .. })));
}

#[tokio::test]
async fn empty_device_set_yields_no_outcomes() {
    let client = FakeClient::default();
    let outcomes =
        broadcast::broadcast(&client, Vec::new(), &DeviceCommand::Announce("x".into())).await;
    assert!(outcomes.is_empty());
}
