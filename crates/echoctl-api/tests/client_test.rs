#![allow(clippy::unwrap_used)]
// Integration tests for the service client using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use echoctl_api::{Client, Error, PlayerCommand, SequenceNode, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const COOKIE: &str = "session-token=OLD; csrf=12345";

fn bootstrap_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/api/bootstrap"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
}

async fn connect(server: &MockServer) -> Client {
    let base_url = Url::parse(&server.uri()).unwrap();
    let cookie: SecretString = COOKIE.to_string().into();
    Client::connect(base_url, &cookie, None, &TransportConfig::default())
        .await
        .unwrap()
        .client
}

// ── Session validation ──────────────────────────────────────────────

#[tokio::test]
async fn test_connect_success_sends_cookie_and_derived_csrf() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bootstrap"))
        .and(query_param("version", "0"))
        .and(header("cookie", COOKIE))
        .and(header("csrf", "12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let cookie: SecretString = COOKIE.to_string().into();
    let connected = Client::connect(base_url, &cookie, None, &TransportConfig::default())
        .await
        .unwrap();

    assert!(connected.refreshed_cookie.is_none());
}

#[tokio::test]
async fn test_connect_rejected_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bootstrap"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let cookie: SecretString = COOKIE.to_string().into();
    let result = Client::connect(base_url, &cookie, None, &TransportConfig::default()).await;

    match result {
        Err(Error::Authentication { .. }) => {}
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connect_captures_rotated_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bootstrap"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .insert_header("set-cookie", "session-token=NEW; Path=/; HttpOnly"),
        )
        .mount(&server)
        .await;

    let base_url = Url::parse(&server.uri()).unwrap();
    let cookie: SecretString = COOKIE.to_string().into();
    let connected = Client::connect(base_url, &cookie, None, &TransportConfig::default())
        .await
        .unwrap();

    let refreshed = connected.refreshed_cookie.unwrap();
    assert!(refreshed.contains("session-token=NEW"));
    assert!(refreshed.contains("csrf=12345"));
}

// ── Cookie helpers ──────────────────────────────────────────────────

#[test]
fn test_extract_csrf() {
    assert_eq!(
        echoctl_api::cookie::extract_csrf(COOKIE).as_deref(),
        Some("12345")
    );
    assert_eq!(echoctl_api::cookie::extract_csrf("session-token=X"), None);
}

#[test]
fn test_merge_set_cookies_unchanged_is_none() {
    let merged = echoctl_api::cookie::merge_set_cookies(
        COOKIE,
        &["session-token=OLD; Path=/".to_string()],
    );
    assert!(merged.is_none());
}

#[test]
fn test_merge_set_cookies_appends_new_pair() {
    let merged =
        echoctl_api::cookie::merge_set_cookies(COOKIE, &["at-main=abc; Secure".to_string()])
            .unwrap();
    assert!(merged.contains("session-token=OLD"));
    assert!(merged.ends_with("at-main=abc"));
}

// ── Device listing ──────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let server = MockServer::start().await;
    bootstrap_mock().mount(&server).await;

    let envelope = json!({
        "devices": [
            {
                "accountName": "Kitchen Echo",
                "serialNumber": "A1",
                "deviceFamily": "ECHO",
                "deviceType": "A3S5BH4HMV94FB",
                "online": true,
                "capabilities": [{ "interfaceName": "AUDIO_PLAYER" }]
            },
            {
                "accountName": "Office Dot",
                "serialNumber": "B2",
                "deviceFamily": "KNIGHT",
                "deviceType": "A32DOYMUN6DTXA",
                "online": false,
                "capabilities": []
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/devices-v2/device"))
        .and(query_param("cached", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let devices = client.list_devices().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].serial_number, "A1");
    assert_eq!(devices[0].account_name.as_deref(), Some("Kitchen Echo"));
    assert_eq!(
        devices[0].capabilities[0].interface_name.as_deref(),
        Some("AUDIO_PLAYER")
    );
    assert!(devices[1].capabilities.is_empty());
    assert_eq!(devices[1].device_family.as_deref(), Some("KNIGHT"));
}

// ── Sequence commands ───────────────────────────────────────────────

#[tokio::test]
async fn test_send_sequence_speak() {
    let server = MockServer::start().await;
    bootstrap_mock().mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/behaviors/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    client
        .send_sequence(
            "A1",
            "A3S5BH4HMV94FB",
            Some("CUST1"),
            &SequenceNode::Speak {
                text: "hello".into(),
            },
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let preview = requests
        .iter()
        .find(|r| r.url.path() == "/api/behaviors/preview")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&preview.body).unwrap();
    assert_eq!(body["behaviorId"], "PREVIEW");
    assert_eq!(body["status"], "ENABLED");

    let sequence = body["sequenceJson"].as_str().unwrap();
    assert!(sequence.contains("Alexa.Speak"));
    assert!(sequence.contains("\"textToSpeak\":\"hello\""));
    assert!(sequence.contains("\"deviceSerialNumber\":\"A1\""));
}

#[tokio::test]
async fn test_send_sequence_service_error() {
    let server = MockServer::start().await;
    bootstrap_mock().mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/behaviors/preview"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let result = client
        .send_sequence("A1", "T1", None, &SequenceNode::Volume { level: 30 })
        .await;

    match result {
        Err(Error::Api { status: 500, .. }) => {}
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Player endpoints ────────────────────────────────────────────────

#[tokio::test]
async fn test_player_command_body() {
    let server = MockServer::start().await;
    bootstrap_mock().mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/np/command"))
        .and(query_param("deviceSerialNumber", "A1"))
        .and(query_param("deviceType", "T1"))
        .and(body_json(json!({ "type": "PauseCommand" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    client
        .player_command("A1", "T1", PlayerCommand::Pause)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_player_info() {
    let server = MockServer::start().await;
    bootstrap_mock().mount(&server).await;

    let envelope = json!({
        "playerInfo": {
            "state": { "status": "PLAYING" },
            "infoText": { "title": "Blue Train", "subText1": "John Coltrane" },
            "volume": { "volume": 40, "muted": false },
            "provider": { "providerName": "Apple Music" }
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/np/player"))
        .and(query_param("deviceSerialNumber", "A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let info = client.player_info("A1", "T1").await.unwrap();

    assert_eq!(info.state.unwrap().status.as_deref(), Some("PLAYING"));
    assert_eq!(info.info_text.unwrap().title.as_deref(), Some("Blue Train"));
    assert_eq!(info.volume.unwrap().volume, Some(40));
}
