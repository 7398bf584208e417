// Sequence command dispatch
//
// Speech, announcements, volume, and free-text commands all go through the
// behaviors endpoint: a single-node sequence document, serialized to a
// string, wrapped in a preview envelope. The node type and payload differ
// per operation; everything else is shared scaffolding.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::Client;
use crate::error::Error;

/// One executable sequence operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceNode {
    /// Text-to-speech on one device.
    Speak { text: String },
    /// Announcement chime + speech.
    Announce { text: String },
    /// Free text, handled as if spoken to the device.
    TextCommand { text: String },
    /// Absolute volume, 0-100.
    Volume { level: u8 },
}

impl SequenceNode {
    fn operation_type(&self) -> &'static str {
        match self {
            Self::Speak { .. } => "Alexa.Speak",
            Self::Announce { .. } => "AlexaAnnouncement",
            Self::TextCommand { .. } => "Alexa.TextCommand",
            Self::Volume { .. } => "Alexa.DeviceControls.Volume",
        }
    }

    fn operation_payload(
        &self,
        serial: &str,
        device_type: &str,
        customer_id: Option<&str>,
        locale: &str,
    ) -> Value {
        match self {
            Self::Speak { text } => json!({
                "deviceType": device_type,
                "deviceSerialNumber": serial,
                "customerId": customer_id,
                "locale": locale,
                "textToSpeak": text,
            }),
            Self::Announce { text } => json!({
                "expireAfter": "PT5S",
                "content": [{
                    "locale": locale,
                    "display": { "title": "echoctl", "body": text },
                    "speak": { "type": "text", "value": text },
                }],
                "target": {
                    "customerId": customer_id,
                    "devices": [{
                        "deviceSerialNumber": serial,
                        "deviceTypeId": device_type,
                    }],
                },
                "customerId": customer_id,
            }),
            Self::TextCommand { text } => json!({
                "deviceType": device_type,
                "deviceSerialNumber": serial,
                "customerId": customer_id,
                "locale": locale,
                "text": text,
                "skillId": "amzn1.ask.1p.tellalexa",
            }),
            Self::Volume { level } => json!({
                "deviceType": device_type,
                "deviceSerialNumber": serial,
                "customerId": customer_id,
                "locale": locale,
                "value": level,
            }),
        }
    }
}

impl Client {
    /// Execute a single sequence node against one device.
    ///
    /// `POST /api/behaviors/preview`
    pub async fn send_sequence(
        &self,
        serial: &str,
        device_type: &str,
        customer_id: Option<&str>,
        node: &SequenceNode,
    ) -> Result<(), Error> {
        let sequence = json!({
            "@type": "com.amazon.alexa.behaviors.model.Sequence",
            "startNode": {
                "@type": "com.amazon.alexa.behaviors.model.OpaquePayloadOperationNode",
                "type": node.operation_type(),
                "operationPayload": node.operation_payload(
                    serial,
                    device_type,
                    customer_id,
                    self.locale(),
                ),
            },
        });

        let body = json!({
            "behaviorId": "PREVIEW",
            "sequenceJson": sequence.to_string(),
            "status": "ENABLED",
        });

        debug!(serial, kind = node.operation_type(), "sending sequence command");
        self.post_ok(self.api_url("api/behaviors/preview"), &body)
            .await
    }
}
