// Routine (automation) listing and replay
//
// Routines are user-authored automations stored service-side. Replaying one
// posts its stored sequence back through the behaviors endpoint with the
// current-device placeholders substituted for a concrete target.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;

/// A stored automation, as listed by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    pub automation_id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub triggers: Vec<serde_json::Value>,
    pub sequence: Option<serde_json::Value>,
}

impl Automation {
    /// The spoken trigger phrase, when the routine has a voice trigger.
    pub fn utterance(&self) -> Option<&str> {
        self.triggers
            .iter()
            .find_map(|t| t.pointer("/payload/utterance").and_then(|u| u.as_str()))
    }

    /// Match a user-supplied routine name against this automation.
    ///
    /// Exact (case-insensitive) name or utterance match wins; otherwise a
    /// case-insensitive substring match on the name is accepted.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        if let Some(name) = &self.name {
            if name.to_lowercase() == needle {
                return true;
            }
        }
        if let Some(utterance) = self.utterance() {
            if utterance.to_lowercase() == needle {
                return true;
            }
        }
        self.name
            .as_ref()
            .is_some_and(|n| n.to_lowercase().contains(&needle))
    }
}

impl Client {
    /// List all stored automations.
    ///
    /// `GET /api/behaviors/v2/automations?limit=2000`
    pub async fn list_automations(&self) -> Result<Vec<Automation>, Error> {
        let mut url = self.api_url("api/behaviors/v2/automations");
        url.set_query(Some("limit=2000"));
        debug!("listing automations");
        self.get(url).await
    }

    /// Replay a stored automation on one device.
    ///
    /// The stored sequence references the triggering device through
    /// placeholders; substituting them retargets the routine.
    pub async fn run_automation(
        &self,
        serial: &str,
        device_type: &str,
        customer_id: Option<&str>,
        automation: &Automation,
    ) -> Result<(), Error> {
        let sequence = automation
            .sequence
            .as_ref()
            .ok_or_else(|| {
                Error::Unsupported(format!(
                    "automation '{}' has no executable sequence",
                    automation.name.as_deref().unwrap_or(&automation.automation_id)
                ))
            })?
            .to_string();

        let sequence = sequence
            .replace("ALEXA_CURRENT_DEVICE_TYPE", device_type)
            .replace("ALEXA_CURRENT_DSN", serial)
            .replace("ALEXA_CUSTOMER_ID", customer_id.unwrap_or_default());

        let body = json!({
            "behaviorId": automation.automation_id,
            "sequenceJson": sequence,
            "status": "ENABLED",
        });

        debug!(serial, automation = %automation.automation_id, "running automation");
        self.post_ok(self.api_url("api/behaviors/preview"), &body)
            .await
    }
}
