use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Routine,
    Emergency,
}

/// Shared record shape for both the historical snapshot and live events.
///
/// `decision` stays an open string so records with values this build has
/// never seen still decode; severity styling is derived from it on demand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(rename = "emergencyType", alias = "emergency", default)]
    pub emergency_type: String,
    pub location: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub decision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Error)]
#[error("malformed incident payload: {reason}")]
pub struct MalformedEvent {
    pub reason: String,
}

impl Incident {
    /// Decodes one inbound payload and normalizes its image field. Missing
    /// `keywords` decodes as empty; missing `location` or `decision` is a
    /// `MalformedEvent`.
    pub fn from_raw(raw: &serde_json::Value) -> Result<Self, MalformedEvent> {
        let mut incident: Incident = serde_json::from_value(raw.clone()).map_err(|e| {
            MalformedEvent {
                reason: e.to_string(),
            }
        })?;
        incident.image = incident.image.take().map(normalize_image);
        Ok(incident)
    }

    pub fn severity(&self) -> Severity {
        map_severity(&self.decision)
    }
}

/// A value already carrying a data-URI scheme passes through unchanged;
/// anything else is treated as a bare base64 payload and gets the fixed
/// jpeg prefix. Idempotent.
pub fn normalize_image(value: String) -> String {
    if value.starts_with("data:") {
        value
    } else {
        format!("{JPEG_DATA_URI_PREFIX}{value}")
    }
}

pub fn map_severity(decision: &str) -> Severity {
    match decision.to_lowercase().as_str() {
        "emergency" => Severity::Emergency,
        _ => Severity::Routine,
    }
}
