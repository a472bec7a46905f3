use crate::incident::Incident;

pub const ALERT_TITLE: &str = "New Incident";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    Undetermined,
}

/// Whether a session prompts for alert permission on every subscribe or
/// only while the answer is still undetermined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionPolicy {
    AskOnce,
    AlwaysAsk,
}

/// Capability seam for platform notifications, so the session logic runs
/// without a real UI host.
pub trait AlertSink {
    fn permission(&self) -> Permission;

    /// Prompt for alert permission; returns the resolved state.
    fn request_permission(&mut self) -> Permission;

    /// Fire-and-forget user-visible alert. Never awaited.
    fn dispatch(&mut self, title: &str, body: &str);
}

/// Human-readable summary for one alert. An empty keyword list renders as
/// an empty segment, not an error.
pub fn alert_body(incident: &Incident) -> String {
    format!(
        "Location: {}\nKeywords: {}",
        incident.location,
        incident.keywords.join(", ")
    )
}
