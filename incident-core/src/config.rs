use crate::alert::PermissionPolicy;

/// Injected per-session configuration. Endpoint and credentials always come
/// from the caller; nothing network-facing is hard-coded.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub icon: Option<String>,
    pub listen_addr: String,
    pub permission_policy: PermissionPolicy,
}

impl FeedConfig {
    /// Builds a config from the environment. Returns `None` when any of the
    /// required endpoint/credential variables is unset.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("INCIDENT_ENDPOINT").ok()?;
        let username = std::env::var("INCIDENT_USERNAME").ok()?;
        let password = std::env::var("INCIDENT_PASSWORD").ok()?;

        let permission_policy = match std::env::var("INCIDENT_REPROMPT").as_deref() {
            Ok("1") | Ok("true") => PermissionPolicy::AlwaysAsk,
            _ => PermissionPolicy::AskOnce,
        };

        Some(Self {
            endpoint,
            username,
            password,
            icon: std::env::var("INCIDENT_ICON").ok(),
            listen_addr: std::env::var("INCIDENT_LISTEN")
                .unwrap_or_else(|_| "0.0.0.0:7878".into()),
            permission_policy,
        })
    }
}
