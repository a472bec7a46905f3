use incident_core::feed::FetchError;
use incident_core::incident::Incident;

/// One-shot snapshot fetch against the incident service, basic auth over
/// HTTP. Each instance owns its client; sessions do not share transport
/// state.
pub struct HistoryClient {
    endpoint: String,
    username: String,
    password: String,
    http: reqwest::Client,
}

impl HistoryClient {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetches the full incident list. Success means the caller replaces
    /// its history wholesale; every failure path leaves it untouched.
    pub async fn load(&self) -> Result<Vec<Incident>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_snapshot(&body)
    }
}

/// A snapshot body is a JSON array of incident payloads; each record goes
/// through the same decode and image normalization as a live event.
pub fn decode_snapshot(body: &str) -> Result<Vec<Incident>, FetchError> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    raw.iter()
        .map(|value| Incident::from_raw(value).map_err(|e| FetchError::Decode(e.to_string())))
        .collect()
}
