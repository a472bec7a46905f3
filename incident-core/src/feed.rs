use crate::incident::Incident;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
}

/// The live notification log: newest-first, append-only at the head. Entries
/// are never removed or reordered for the lifetime of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationLog {
    entries: Vec<Incident>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&mut self, incident: Incident) {
        self.entries.insert(0, incident);
    }

    pub fn entries(&self) -> &[Incident] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two views of a session. History and the live log share the record
/// shape but stay independent collections; they are never merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    pub history: Vec<Incident>,
    pub log: NotificationLog,
}

impl FeedState {
    /// Full replacement, not a merge; repeated loads simply re-replace.
    pub fn replace_history(&mut self, incidents: Vec<Incident>) {
        self.history = incidents;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(location: &str) -> Incident {
        Incident {
            emergency_type: "Fire".into(),
            location: location.into(),
            keywords: vec![],
            decision: "emergency".into(),
            image: None,
        }
    }

    #[test]
    fn log_keeps_newest_first() {
        let mut log = NotificationLog::new();
        log.prepend(incident("a"));
        log.prepend(incident("b"));
        log.prepend(incident("c"));

        let locations: Vec<&str> = log.entries().iter().map(|i| i.location.as_str()).collect();
        assert_eq!(locations, vec!["c", "b", "a"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn history_replace_is_wholesale() {
        let mut feed = FeedState::default();
        feed.replace_history(vec![incident("a"), incident("b")]);
        feed.replace_history(vec![incident("c")]);

        assert_eq!(feed.history.len(), 1);
        assert_eq!(feed.history[0].location, "c");
    }
}
