use crate::alert::{alert_body, AlertSink, Permission, PermissionPolicy, ALERT_TITLE};
use crate::feed::{FeedState, FetchError};
use crate::incident::Incident;
use std::sync::mpsc::Receiver;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelState {
    Idle,
    Subscribed,
    Closed,
}

/// Everything a session delivers to its single consumer context: pushed
/// live events and the outcome of the one-shot history fetch.
#[derive(Debug)]
pub enum FeedMessage {
    Event(serde_json::Value),
    History(Result<Vec<Incident>, FetchError>),
}

/// One session's view model. Owns the feed state and the alert sink;
/// `Idle -> Subscribed -> Closed`, no transitions back.
pub struct FeedSession<S: AlertSink> {
    state: ChannelState,
    feed: FeedState,
    sink: S,
    policy: PermissionPolicy,
}

impl<S: AlertSink> FeedSession<S> {
    pub fn new(sink: S, policy: PermissionPolicy) -> Self {
        Self {
            state: ChannelState::Idle,
            feed: FeedState::default(),
            sink,
            policy,
        }
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Idle -> Subscribed. Resolves alert permission up front per the
    /// configured policy; a denied or unanswered prompt only suppresses
    /// alerts, never event handling.
    pub fn subscribe(&mut self) {
        if self.state != ChannelState::Idle {
            return;
        }
        match self.policy {
            PermissionPolicy::AlwaysAsk => {
                self.sink.request_permission();
            }
            PermissionPolicy::AskOnce => {
                if self.sink.permission() == Permission::Undetermined {
                    self.sink.request_permission();
                }
            }
        }
        self.state = ChannelState::Subscribed;
    }

    /// Subscribed -> Closed. No callback has any effect after this;
    /// re-subscription is a new session, not a transition back.
    pub fn close(&mut self) {
        if self.state == ChannelState::Subscribed {
            self.state = ChannelState::Closed;
        }
    }

    /// One inbound raw event: decode and normalize, prepend to the log,
    /// then dispatch exactly one alert if permission is granted. Malformed
    /// payloads are dropped with a warning; the log and the subscription
    /// stay intact.
    pub fn handle_event(&mut self, raw: &serde_json::Value) {
        if self.state != ChannelState::Subscribed {
            return;
        }
        let incident = match Incident::from_raw(raw) {
            Ok(incident) => incident,
            Err(err) => {
                warn!("dropping inbound event: {err}");
                return;
            }
        };

        let permitted = self.sink.permission() == Permission::Granted;
        let body = alert_body(&incident);
        self.feed.log.prepend(incident);
        if permitted {
            self.sink.dispatch(ALERT_TITLE, &body);
        }
    }

    /// Applies a history fetch outcome. Success replaces the snapshot
    /// wholesale; failure logs and leaves prior state untouched. A response
    /// landing after close is a no-op, not an error.
    pub fn apply_history(&mut self, result: Result<Vec<Incident>, FetchError>) {
        if self.state == ChannelState::Closed {
            return;
        }
        match result {
            Ok(incidents) => self.feed.replace_history(incidents),
            Err(err) => warn!("history fetch failed, keeping previous snapshot: {err}"),
        }
    }
}

/// Drives a session from its channel, one message at a time, until every
/// sender hangs up. Subscribes on entry, closes exactly once on exit, and
/// returns the session for inspection.
pub fn run_session<S: AlertSink>(
    messages: Receiver<FeedMessage>,
    mut session: FeedSession<S>,
) -> FeedSession<S> {
    session.subscribe();
    while let Ok(message) = messages.recv() {
        match message {
            FeedMessage::Event(raw) => session.handle_event(&raw),
            FeedMessage::History(result) => session.apply_history(result),
        }
    }
    session.close();
    session
}
