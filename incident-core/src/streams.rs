use crate::session::FeedMessage;
use std::sync::mpsc::{self, Receiver, Sender};

/// The session's inbound channel. One receiver per session; transports
/// clone the sender.
pub fn feed_channel() -> (Sender<FeedMessage>, Receiver<FeedMessage>) {
    mpsc::channel()
}
