//! Session-scoped incident feed: a one-shot history snapshot plus a live
//! notification log fed by pushed events, with platform alerts gated behind
//! a tri-state permission.

pub mod alert;
pub mod config;
pub mod feed;
pub mod incident;
pub mod session;
pub mod streams;
