use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use incident_core::session::FeedMessage;
use std::sync::mpsc::Sender;

/// Local push endpoint standing in for the upstream event stream. Payloads
/// are forwarded raw: validation belongs to the session, so a malformed
/// event exercises its drop path instead of being rejected at the edge.
pub fn ingest_router(tx: Sender<FeedMessage>) -> Router {
    Router::new()
        .route("/incidents/push", post(handle_push))
        .with_state(tx)
}

async fn handle_push(
    State(tx): State<Sender<FeedMessage>>,
    Json(payload): Json<serde_json::Value>,
) -> StatusCode {
    match tx.send(FeedMessage::Event(payload)) {
        Ok(_) => StatusCode::ACCEPTED,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
