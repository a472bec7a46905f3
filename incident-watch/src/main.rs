use incident_core::config::FeedConfig;
use incident_core::session::{run_session, FeedMessage, FeedSession};
use incident_core::streams;
use incident_watch::desktop::DesktopAlerts;
use incident_watch::history::HistoryClient;
use incident_watch::ingest::ingest_router;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = FeedConfig::from_env()
        .expect("set INCIDENT_ENDPOINT, INCIDENT_USERNAME and INCIDENT_PASSWORD");

    let (feed_tx, feed_rx) = streams::feed_channel();

    // The session is the sole consumer context: live events and the history
    // outcome both arrive over the same channel, one at a time.
    let sink = DesktopAlerts::new(config.icon.clone());
    let session = FeedSession::new(sink, config.permission_policy);
    std::thread::spawn(move || {
        run_session(feed_rx, session);
    });

    let history = HistoryClient::new(&config.endpoint, &config.username, &config.password);
    let history_tx = feed_tx.clone();
    tokio::spawn(async move {
        let result = history.load().await;
        match &result {
            Ok(incidents) => info!("history snapshot loaded: {} incidents", incidents.len()),
            Err(err) => error!("history fetch failed: {err}"),
        }
        let _ = history_tx.send(FeedMessage::History(result));
    });

    let app = ingest_router(feed_tx);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("bind listen address");

    info!("incident-watch listening on {}", config.listen_addr);
    axum::serve(listener, app).await.expect("serve");
}
