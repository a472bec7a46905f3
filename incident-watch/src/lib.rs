pub mod desktop;
pub mod history;
pub mod ingest;
