use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use salonbook::app;
use salonbook::config::AppConfig;
use salonbook::services::messaging::log::LogSink;
use salonbook::services::messaging::webhook::WebhookSink;
use salonbook::services::messaging::NotificationSink;
use salonbook::state::AppState;
use salonbook::store::{BookingStore, JsonFileStore, SqliteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store: Box<dyn BookingStore> = match config.storage_backend.as_str() {
        "sqlite" => {
            tracing::info!("using SQLite booking store ({})", config.database_url);
            Box::new(SqliteStore::open(&config.database_url)?)
        }
        "json" => {
            tracing::info!("using JSON booking store ({})", config.bookings_file);
            Box::new(JsonFileStore::open(&config.bookings_file)?)
        }
        other => anyhow::bail!("unknown STORAGE_BACKEND: {other} (expected json or sqlite)"),
    };

    let sink: Arc<dyn NotificationSink> = match &config.notify_webhook_url {
        Some(url) => {
            tracing::info!("delivering notifications to webhook {url}");
            Arc::new(WebhookSink::new(url.clone()))
        }
        None => {
            tracing::info!("logging notifications with WhatsApp links");
            Arc::new(LogSink)
        }
    };

    if config.admin_password == "changeme" {
        tracing::warn!("ADMIN_PASSWORD is the default, set it before going live");
    }

    let state = Arc::new(AppState::new(config.clone(), store, sink));
    let app = app::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("booking system running on {}", config.base_url);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
