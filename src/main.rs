//! Event intake bot entry point.
//!
//! Wires the adapters together: loads configuration, registers the
//! Telegram webhook and serves the webhook endpoint.

use std::process;
use std::sync::Arc;

use secrecy::ExposeSecret;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use event_intake::adapters::session::InMemorySessionStore;
use event_intake::adapters::sheets::{GoogleSheetsSink, ServiceAccountKey};
use event_intake::adapters::telegram::{webhook_routes, TelegramClient, WebhookState};
use event_intake::application::ProcessMessageHandler;
use event_intake::config::AppConfig;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("fatal: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.server.log_level)?)
        .init();

    let key = match &config.sheets.credentials {
        Some(json) => ServiceAccountKey::from_json(json.expose_secret())?,
        None => ServiceAccountKey::from_file(&config.sheets.credentials_file)?,
    };
    let sink = Arc::new(
        GoogleSheetsSink::new(key, config.sheets.spreadsheet_id.clone())
            .with_range(config.sheets.range.clone()),
    );

    let telegram = Arc::new(TelegramClient::new(config.telegram.bot_token.clone()));
    telegram.set_webhook(&config.telegram.webhook_url()).await?;

    let sessions = Arc::new(InMemorySessionStore::new());
    let handler = Arc::new(ProcessMessageHandler::new(sessions, sink, telegram));

    let app = webhook_routes(WebhookState::new(handler, config.telegram.path_token()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "event intake bot listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
