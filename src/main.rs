//! nsewatch binary: starts the watchlist monitor and stops it on Ctrl-C.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TELEGRAM_BOT_TOKEN`: Telegram bot token
//! - `TELEGRAM_CHAT_ID`: destination chat identifier
//! - `NEWS_API_KEY`: GNews API key
//!
//! ## Optional
//! - `RUST_LOG`: log filter (default: info)

use nsewatch::{Monitor, MonitorConfig, Notifier, Settings, WatchClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let client = WatchClient::builder()
        .news_api_key(settings.news_api_key.clone())
        .build()?;
    let notifier = Notifier::new(
        &client,
        settings.telegram_bot_token.clone(),
        settings.telegram_chat_id.clone(),
    );

    let config = MonitorConfig::default();
    tracing::info!(
        watchlist = %config.watchlist.join(", "),
        interval_secs = config.poll_interval.as_secs(),
        "starting monitor"
    );

    let handle = Monitor::new(client, notifier, config).start();

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received, stopping monitor");
    handle.stop().await;

    Ok(())
}
