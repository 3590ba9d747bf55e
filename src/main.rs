use homework_bot::config::Config;
use homework_bot::infrastructure::providers::{PracticumClient, TelegramNotifier};
use homework_bot::infrastructure::runtime::SystemClock;
use homework_bot::HomeworkPoller;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let api = PracticumClient::new(&config.practicum_endpoint, &config.practicum_token)?;
    let notifier = TelegramNotifier::new(
        &config.telegram_api_url,
        &config.telegram_token,
        &config.telegram_chat_id,
    )?;

    let poller = HomeworkPoller::new(
        Arc::new(api),
        Arc::new(notifier),
        Arc::new(SystemClock),
        config.from_date,
        config.retry_time,
    );

    poller.run().await;

    Ok(())
}
