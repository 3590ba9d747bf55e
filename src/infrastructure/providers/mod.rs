pub mod practicum_client;
pub mod telegram_notifier;

pub use practicum_client::PracticumClient;
pub use telegram_notifier::TelegramNotifier;

use crate::domain::errors::{BotError, BotResult};
use reqwest::Client;
use std::time::Duration;

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest client shared by both providers' constructors
pub(crate) fn build_http_client() -> BotResult<Client> {
    Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(BotError::ClientInit)
}
