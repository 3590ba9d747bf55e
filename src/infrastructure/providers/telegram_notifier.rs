//! Telegram delivery provider
//!
//! Implements the Notifier port on top of the Bot API `sendMessage` method.
//! The chat id is fixed at construction; every message goes to that chat.
use crate::domain::errors::{BotError, BotResult};
use crate::domain::ports::Notifier;
use crate::infrastructure::providers::build_http_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct TelegramReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

pub struct TelegramNotifier {
    http_client: Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a new notifier posting to `chat_id` through `api_url`
    pub fn new(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> BotResult<Self> {
        Ok(Self {
            http_client: build_http_client()?,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> BotResult<()> {
        debug!("Sending Telegram message to chat {}", self.chat_id);

        let response = self
            .http_client
            .post(self.send_message_url())
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| {
                // The URL carries the bot token, keep it out of the logs
                let e = e.without_url();
                if e.is_timeout() {
                    BotError::Notification(format!("Connection timeout after 30 seconds: {}", e))
                } else if e.is_connect() {
                    BotError::Notification(format!("Connection failed: {}", e))
                } else {
                    BotError::Notification(format!("Network error: {}", e))
                }
            })?;

        let status = response.status();
        let reply = response.json::<TelegramReply>().await.ok();

        match reply {
            Some(TelegramReply { ok: true, .. }) if status.is_success() => {
                info!("Message delivered to chat {}", self.chat_id);
                Ok(())
            }
            Some(TelegramReply { description, .. }) => Err(BotError::Notification(format!(
                "HTTP {}: {}",
                status.as_u16(),
                description.unwrap_or_else(|| "Telegram rejected the message".to_string())
            ))),
            None => Err(BotError::Notification(format!(
                "HTTP {}: unreadable Telegram reply",
                status.as_u16()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "telegram"
    }
}
