use crate::domain::errors::BotResult;
use async_trait::async_trait;

/// Trait for message delivery to the single configured recipient
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a plain-text message
    /// Returns Ok(()) if the channel accepted it
    async fn send(&self, text: &str) -> BotResult<()>;

    /// Get the provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}
