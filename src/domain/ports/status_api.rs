use crate::domain::entities::PollCursor;
use crate::domain::errors::BotResult;
use async_trait::async_trait;

/// Source of homework status updates.
///
/// Returns the raw JSON body; shape checks belong to the validator.
#[async_trait]
pub trait StatusApi: Send + Sync {
    async fn fetch(&self, from_date: PollCursor) -> BotResult<serde_json::Value>;
}
