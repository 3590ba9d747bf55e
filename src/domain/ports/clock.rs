use async_trait::async_trait;
use std::time::Duration;

/// Source of wall-clock time and the pause between poll cycles
#[async_trait]
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch
    fn now_timestamp(&self) -> u64;

    async fn sleep(&self, duration: Duration);
}
