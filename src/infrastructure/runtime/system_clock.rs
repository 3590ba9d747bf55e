use crate::domain::ports::Clock;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

/// Clock backed by the system time and the tokio timer
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_timestamp(&self) -> u64 {
        // Pre-epoch system time clamps to zero
        u64::try_from(Utc::now().timestamp()).unwrap_or(0)
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
