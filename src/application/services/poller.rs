use crate::domain::entities::PollCursor;
use crate::domain::errors::BotResult;
use crate::domain::ports::{Clock, Notifier, StatusApi};
use crate::domain::services::{validate_response, StatusTracker};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Summary of one successful poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Entries in the validated batch
    pub fetched: usize,
    /// Messages handed to the notifier
    pub notified: usize,
    /// Cursor that the next cycle will query from
    pub cursor: PollCursor,
}

/// Poll-detect-notify loop for one user.
///
/// Owns the status memory and the cursor; nothing else touches them.
pub struct HomeworkPoller {
    api: Arc<dyn StatusApi>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    tracker: StatusTracker,
    cursor: PollCursor,
    retry_interval: Duration,
}

impl HomeworkPoller {
    /// Create a poller starting at `from_date`, or at the clock's current
    /// time when none is given so that old reviews are not replayed.
    pub fn new(
        api: Arc<dyn StatusApi>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        from_date: Option<u64>,
        retry_interval: Duration,
    ) -> Self {
        let cursor = PollCursor::new(from_date.unwrap_or_else(|| clock.now_timestamp()));

        Self {
            api,
            notifier,
            clock,
            tracker: StatusTracker::new(),
            cursor,
            retry_interval,
        }
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    pub fn tracker(&self) -> &StatusTracker {
        &self.tracker
    }

    /// Run forever. Only process termination stops the loop.
    pub async fn run(mut self) {
        info!(
            "Starting homework poller (notifier: {}, interval: {}s, from_date: {})",
            self.notifier.provider_name(),
            self.retry_interval.as_secs(),
            self.cursor
        );
        loop {
            self.tick().await;
        }
    }

    /// One full iteration: a cycle followed by the fixed sleep.
    /// Failures are logged here and never escape.
    pub async fn tick(&mut self) {
        match self.run_cycle().await {
            Ok(report) => {
                info!(
                    "Poll cycle finished: {} homeworks, {} notifications, next from_date {}",
                    report.fetched, report.notified, report.cursor
                );
            }
            Err(e) => {
                error!("Сбой в работе программы: {}", e);
            }
        }

        self.clock.sleep(self.retry_interval).await;
    }

    /// Fetch, validate, diff and notify once.
    ///
    /// The cursor moves to the server's `current_date` as soon as the payload
    /// is validated. A fetch or validation failure leaves it untouched so the
    /// same window is requested again. A failed send stops the remaining
    /// notifications of the batch; memory already updated stays updated.
    pub async fn run_cycle(&mut self) -> BotResult<CycleReport> {
        let payload = self.api.fetch(self.cursor).await?;
        let response = validate_response(&payload)?;

        self.cursor.advance_to(response.current_date);
        debug!("Cursor advanced to {}", self.cursor);

        let mut notified = 0;
        for homework in &response.homeworks {
            match self.tracker.observe(&homework.homework_name, homework.status) {
                Some(message) => {
                    self.notifier.send(&message).await?;
                    notified += 1;
                }
                None => {
                    debug!(
                        "Status of \"{}\" unchanged ({})",
                        homework.homework_name, homework.status
                    );
                }
            }
        }

        Ok(CycleReport {
            fetched: response.homeworks.len(),
            notified,
            cursor: self.cursor,
        })
    }
}
