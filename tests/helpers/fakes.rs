use async_trait::async_trait;
use homework_bot::domain::entities::PollCursor;
use homework_bot::domain::errors::{BotError, BotResult};
use homework_bot::domain::ports::{Clock, Notifier, StatusApi};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Status API that replays a fixed script of responses and records every
/// cursor it was asked for.
#[derive(Default)]
pub struct ScriptedStatusApi {
    responses: Mutex<VecDeque<BotResult<Value>>>,
    requested: Mutex<Vec<u64>>,
}

impl ScriptedStatusApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_payload(&self, payload: Value) {
        self.responses.lock().unwrap().push_back(Ok(payload));
    }

    pub fn push_error(&self, error: BotError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requested_cursors(&self) -> Vec<u64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusApi for ScriptedStatusApi {
    async fn fetch(&self, from_date: PollCursor) -> BotResult<Value> {
        self.requested.lock().unwrap().push(from_date.value());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(BotError::HttpStatus { status: 503 }))
    }
}

/// Notifier that keeps every message it was asked to send.
/// With `fail_on` set, the send with that index (0-based) fails.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    attempts: Mutex<usize>,
    fail_on: Option<usize>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(index: usize) -> Self {
        Self {
            fail_on: Some(index),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> BotResult<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts - 1
        };

        if self.fail_on == Some(attempt) {
            return Err(BotError::Notification(format!(
                "Mock delivery failure for attempt {}",
                attempt
            )));
        }

        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

/// Clock frozen at a fixed timestamp whose sleeps return immediately and are
/// remembered
#[derive(Default)]
pub struct ManualClock {
    now: u64,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(now: u64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now_timestamp(&self) -> u64 {
        self.now
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
