use crate::domain::entities::PollCursor;
use crate::domain::errors::{BotError, BotResult};
use crate::domain::ports::StatusApi;
use crate::infrastructure::providers::build_http_client;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

/// HTTP client for the homework status endpoint
pub struct PracticumClient {
    http_client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a new client for `endpoint` authenticated with `token`
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> BotResult<Self> {
        Ok(Self {
            http_client: build_http_client()?,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    /// Request every status change since `from_date`.
    ///
    /// Fails on a transport error, on any status other than 200, and on a body
    /// that is not JSON. Nothing is retried here.
    async fn fetch(&self, from_date: PollCursor) -> BotResult<serde_json::Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .http_client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date.value())])
            .send()
            .await
            .map_err(|e| {
                error!("Ошибка при запросе к основному API: {}", e);
                BotError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(
                "Ошибка при запросе к основному API: status_code {} != 200",
                status.as_u16()
            );
            return Err(BotError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("Ошибка при запросе к основному API: {}", e);
            BotError::Transport(e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!("Ошибка парсинга JSON: {}", e);
            BotError::PayloadParse(e)
        })
    }
}
