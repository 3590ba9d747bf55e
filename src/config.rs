use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;

/// Secret keys and the older names they are also read from
const PRACTICUM_TOKEN_KEYS: &[&str] = &["PRACTICUM_TOKEN"];
const TELEGRAM_TOKEN_KEYS: &[&str] = &["TELEGRAM_TOKEN", "TOKEN"];
const TELEGRAM_CHAT_ID_KEYS: &[&str] = &["TELEGRAM_CHAT_ID", "ACCOUNT_SID"];

#[derive(Clone, Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub retry_time: Duration,
    /// Initial `from_date`; `None` means start from the current time
    pub from_date: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Secrets are not enforced here: a missing one surfaces as an
        // authentication failure on every cycle instead of stopping the process.
        let secret = |keys: &[&str]| {
            let value = keys
                .iter()
                .filter_map(|key| lookup(*key))
                .find(|v| !v.trim().is_empty());
            if value.is_none() {
                warn!("{} environment variable not set", keys[0]);
            }
            value.unwrap_or_default()
        };

        let practicum_token = secret(PRACTICUM_TOKEN_KEYS);
        let telegram_token = secret(TELEGRAM_TOKEN_KEYS);
        let telegram_chat_id = secret(TELEGRAM_CHAT_ID_KEYS);

        let practicum_endpoint = lookup("PRACTICUM_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string());

        let telegram_api_url =
            lookup("TELEGRAM_API_URL").unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        let retry_secs = match lookup("RETRY_TIME") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("RETRY_TIME"))?,
            None => DEFAULT_RETRY_TIME_SECS,
        };

        let from_date = lookup("FROM_DATE")
            .map(|raw| raw.parse::<u64>().map_err(|_| ConfigError::Invalid("FROM_DATE")))
            .transpose()?;

        Ok(Config {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint,
            telegram_api_url,
            retry_time: Duration::from_secs(retry_secs),
            from_date,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable has an invalid value")]
    Invalid(&'static str),
}
