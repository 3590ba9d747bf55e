use thiserror::Error;

/// Everything that can go wrong inside one poll cycle, plus HTTP client
/// construction at startup.
///
/// The loop treats every cycle variant the same way (log, sleep, retry); the
/// variants exist so that the log line says which stage failed.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Не удалось создать HTTP-клиент: {0}")]
    ClientInit(#[source] reqwest::Error),

    #[error("Ошибка при запросе к основному API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Ошибка при запросе к основному API: status_code {status} != 200")]
    HttpStatus { status: u16 },

    #[error("Ошибка парсинга JSON: {0}")]
    PayloadParse(#[source] serde_json::Error),

    #[error("Отсутствует обязательное поле \"{0}\"")]
    MissingField(&'static str),

    #[error("Некорректное поле \"{field}\": {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Неизвестный статус \"{0}\"")]
    UnknownStatus(String),

    #[error("Ошибка отправки сообщения: {0}")]
    Notification(String),
}

pub type BotResult<T> = Result<T, BotError>;
