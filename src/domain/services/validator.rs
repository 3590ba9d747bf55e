use crate::domain::entities::{HomeworkRecord, HomeworkStatus, ValidatedResponse};
use crate::domain::errors::{BotError, BotResult};
use serde_json::Value;

const HOMEWORKS: &str = "homeworks";
const CURRENT_DATE: &str = "current_date";
const HOMEWORK_NAME: &str = "homework_name";
const STATUS: &str = "status";

/// Check a raw API payload and turn it into a [`ValidatedResponse`].
///
/// Checks run in a fixed order: `homeworks` present, `current_date` present,
/// then for each entry `homework_name` present, `status` present and status
/// known. The first violation rejects the whole payload.
pub fn validate_response(payload: &Value) -> BotResult<ValidatedResponse> {
    let homeworks = payload
        .get(HOMEWORKS)
        .ok_or(BotError::MissingField(HOMEWORKS))?;
    let current_date = payload
        .get(CURRENT_DATE)
        .ok_or(BotError::MissingField(CURRENT_DATE))?;

    let entries = homeworks.as_array().ok_or_else(|| BotError::InvalidField {
        field: HOMEWORKS,
        reason: format!("expected an array, got {}", kind_of(homeworks)),
    })?;

    let homeworks = entries
        .iter()
        .map(validate_homework)
        .collect::<BotResult<Vec<_>>>()?;

    let current_date = current_date.as_u64().ok_or_else(|| BotError::InvalidField {
        field: CURRENT_DATE,
        reason: format!("expected a non-negative integer, got {}", current_date),
    })?;

    Ok(ValidatedResponse {
        homeworks,
        current_date,
    })
}

fn validate_homework(entry: &Value) -> BotResult<HomeworkRecord> {
    let object = entry.as_object().ok_or_else(|| BotError::InvalidField {
        field: HOMEWORKS,
        reason: format!("expected entries to be objects, got {}", kind_of(entry)),
    })?;

    let name = object
        .get(HOMEWORK_NAME)
        .ok_or(BotError::MissingField(HOMEWORK_NAME))?;
    let status = object.get(STATUS).ok_or(BotError::MissingField(STATUS))?;

    let status = match status.as_str() {
        Some(raw) => raw
            .parse::<HomeworkStatus>()
            .map_err(BotError::UnknownStatus)?,
        // Non-string values are still outside the known vocabulary
        None => return Err(BotError::UnknownStatus(status.to_string())),
    };

    let name = name.as_str().ok_or_else(|| BotError::InvalidField {
        field: HOMEWORK_NAME,
        reason: format!("expected a string, got {}", kind_of(name)),
    })?;

    Ok(HomeworkRecord::new(name, status))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
