use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Fixed reviewer verdict shown to the user for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена, в ней нашлись ошибки.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(other.to_string()),
        }
    }
}

/// One entry of the `homeworks` list after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    pub fn new(homework_name: impl Into<String>, status: HomeworkStatus) -> Self {
        Self {
            homework_name: homework_name.into(),
            status,
        }
    }
}

/// Payload that passed every check of the validator.
/// Entries keep the order the API reported them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResponse {
    pub homeworks: Vec<HomeworkRecord>,
    pub current_date: u64,
}

/// Lower bound (seconds since epoch) for the next `from_date` query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(u64);

impl PollCursor {
    pub fn new(timestamp: u64) -> Self {
        Self(timestamp)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Move to the server-reported date of the last accepted response
    pub fn advance_to(&mut self, current_date: u64) {
        self.0 = current_date;
    }
}

impl fmt::Display for PollCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
