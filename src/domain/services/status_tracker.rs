use crate::domain::entities::HomeworkStatus;
use std::collections::HashMap;

/// Remembers the last status seen for every homework and decides when the
/// user has to be told about it.
#[derive(Debug, Default)]
pub struct StatusTracker {
    memory: HashMap<String, HomeworkStatus>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `status` for `name`.
    ///
    /// Returns the notification text when the status is new or differs from
    /// the remembered one, `None` when nothing changed. A name seen for the
    /// first time always produces a message.
    pub fn observe(&mut self, name: &str, status: HomeworkStatus) -> Option<String> {
        if self.memory.get(name) == Some(&status) {
            return None;
        }

        self.memory.insert(name.to_string(), status);

        Some(format!(
            "Изменился статус проверки работы \"{}\". {}",
            name,
            status.verdict()
        ))
    }

    pub fn last_status(&self, name: &str) -> Option<HomeworkStatus> {
        self.memory.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }
}
