//! Core domain types for the Replog exercise tracker.
//!
//! A `User` owns an ordered log of `Exercise` entries. The log is embedded
//! in the user document and persisted atomically with it; exercises have no
//! independent lifecycle.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single exercise log entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub description: String,
    /// Duration in minutes; non-negative by construction
    pub duration: u32,
    /// Calendar date the exercise was performed
    pub date: NaiveDate,
}

impl Exercise {
    /// Create an exercise entry. A missing date defaults to today (UTC).
    pub fn new(description: impl Into<String>, duration: u32, date: Option<NaiveDate>) -> Self {
        Self {
            description: description.into(),
            duration,
            date: date.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

/// A tracked user with their embedded exercise log
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub log: Vec<Exercise>,
}

impl User {
    /// Create a user with a fresh id and an empty log
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            log: Vec::new(),
        }
    }

    /// Current length of the exercise log
    pub fn count(&self) -> usize {
        self.log.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_empty_log() {
        let user = User::new("ada");
        assert_eq!(user.name, "ada");
        assert!(user.log.is_empty());
        assert_eq!(user.count(), 0);
    }

    #[test]
    fn test_exercise_defaults_date_to_today() {
        let exercise = Exercise::new("rowing", 20, None);
        assert_eq!(exercise.date, Utc::now().date_naive());
    }

    #[test]
    fn test_exercise_keeps_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let exercise = Exercise::new("rowing", 20, Some(date));
        assert_eq!(exercise.date, date);
    }

    #[test]
    fn test_user_json_roundtrip() {
        let mut user = User::new("ada");
        user.log.push(Exercise::new("swim", 45, None));

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, user.id);
        assert_eq!(parsed.log, user.log);
    }
}
