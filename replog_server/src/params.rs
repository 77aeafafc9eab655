//! Request parameter coercion.
//!
//! Bodies arrive either as urlencoded forms or as JSON, so every field is
//! taken in loosely and coerced here: `duration` accepts a number or a
//! decimal string, `date` is an optional `YYYY-MM-DD` string that defaults
//! to today. Missing or uncoercible required fields surface as validation
//! errors, which the HTTP layer turns into 400s.

use chrono::NaiveDate;
use replog_core::{Error, Exercise, Result};
use serde::Deserialize;

/// Body of `POST /api/exercise/new-user`
#[derive(Debug, Clone, Deserialize)]
pub struct NewUserParams {
    #[serde(default)]
    pub username: Option<String>,
}

impl NewUserParams {
    /// Extract the username, requiring it to be present and non-empty
    pub fn into_username(self) -> Result<String> {
        match self.username {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(Error::missing_field("username")),
        }
    }
}

/// A duration as it appears on the wire: a JSON number or a decimal string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Number(i64),
    Text(String),
}

impl RawDuration {
    /// Coerce to whole non-negative minutes
    fn into_minutes(self) -> Result<u32> {
        let value = match self {
            RawDuration::Number(n) => n,
            RawDuration::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::Validation(format!("Invalid duration: `{}`.", s)))?,
        };
        u32::try_from(value)
            .map_err(|_| Error::Validation(format!("Invalid duration: `{}`.", value)))
    }
}

/// Body of `POST /api/exercise/add`
#[derive(Debug, Clone, Deserialize)]
pub struct AddExerciseParams {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<RawDuration>,
    #[serde(default)]
    pub date: Option<String>,
}

impl AddExerciseParams {
    /// Validate and coerce into the target user id and the exercise to append
    ///
    /// The first failing field wins.
    pub fn into_parts(self) -> Result<(String, Exercise)> {
        let user_id = match self.user_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(Error::missing_field("userId")),
        };

        let description = match self.description {
            Some(d) if !d.trim().is_empty() => d,
            _ => return Err(Error::missing_field("description")),
        };

        let duration = self
            .duration
            .ok_or_else(|| Error::missing_field("duration"))?
            .into_minutes()?;

        let date = parse_date(self.date.as_deref())?;

        Ok((user_id, Exercise::new(description, duration, date)))
    }
}

/// Parse an optional `YYYY-MM-DD` date; absent or empty means "today"
fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| Error::Validation(format!("Invalid date: `{}`.", s))),
    }
}
