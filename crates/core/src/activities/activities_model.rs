//! Activity domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::activities_constants::DATE_FORMAT;
use super::activities_errors::ActivityError;
use crate::{errors::ValidationError, Error, Result};

/// The six fixed activity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Household,
    Health,
    Creative,
    Learning,
    Helping,
    Play,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Household,
        Category::Health,
        Category::Creative,
        Category::Learning,
        Category::Helping,
        Category::Play,
    ];

    /// Stable identifier stored in the database and used on the wire.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Category::Household => "household",
            Category::Health => "health",
            Category::Creative => "creative",
            Category::Learning => "learning",
            Category::Helping => "helping",
            Category::Play => "play",
        }
    }

    /// Human-readable name shown to household members.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Household => "Household Contributions",
            Category::Health => "Health & Outdoors",
            Category::Creative => "Creative Expression",
            Category::Learning => "Learning & Growth",
            Category::Helping => "Helping Others",
            Category::Play => "Play & Fun",
        }
    }
}

impl FromStr for Category {
    type Err = ActivityError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_db_str() == value)
            .ok_or_else(|| ActivityError::InvalidCategory(value.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_db_str())
    }
}

/// Parses a calendar day in canonical zero-padded ISO form.
///
/// Stored dates are compared as strings for range scans, so only the
/// canonical form is accepted; "2024-3-1" is rejected even though it names
/// a valid day.
pub fn parse_activity_date(value: &str) -> Result<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ActivityError::InvalidDate(value.to_string()))?;
    if parsed.format(DATE_FORMAT).to_string() != value {
        return Err(ActivityError::InvalidDate(value.to_string()).into());
    }
    Ok(parsed)
}

/// Domain model representing a logged activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    pub category: Category,
    pub description: String,
    /// Calendar day the activity belongs to, with no time component.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub category: String,
    pub description: String,
    /// ISO calendar day, e.g. "2024-03-10".
    pub date: String,
}

impl NewActivity {
    /// Validates the input and returns the parsed category and date.
    pub fn validate(&self) -> Result<(Category, NaiveDate)> {
        let category = Category::from_str(&self.category)?;
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Description cannot be empty".to_string(),
            )));
        }
        let date = parse_activity_date(&self.date)?;
        Ok((category, date))
    }
}

/// Input model for updating an existing activity. Unset fields keep their
/// stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl ActivityUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Activity ID is required for updates".to_string(),
            )));
        }
        if let Some(description) = &self.description {
            if description.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Description cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of an activity write.
///
/// The activity write itself is atomic. Streak advancement and badge
/// evaluation run after it; when one of those follow-ups fails, the write
/// still stands and the failure is reported here instead of failing the
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMutationResult {
    pub activity: Activity,
    /// Follow-up failures; empty when streaks and badges both updated.
    #[serde(default)]
    pub warnings: Vec<String>,
}
