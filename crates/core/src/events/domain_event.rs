//! Domain event types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. Runtime adapters
/// translate them into platform-specific actions (server-sent events to
/// connected clients, logging, etc.).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// An activity was recorded.
    ActivityLogged {
        activity_id: String,
        user_id: String,
        date: NaiveDate,
    },

    /// An existing activity was changed.
    ActivityUpdated {
        activity_id: String,
        user_id: String,
        date: NaiveDate,
    },

    /// An activity was removed.
    ActivityDeleted {
        activity_id: String,
        user_id: String,
        date: NaiveDate,
    },

    /// A user's streak counters changed.
    StreakUpdated {
        user_id: String,
        current_streak: i32,
        longest_streak: i32,
    },

    /// A user earned a badge.
    BadgeEarned { user_id: String, badge_type: String },
}

impl DomainEvent {
    /// Creates an ActivityLogged event.
    pub fn activity_logged(activity_id: String, user_id: String, date: NaiveDate) -> Self {
        Self::ActivityLogged {
            activity_id,
            user_id,
            date,
        }
    }

    /// Creates an ActivityUpdated event.
    pub fn activity_updated(activity_id: String, user_id: String, date: NaiveDate) -> Self {
        Self::ActivityUpdated {
            activity_id,
            user_id,
            date,
        }
    }

    /// Creates an ActivityDeleted event.
    pub fn activity_deleted(activity_id: String, user_id: String, date: NaiveDate) -> Self {
        Self::ActivityDeleted {
            activity_id,
            user_id,
            date,
        }
    }

    /// Creates a StreakUpdated event.
    pub fn streak_updated(user_id: String, current_streak: i32, longest_streak: i32) -> Self {
        Self::StreakUpdated {
            user_id,
            current_streak,
            longest_streak,
        }
    }

    /// Creates a BadgeEarned event.
    pub fn badge_earned(user_id: String, badge_type: String) -> Self {
        Self::BadgeEarned {
            user_id,
            badge_type,
        }
    }
}
