//! Streak domain models and the transition rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-user consecutive-day counters.
///
/// This is authoritative incremental state, not a cache: it is advanced one
/// activity day at a time and never recomputed from the activity history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub user_id: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_activity_date: Option<NaiveDate>,
}

impl Streak {
    /// The state a user starts with before any activity is logged.
    pub fn zeroed(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            current_streak: 0,
            longest_streak: 0,
            last_activity_date: None,
        }
    }

    /// Applies one recorded activity day to the previous state and returns
    /// the next state.
    ///
    /// The rule is a forward-only rolling counter keyed off
    /// `last_activity_date` alone:
    /// - first counted day starts the streak at 1,
    /// - the same day again changes nothing,
    /// - the day immediately after extends the run,
    /// - anything else (a gap forward, or a backfill to a non-adjacent
    ///   earlier day) restarts the run at 1.
    ///
    /// `longest_streak` never decreases.
    pub fn advance(user_id: &str, previous: Option<&Streak>, date: NaiveDate) -> StreakUpdate {
        let prev = match previous {
            Some(p) => p,
            None => {
                return StreakUpdate {
                    streak: Streak {
                        user_id: user_id.to_string(),
                        current_streak: 1,
                        longest_streak: 1,
                        last_activity_date: Some(date),
                    },
                    transition: StreakTransition::Started,
                }
            }
        };

        match prev.last_activity_date {
            None => StreakUpdate {
                streak: Streak {
                    user_id: user_id.to_string(),
                    current_streak: 1,
                    longest_streak: prev.longest_streak.max(1),
                    last_activity_date: Some(date),
                },
                transition: StreakTransition::Started,
            },
            Some(last) if last == date => StreakUpdate {
                streak: prev.clone(),
                transition: StreakTransition::SameDay,
            },
            Some(last) if date.pred_opt() == Some(last) => {
                let current = prev.current_streak + 1;
                StreakUpdate {
                    streak: Streak {
                        user_id: user_id.to_string(),
                        current_streak: current,
                        longest_streak: prev.longest_streak.max(current),
                        last_activity_date: Some(date),
                    },
                    transition: StreakTransition::Extended,
                }
            }
            Some(_) => StreakUpdate {
                streak: Streak {
                    user_id: user_id.to_string(),
                    current_streak: 1,
                    longest_streak: prev.longest_streak.max(1),
                    last_activity_date: Some(date),
                },
                transition: StreakTransition::Reset,
            },
        }
    }
}

/// How a recorded day moved the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTransition {
    /// First counted day for this user.
    Started,
    /// The day was already counted; nothing changed.
    SameDay,
    /// Consecutive day, run grew by one.
    Extended,
    /// Non-adjacent day, run restarted at one.
    Reset,
}

/// Result of applying an activity day to a streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakUpdate {
    pub streak: Streak,
    pub transition: StreakTransition,
}

impl StreakUpdate {
    /// True unless the day had already been counted.
    pub fn changed(&self) -> bool {
        self.transition != StreakTransition::SameDay
    }
}
