//! Background scheduler for the daily reminder sweep.
//!
//! Recomputes the next occurrence of the configured local hour after every
//! run instead of trusting a fixed interval, so DST transitions in the
//! pinned timezone cannot drift the fire time.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::events::{ServerEvent, REMINDER};
use crate::main_lib::AppState;
use hearth_core::utils::time_utils::{next_occurrence_of_hour, today_in_tz};
use hearth_core::Result;

/// Outcome of one reminder sweep.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepSummary {
    pub date: NaiveDate,
    pub users_checked: usize,
    pub reminders_sent: usize,
}

/// Starts the daily reminder scheduler.
pub fn start_reminder_scheduler(state: Arc<AppState>) {
    if !state.reminder.enabled {
        info!("Reminder scheduler disabled via configuration");
        return;
    }

    tokio::spawn(async move {
        info!(
            "Reminder scheduler started (daily at {:02}:00 {})",
            state.reminder.hour, state.timezone
        );

        loop {
            let now = Utc::now();
            let next = next_occurrence_of_hour(now, state.timezone, state.reminder.hour);
            debug!("Next reminder sweep scheduled for {}", next);
            let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
            tokio::time::sleep(wait).await;

            match run_reminder_sweep(&state).await {
                Ok(summary) => info!(
                    "Reminder sweep for {} completed: {} of {} members reminded",
                    summary.date, summary.reminders_sent, summary.users_checked
                ),
                Err(e) => warn!("Reminder sweep failed: {}", e),
            }
        }
    });
}

/// Runs a single reminder sweep over the roster.
///
/// Members below the category threshold for today get a push on the event
/// bus; delivery is fire-and-forget.
pub async fn run_reminder_sweep(state: &Arc<AppState>) -> Result<SweepSummary> {
    let today = today_in_tz(state.timezone);
    let users = state.user_service.get_all_users()?;
    let users_checked = users.len();
    let mut reminders_sent = 0;

    for user in users {
        let completed = state.stats_service.distinct_categories_on(&user.id, today)?;
        if completed >= state.reminder.threshold {
            continue;
        }
        let message = reminder_message(&user.display_name, completed);
        debug!("Reminding {} ({} categories today)", user.handle, completed);
        state.event_bus.publish(ServerEvent::with_payload(
            REMINDER,
            serde_json::json!({
                "userHandle": user.handle,
                "message": message,
                "categoriesCompleted": completed,
            }),
        ));
        reminders_sent += 1;
    }

    Ok(SweepSummary {
        date: today,
        users_checked,
        reminders_sent,
    })
}

fn reminder_message(name: &str, completed: usize) -> String {
    match completed {
        0 => format!(
            "{}, you haven't logged any activities today. Let's get started!",
            name
        ),
        1 => format!(
            "Nice start, {}! Two more categories to hit today's goal.",
            name
        ),
        _ => format!("Almost there, {} — one more category to go!", name),
    }
}
