//! Application-wide constants.

/// Display names of the fixed household roster, in creation order.
/// Handles are derived by lowercasing these names.
pub const ROSTER: [&str; 4] = ["Andrea", "Sasha", "Matti", "Vlad"];

/// Hour of day (pinned timezone) at which the daily reminder sweep fires.
pub const DEFAULT_REMINDER_HOUR: u32 = 20;

/// Members who logged fewer distinct categories than this today get a
/// reminder.
pub const DEFAULT_REMINDER_THRESHOLD: usize = 3;
