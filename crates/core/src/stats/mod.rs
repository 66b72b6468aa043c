//! Stats module - read-only derived views over the activity log.

mod stats_model;
mod stats_service;
mod stats_traits;


pub use stats_model::{UserStats, WeekGridEntry};
pub use stats_service::StatsService;
pub use stats_traits::StatsServiceTrait;
