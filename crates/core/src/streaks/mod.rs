//! Streaks module - domain models, services, and traits.

mod streaks_model;
mod streaks_service;
mod streaks_traits;



// Re-export the public interface
pub use streaks_model::{Streak, StreakTransition, StreakUpdate};
pub use streaks_service::StreakService;
pub use streaks_traits::{StreakRepositoryTrait, StreakServiceTrait};
