//! SQLite storage implementation for streaks.

mod model;
mod repository;

pub use model::StreakDB;
pub use repository::StreakRepository;
