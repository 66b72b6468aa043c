//! SQLite storage implementation for badges.

mod model;
mod repository;

pub use model::BadgeDB;
pub use repository::BadgeRepository;
