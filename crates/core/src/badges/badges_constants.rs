//! Badge type identifiers.

pub const BADGE_WEEK_WARRIOR: &str = "week_warrior";
pub const BADGE_ALL_ROUNDER: &str = "all_rounder";
pub const BADGE_HELPER_HERO: &str = "helper_hero";
pub const BADGE_CREATIVE_GENIUS: &str = "creative_genius";
pub const BADGE_HOUSEHOLD_HERO: &str = "household_hero";
pub const BADGE_HEALTH_CHAMPION: &str = "health_champion";
pub const BADGE_LEARNING_LEGEND: &str = "learning_legend";
pub const BADGE_MONTH_MASTER: &str = "month_master";
pub const BADGE_PERFECTIONIST: &str = "perfectionist";
pub const BADGE_FAMILY_CHAMPION: &str = "family_champion";

/// Streak length Week Warrior requires. Matched exactly, not as a floor.
pub const WEEK_WARRIOR_STREAK: i32 = 7;
