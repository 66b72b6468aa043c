//! Declarative achievement catalog.
//!
//! Every badge type the product designed, whether or not an evaluator rule
//! exists for it yet. Clients render this directly; the evaluator only
//! awards types whose rules are registered.

use serde::Serialize;

use super::badges_constants::{
    BADGE_ALL_ROUNDER, BADGE_CREATIVE_GENIUS, BADGE_FAMILY_CHAMPION, BADGE_HEALTH_CHAMPION,
    BADGE_HELPER_HERO, BADGE_HOUSEHOLD_HERO, BADGE_LEARNING_LEGEND, BADGE_MONTH_MASTER,
    BADGE_PERFECTIONIST, BADGE_WEEK_WARRIOR,
};

/// Display metadata for a designed badge type.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSpec {
    pub badge_type: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
    pub group: &'static str,
    /// Whether an evaluator rule awards this type.
    pub implemented: bool,
}

/// Every designed badge type, in gallery order.
pub const CATALOG: [BadgeSpec; 10] = [
    BadgeSpec {
        badge_type: BADGE_WEEK_WARRIOR,
        title: "Week Warrior",
        description: "Complete activities for 7 consecutive days",
        difficulty: "Medium",
        group: "Streaks",
        implemented: true,
    },
    BadgeSpec {
        badge_type: BADGE_ALL_ROUNDER,
        title: "All-Rounder",
        description: "Complete all 6 categories in a single day",
        difficulty: "Hard",
        group: "Daily",
        implemented: true,
    },
    BadgeSpec {
        badge_type: BADGE_HELPER_HERO,
        title: "Helper Hero",
        description: "Complete 5 helping activities",
        difficulty: "Easy",
        group: "Category Focus",
        implemented: false,
    },
    BadgeSpec {
        badge_type: BADGE_CREATIVE_GENIUS,
        title: "Creative Genius",
        description: "Creative activities for 5 consecutive days",
        difficulty: "Medium",
        group: "Streaks",
        implemented: false,
    },
    BadgeSpec {
        badge_type: BADGE_HOUSEHOLD_HERO,
        title: "Household Hero",
        description: "Complete 10 household activities",
        difficulty: "Easy",
        group: "Category Focus",
        implemented: false,
    },
    BadgeSpec {
        badge_type: BADGE_HEALTH_CHAMPION,
        title: "Health Champion",
        description: "Health activities for 7 consecutive days",
        difficulty: "Medium",
        group: "Streaks",
        implemented: false,
    },
    BadgeSpec {
        badge_type: BADGE_LEARNING_LEGEND,
        title: "Learning Legend",
        description: "Complete 15 learning activities",
        difficulty: "Medium",
        group: "Category Focus",
        implemented: false,
    },
    BadgeSpec {
        badge_type: BADGE_MONTH_MASTER,
        title: "Month Master",
        description: "Complete activities for 30 days",
        difficulty: "Very Hard",
        group: "Streaks",
        implemented: false,
    },
    BadgeSpec {
        badge_type: BADGE_PERFECTIONIST,
        title: "Perfectionist",
        description: "All 6 categories for 3 consecutive days",
        difficulty: "Very Hard",
        group: "Daily",
        implemented: false,
    },
    BadgeSpec {
        badge_type: BADGE_FAMILY_CHAMPION,
        title: "Family Champion",
        description: "Most activities in the family for a week",
        difficulty: "Hard",
        group: "Competition",
        implemented: false,
    },
];

/// Looks up a catalog entry by type id.
pub fn catalog_entry(badge_type: &str) -> Option<&'static BadgeSpec> {
    CATALOG.iter().find(|spec| spec.badge_type == badge_type)
}
