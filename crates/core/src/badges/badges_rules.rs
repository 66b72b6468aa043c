//! The badge rule registry.

use super::badges_constants::{BADGE_ALL_ROUNDER, BADGE_WEEK_WARRIOR, WEEK_WARRIOR_STREAK};
use super::badges_model::BadgeContext;
use crate::activities::Category;

/// An awardable badge rule: a type id plus two predicates over the day
/// snapshot.
///
/// `already_earned` guards re-awarding. Most types hold at most one badge
/// ever; All-Rounder holds at most one per calendar day.
#[derive(Clone, Copy)]
pub struct BadgeRule {
    pub badge_type: &'static str,
    pub is_satisfied: fn(&BadgeContext) -> bool,
    pub already_earned: fn(&BadgeContext) -> bool,
}

impl BadgeRule {
    /// True when the rule is satisfied and the badge has not been earned
    /// under this rule's scope yet.
    pub fn should_award(&self, ctx: &BadgeContext) -> bool {
        !(self.already_earned)(ctx) && (self.is_satisfied)(ctx)
    }
}

fn all_rounder_satisfied(ctx: &BadgeContext) -> bool {
    ctx.categories_today.len() == Category::ALL.len()
}

fn all_rounder_already_earned(ctx: &BadgeContext) -> bool {
    ctx.holds_on_date(BADGE_ALL_ROUNDER)
}

fn week_warrior_satisfied(ctx: &BadgeContext) -> bool {
    // Fires the day the run reaches seven, not on later days of a longer run
    ctx.streak.current_streak == WEEK_WARRIOR_STREAK
}

fn week_warrior_already_earned(ctx: &BadgeContext) -> bool {
    ctx.holds(BADGE_WEEK_WARRIOR)
}

/// The rules with active evaluators.
///
/// The catalog lists more designed types; each gains an entry here when its
/// rule is implemented.
pub fn default_rules() -> Vec<BadgeRule> {
    vec![
        BadgeRule {
            badge_type: BADGE_ALL_ROUNDER,
            is_satisfied: all_rounder_satisfied,
            already_earned: all_rounder_already_earned,
        },
        BadgeRule {
            badge_type: BADGE_WEEK_WARRIOR,
            is_satisfied: week_warrior_satisfied,
            already_earned: week_warrior_already_earned,
        },
    ]
}
