//! Badges module - models, catalog, rules, and the evaluator service.

mod badges_catalog;
mod badges_constants;
mod badges_model;
mod badges_rules;
mod badges_service;
mod badges_traits;

#[cfg(test)]
mod badges_service_tests;

pub use badges_catalog::{catalog_entry, BadgeSpec, CATALOG};
pub use badges_constants::*;
pub use badges_model::{Badge, BadgeContext};
pub use badges_rules::{default_rules, BadgeRule};
pub use badges_service::BadgeService;
pub use badges_traits::{BadgeRepositoryTrait, BadgeServiceTrait};
