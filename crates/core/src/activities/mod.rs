//! Activities module - domain models, services, and traits.

mod activities_constants;
mod activities_errors;
mod activities_model;
mod activities_service;
mod activities_traits;

#[cfg(test)]
mod activities_model_tests;


pub use activities_constants::*;
pub use activities_errors::ActivityError;
pub use activities_model::{
    parse_activity_date, Activity, ActivityMutationResult, ActivityUpdate, Category, NewActivity,
};
pub use activities_service::ActivityService;
pub use activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
