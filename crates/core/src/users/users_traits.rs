//! User repository and service traits.
//!
//! These traits define the contract for user operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Creates a new user.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Retrieves a user by its ID.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Retrieves a user by its handle.
    fn get_by_handle(&self, handle: &str) -> Result<User>;

    /// Lists all users in creation order.
    fn list(&self) -> Result<Vec<User>>;
}

/// Trait defining the contract for User service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Creates every missing roster member. Existing handles are left
    /// untouched, so calling this on every startup is safe.
    async fn ensure_roster(&self) -> Result<Vec<User>>;

    /// Retrieves a user by ID.
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Retrieves a user by handle.
    fn get_user_by_handle(&self, handle: &str) -> Result<User>;

    /// Lists all users.
    fn get_all_users(&self) -> Result<Vec<User>>;
}
