//! User service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::users_model::{NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::constants::ROSTER;
use crate::errors::{DatabaseError, Error, Result};
use crate::streaks::StreakRepositoryTrait;

/// Service for managing the household roster.
///
/// The roster is fixed at startup: [`UserServiceTrait::ensure_roster`] creates
/// any missing member together with a zeroed streak row, and leaves existing
/// rows untouched.
pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    streak_repository: Arc<dyn StreakRepositoryTrait>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        streak_repository: Arc<dyn StreakRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            streak_repository,
        }
    }

    /// Maps a storage-level NotFound onto the user-facing error so callers
    /// can distinguish "no such user" from other failures.
    fn map_not_found(key: &str, err: Error) -> Error {
        match err {
            Error::Database(DatabaseError::NotFound(_)) => Error::UnknownUser(key.to_string()),
            other => other,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn ensure_roster(&self) -> Result<Vec<User>> {
        let mut users = Vec::with_capacity(ROSTER.len());
        for display_name in ROSTER {
            let new_user = NewUser::from_display_name(display_name);
            let user = match self.user_repository.get_by_handle(&new_user.handle) {
                Ok(existing) => {
                    debug!("Roster member '{}' already present", existing.handle);
                    existing
                }
                Err(Error::Database(DatabaseError::NotFound(_))) => {
                    new_user.validate()?;
                    let created = self.user_repository.create(new_user).await?;
                    self.streak_repository.seed(&created.id).await?;
                    info!("Seeded roster member '{}'", created.handle);
                    created
                }
                Err(e) => return Err(e),
            };
            users.push(user);
        }
        Ok(users)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repository
            .get_by_id(user_id)
            .map_err(|e| Self::map_not_found(user_id, e))
    }

    fn get_user_by_handle(&self, handle: &str) -> Result<User> {
        self.user_repository
            .get_by_handle(handle)
            .map_err(|e| Self::map_not_found(handle, e))
    }

    fn get_all_users(&self) -> Result<Vec<User>> {
        self.user_repository.list()
    }
}
