use chrono::NaiveDate;
use hearth_core::streaks::{Streak, StreakRepositoryTrait, StreakUpdate};
use hearth_core::Result;

use super::model::StreakDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::streaks;
use crate::schema::streaks::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct StreakRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StreakRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        StreakRepository { pool, writer }
    }
}

#[async_trait]
impl StreakRepositoryTrait for StreakRepository {
    fn get_by_user(&self, uid: &str) -> Result<Option<Streak>> {
        let mut conn = get_connection(&self.pool)?;
        let streak_db = streaks
            .find(uid)
            .first::<StreakDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(streak_db.map(Streak::from))
    }

    async fn seed(&self, uid: &str) -> Result<()> {
        let uid = uid.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let streak_db = StreakDB::from(Streak::zeroed(&uid));
                diesel::insert_or_ignore_into(streaks::table)
                    .values(&streak_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn apply_activity_day(&self, uid: &str, day: NaiveDate) -> Result<StreakUpdate> {
        let uid = uid.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<StreakUpdate> {
                // Read and write happen inside the actor's immediate
                // transaction, so two concurrent activity writes for the
                // same user cannot lose an update.
                let previous = streaks
                    .find(&uid)
                    .first::<StreakDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .map(Streak::from);

                let update = Streak::advance(&uid, previous.as_ref(), day);
                if update.changed() {
                    let streak_db = StreakDB::from(update.streak.clone());
                    diesel::replace_into(streaks::table)
                        .values(&streak_db)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(update)
            })
            .await
    }
}
