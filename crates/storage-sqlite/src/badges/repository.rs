use hearth_core::badges::{Badge, BadgeRepositoryTrait};
use hearth_core::Result;

use super::model::BadgeDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::badges;
use crate::schema::badges::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct BadgeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BadgeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BadgeRepository { pool, writer }
    }
}

#[async_trait]
impl BadgeRepositoryTrait for BadgeRepository {
    fn get_by_user(&self, uid: &str) -> Result<Vec<Badge>> {
        let mut conn = get_connection(&self.pool)?;
        let badges_db = badges
            .filter(user_id.eq(uid))
            .order(earned_at.desc())
            .load::<BadgeDB>(&mut conn)
            .into_core()?;
        Ok(badges_db.into_iter().map(Badge::from).collect())
    }

    fn count_by_user(&self, uid: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        badges
            .filter(user_id.eq(uid))
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }

    async fn create(&self, badge: Badge) -> Result<Badge> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Badge> {
                let badge_db: BadgeDB = badge.into();
                let result_db = diesel::insert_into(badges::table)
                    .values(&badge_db)
                    .returning(BadgeDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Badge::from(result_db))
            })
            .await
    }
}
