use chrono::NaiveDate;
use hearth_core::activities::{Activity, ActivityRepositoryTrait, DATE_FORMAT};
use hearth_core::Result;

use super::model::ActivityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::activities;
use crate::schema::activities::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ActivityRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ActivityRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ActivityRepository { pool, writer }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    fn get_by_id(&self, activity_id: &str) -> Result<Activity> {
        let mut conn = get_connection(&self.pool)?;
        let activity_db = activities
            .find(activity_id)
            .first::<ActivityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Activity::from(activity_db))
    }

    fn get_by_user(&self, uid: &str) -> Result<Vec<Activity>> {
        let mut conn = get_connection(&self.pool)?;
        let activities_db = activities
            .filter(user_id.eq(uid))
            .order((date.asc(), created_at.asc()))
            .load::<ActivityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(activities_db.into_iter().map(Activity::from).collect())
    }

    fn get_by_user_and_date(&self, uid: &str, day: NaiveDate) -> Result<Vec<Activity>> {
        let mut conn = get_connection(&self.pool)?;
        let day_str = day.format(DATE_FORMAT).to_string();
        let activities_db = activities
            .filter(user_id.eq(uid))
            .filter(date.eq(day_str))
            .order(created_at.asc())
            .load::<ActivityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(activities_db.into_iter().map(Activity::from).collect())
    }

    fn get_by_user_in_range(
        &self,
        uid: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Activity>> {
        let mut conn = get_connection(&self.pool)?;
        // Dates are stored zero-padded, so text comparison matches calendar
        // order.
        let start_str = start.format(DATE_FORMAT).to_string();
        let end_str = end.format(DATE_FORMAT).to_string();
        let activities_db = activities
            .filter(user_id.eq(uid))
            .filter(date.ge(start_str))
            .filter(date.le(end_str))
            .order((date.asc(), created_at.asc()))
            .load::<ActivityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(activities_db.into_iter().map(Activity::from).collect())
    }

    async fn create(&self, activity: Activity) -> Result<Activity> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Activity> {
                let activity_db: ActivityDB = activity.into();
                let result_db = diesel::insert_into(activities::table)
                    .values(&activity_db)
                    .returning(ActivityDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Activity::from(result_db))
            })
            .await
    }

    async fn update(&self, activity: Activity) -> Result<Activity> {
        let activity_id = activity.id.clone();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Activity> {
                let activity_db: ActivityDB = activity.into();
                diesel::update(activities.find(activity_id.clone()))
                    .set(&activity_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = activities
                    .find(activity_id)
                    .first::<ActivityDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Activity::from(result_db))
            })
            .await
    }

    async fn delete(&self, activity_id: &str) -> Result<usize> {
        let activity_id = activity_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(activities.find(activity_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
