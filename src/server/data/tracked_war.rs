//! Tracked war repository.
//!
//! This module provides the `TrackedWarRepository` for recording defensive wars seen upstream
//! and tracking whether they have been announced. Inserts are idempotent on the upstream war
//! ID, so re-fetching an already known war never resets its `notified` flag.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::tracked_war::{CreateTrackedWarParam, TrackedWar};

/// Repository providing database operations for tracked wars.
pub struct TrackedWarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackedWarRepository<'a> {
    /// Creates a new TrackedWarRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TrackedWarRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a war unless its upstream ID is already tracked.
    ///
    /// Uses `INSERT ... ON CONFLICT (war_id) DO NOTHING`, so an existing record is never
    /// overwritten. New records start with `notified = false`.
    ///
    /// # Arguments
    /// - `param` - War details from upstream
    ///
    /// # Returns
    /// - `Ok(true)` - War recorded for the first time
    /// - `Ok(false)` - War was already tracked
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_if_absent(&self, param: CreateTrackedWarParam) -> Result<bool, DbErr> {
        let war = entity::tracked_war::ActiveModel {
            id: ActiveValue::NotSet,
            war_id: ActiveValue::Set(param.war_id),
            alliance_id: ActiveValue::Set(param.alliance_id),
            attacker_nation: ActiveValue::Set(param.attacker_nation),
            defender_nation: ActiveValue::Set(param.defender_nation),
            war_date: ActiveValue::Set(param.war_date),
            notified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        };

        let result = entity::prelude::TrackedWar::insert(war)
            .on_conflict(
                OnConflict::column(entity::tracked_war::Column::WarId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Gets a tracked war by its upstream ID.
    #[cfg(test)]
    pub async fn find_by_war_id(&self, war_id: &str) -> Result<Option<TrackedWar>, DbErr> {
        let entity = entity::prelude::TrackedWar::find()
            .filter(entity::tracked_war::Column::WarId.eq(war_id))
            .one(self.db)
            .await?;

        Ok(entity.map(TrackedWar::from_entity))
    }

    /// Gets every war not yet announced, most recently declared first.
    pub async fn get_unnotified(&self) -> Result<Vec<TrackedWar>, DbErr> {
        let entities = entity::prelude::TrackedWar::find()
            .filter(entity::tracked_war::Column::Notified.eq(false))
            .order_by_desc(entity::tracked_war::Column::WarDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TrackedWar::from_entity).collect())
    }

    /// Marks wars as announced.
    ///
    /// Only records still flagged `notified = false` are updated, so the flag flips at most
    /// once per war.
    ///
    /// # Arguments
    /// - `war_ids` - Upstream war IDs to mark
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records that transitioned to notified
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_notified(&self, war_ids: &[String]) -> Result<u64, DbErr> {
        if war_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::TrackedWar::update_many()
            .col_expr(entity::tracked_war::Column::Notified, Expr::value(true))
            .filter(entity::tracked_war::Column::WarId.is_in(war_ids.iter().cloned()))
            .filter(entity::tracked_war::Column::Notified.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the most recently declared wars against an alliance.
    ///
    /// # Arguments
    /// - `alliance_id` - Defending alliance
    /// - `limit` - Maximum number of wars to return
    pub async fn get_recent_by_alliance_id(
        &self,
        alliance_id: i64,
        limit: u64,
    ) -> Result<Vec<TrackedWar>, DbErr> {
        let entities = entity::prelude::TrackedWar::find()
            .filter(entity::tracked_war::Column::AllianceId.eq(alliance_id))
            .order_by_desc(entity::tracked_war::Column::WarDate)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TrackedWar::from_entity).collect())
    }

    /// Deletes wars first tracked before `cutoff`, regardless of notified status.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted records
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::TrackedWar::delete_many()
            .filter(entity::tracked_war::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
