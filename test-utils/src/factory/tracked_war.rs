//! Tracked war factory for creating war records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tracked wars with customizable fields.
///
/// `created_at` can be overridden to exercise retention cleanup.
pub struct TrackedWarFactory<'a> {
    db: &'a DatabaseConnection,
    war_id: String,
    alliance_id: i64,
    attacker_nation: String,
    defender_nation: String,
    war_date: DateTime<Utc>,
    notified: bool,
    created_at: DateTime<Utc>,
}

impl<'a> TrackedWarFactory<'a> {
    /// Creates a new TrackedWarFactory with default values.
    ///
    /// Defaults:
    /// - war_id: `"{id}"` where id is auto-incremented
    /// - alliance_id: `10523`
    /// - attacker_nation: `"Attacker {id}"`
    /// - defender_nation: `"Defender {id}"`
    /// - war_date, created_at: now
    /// - notified: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            war_id: id.to_string(),
            alliance_id: 10523,
            attacker_nation: format!("Attacker {}", id),
            defender_nation: format!("Defender {}", id),
            war_date: now,
            notified: false,
            created_at: now,
        }
    }

    /// Sets the upstream war ID.
    pub fn war_id(mut self, war_id: impl Into<String>) -> Self {
        self.war_id = war_id.into();
        self
    }

    /// Sets the defending alliance ID.
    pub fn alliance_id(mut self, alliance_id: i64) -> Self {
        self.alliance_id = alliance_id;
        self
    }

    /// Sets the attacking nation's name.
    pub fn attacker_nation(mut self, name: impl Into<String>) -> Self {
        self.attacker_nation = name.into();
        self
    }

    /// Sets the defending nation's name.
    pub fn defender_nation(mut self, name: impl Into<String>) -> Self {
        self.defender_nation = name.into();
        self
    }

    /// Sets when the war was declared.
    pub fn war_date(mut self, war_date: DateTime<Utc>) -> Self {
        self.war_date = war_date;
        self
    }

    /// Sets whether the war has already been notified.
    pub fn notified(mut self, notified: bool) -> Self {
        self.notified = notified;
        self
    }

    /// Sets when the war was first tracked.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the tracked war into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tracked_war::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tracked_war::Model, DbErr> {
        entity::tracked_war::ActiveModel {
            id: ActiveValue::NotSet,
            war_id: ActiveValue::Set(self.war_id),
            alliance_id: ActiveValue::Set(self.alliance_id),
            attacker_nation: ActiveValue::Set(self.attacker_nation),
            defender_nation: ActiveValue::Set(self.defender_nation),
            war_date: ActiveValue::Set(self.war_date),
            notified: ActiveValue::Set(self.notified),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an undelivered tracked war for the given alliance.
pub async fn create_tracked_war(
    db: &DatabaseConnection,
    alliance_id: i64,
) -> Result<entity::tracked_war::Model, DbErr> {
    TrackedWarFactory::new(db)
        .alliance_id(alliance_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_undelivered_war_by_default() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(TrackedWar)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let war = create_tracked_war(db, 777).await?;

        assert_eq!(war.alliance_id, 777);
        assert!(!war.notified);

        Ok(())
    }

    #[tokio::test]
    async fn backdates_created_at() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(TrackedWar)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let created_at = Utc::now() - chrono::Duration::days(40);
        let war = TrackedWarFactory::new(db)
            .created_at(created_at)
            .build()
            .await?;

        assert_eq!(war.created_at.timestamp(), created_at.timestamp());

        Ok(())
    }
}
