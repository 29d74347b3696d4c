pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_api_key_table;
mod m20251001_000002_create_monitored_alliance_table;
mod m20251001_000003_create_tracked_war_table;
mod m20251002_000004_create_guild_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_api_key_table::Migration),
            Box::new(m20251001_000002_create_monitored_alliance_table::Migration),
            Box::new(m20251001_000003_create_tracked_war_table::Migration),
            Box::new(m20251002_000004_create_guild_setting_table::Migration),
        ]
    }
}
