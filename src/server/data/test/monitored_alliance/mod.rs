use crate::server::{
    data::monitored_alliance::MonitoredAllianceRepository, error::AppError,
    model::monitored_alliance::UpsertMonitoredAllianceParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_by_guild_id;
mod upsert;
