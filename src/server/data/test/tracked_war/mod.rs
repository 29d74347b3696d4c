use crate::server::{
    data::tracked_war::TrackedWarRepository, error::AppError,
    model::tracked_war::CreateTrackedWarParam,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create_if_absent;
mod delete_created_before;
mod get_recent_by_alliance_id;
mod get_unnotified;
mod mark_notified;

fn war_param(war_id: &str) -> CreateTrackedWarParam {
    CreateTrackedWarParam {
        war_id: war_id.to_string(),
        alliance_id: fixture::tracked_war::DEFAULT_ALLIANCE_ID,
        attacker_nation: fixture::tracked_war::DEFAULT_ATTACKER.to_string(),
        defender_nation: fixture::tracked_war::DEFAULT_DEFENDER.to_string(),
        war_date: fixture::tracked_war::default_war_date(),
    }
}
