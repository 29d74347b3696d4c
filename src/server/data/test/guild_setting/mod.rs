use crate::server::{
    data::guild_setting::GuildSettingRepository, error::AppError,
    model::guild_setting::UpsertGuildSettingParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild_id;
mod upsert;
