use crate::server::{
    data::api_key::UserApiKeyRepository, error::AppError,
    model::api_key::UpsertUserApiKeyParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_user_id;
mod upsert;
