//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a subscription whose owning user has a stored credential.
///
/// This is the minimal setup for an alliance that a war check cycle will actually poll.
///
/// # Arguments
/// - `db` - Database connection
/// - `alliance_id` - Alliance to monitor
///
/// # Returns
/// - `Ok((api_key, subscription))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_subscription_with_api_key(
    db: &DatabaseConnection,
    alliance_id: i64,
) -> Result<
    (
        entity::user_api_key::Model,
        entity::monitored_alliance::Model,
    ),
    DbErr,
> {
    let api_key = crate::factory::user_api_key::create_api_key(db).await?;
    let subscription =
        crate::factory::monitored_alliance::create_subscription(db, alliance_id, &api_key.user_id)
            .await?;

    Ok((api_key, subscription))
}
