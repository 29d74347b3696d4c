//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let key = factory::create_api_key(&db).await?;
//!     let subscription = factory::create_subscription(&db, 10523, &key.user_id).await?;
//!
//!     // Create a subscription together with its owner's credential
//!     let (key, subscription) = factory::helpers::create_subscription_with_api_key(&db, 10523).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let war = factory::tracked_war::TrackedWarFactory::new(&db)
//!     .war_id("war1")
//!     .alliance_id(10523)
//!     .notified(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user_api_key` - Create stored upstream credentials
//! - `monitored_alliance` - Create alliance subscriptions
//! - `tracked_war` - Create tracked war records
//! - `guild_setting` - Create per-guild notification settings
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod guild_setting;
pub mod helpers;
pub mod monitored_alliance;
pub mod tracked_war;
pub mod user_api_key;

pub use guild_setting::create_guild_setting;
pub use monitored_alliance::create_subscription;
pub use tracked_war::create_tracked_war;
pub use user_api_key::create_api_key;
