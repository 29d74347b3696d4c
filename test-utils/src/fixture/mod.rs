//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them when testing
//! formatting or conversion logic that only needs an entity model.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let war = fixture::tracked_war::entity();
//!
//! let war = fixture::tracked_war::entity_builder()
//!     .attacker_nation("Enemy")
//!     .build();
//! ```

pub mod monitored_alliance;
pub mod tracked_war;

pub use monitored_alliance::{
    entity as monitored_alliance_entity, entity_builder as monitored_alliance_entity_builder,
};
pub use tracked_war::{entity as tracked_war_entity, entity_builder as tracked_war_entity_builder};
