//! Valinor Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the war alert
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories for inserting rows, fixtures for in-memory entity models, and JSON
//! payload builders mirroring the Politics and War GraphQL API.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//! - **fixture**: In-memory entity models without database insertion
//! - **upstream**: GraphQL response bodies for mocking the upstream API
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn tracks_wars() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_alert_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod upstream;
