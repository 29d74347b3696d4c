//! Politics and War GraphQL payloads for mocking the upstream API.
//!
//! These builders produce the JSON bodies the GraphQL endpoint returns so tests can feed them
//! through a mock HTTP server or deserialize them directly, simulating what the real API
//! would send.
//!
//! ```rust,ignore
//! use test_utils::upstream::{response, war::WarPayload};
//!
//! let body = response::wars(vec![
//!     WarPayload::new("war1")
//!         .attacker("Enemy", Some(1))
//!         .defender("Nation Beta", Some(10523))
//!         .into_json(),
//! ]);
//! ```

pub mod response;
pub mod war;
