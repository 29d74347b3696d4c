//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) and bot command layers and the data (repository) layer. Services are
//! responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls with the upstream API and Discord
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod api_key;
pub mod bot;
pub mod guild_setting;
pub mod monitoring;
pub mod tracked_war;
pub mod war_monitor;
pub mod war_notification;
