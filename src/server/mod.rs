//! Server-side backend: Discord bot, war monitoring and the configuration API.
//!
//! The backend uses Axum for the REST API, SeaORM for database operations, Serenity for
//! the Discord bot and tokio-cron-scheduler for periodic war checks.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, including the war monitor cycle
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Upstream** (`pnw/`) - Politics and War GraphQL client
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state for request handlers
//! - **Startup** (`startup`) - Database and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - War check and retention cron jobs
//! - **Bot** (`bot/`) - Slash commands and Discord event handlers
//!
//! # War Alert Flow
//!
//! 1. **Scheduler** fires the war check job
//! 2. **War monitor** fetches each subscribed alliance's active wars with the owner's API key
//! 3. **Data** records wars not seen before
//! 4. **War monitor** groups undelivered wars per alliance and posts one alert per channel
//! 5. **Data** marks the alerted wars as notified

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod pnw;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
