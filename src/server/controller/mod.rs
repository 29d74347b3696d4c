//! HTTP controller endpoints for the configuration API.
//!
//! Controllers extract path and body parameters, call into the service layer and convert
//! the resulting domain models into DTOs. Every handler is annotated with `utoipa::path`
//! for the generated OpenAPI document.

pub mod bot;
pub mod monitoring;
