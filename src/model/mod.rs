//! Request and response bodies for the REST configuration API.

pub mod api;
pub mod bot;
pub mod monitoring;
