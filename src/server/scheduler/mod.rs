//! Cron jobs driving the war check cycle and tracked war retention.

pub mod war_check;
