use std::num::NonZeroU64;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a stored Discord snowflake into a non-zero `u64`.
///
/// Serenity ID types reject zero, so zero is treated as a parse failure here rather than
/// panicking at the Discord boundary.
///
/// # Arguments
/// - `value` - The stored snowflake string
///
/// # Returns
/// - `Ok(u64)` - A valid, non-zero Discord ID
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string as a
///   non-zero u64
pub fn parse_discord_id(value: &str) -> Result<u64, AppError> {
    let id = value
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(id.get())
}
