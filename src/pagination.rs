use crate::error::ValidationError;

pub const DEFAULT_LIMIT: i64 = 50;

pub fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Rejects non-positive limits and clamps large ones to `max`.
pub fn effective_limit(requested: i64, max: i64) -> Result<i64, ValidationError> {
    if requested < 1 {
        return Err(ValidationError::InvalidLimit { value: requested });
    }
    Ok(requested.min(max))
}
