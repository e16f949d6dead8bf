use thiserror::Error;

/// A rejected windowing configuration.
///
/// These are programming or host errors: the calculator never recovers from them by rendering a
/// degenerate window.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("item size must be greater than zero")]
    ZeroItemSize,
    #[error("item size must be a positive, finite pixel value (got {0})")]
    InvalidItemSize(f64),
    #[error("item count cannot be negative (got {0})")]
    NegativeItemCount(i64),
    #[error("viewport height must be a non-negative, finite pixel value (got {0})")]
    InvalidViewportHeight(f64),
}

/// Converts a signed row count reported by a host into a `usize`.
pub fn checked_item_count(raw: i64) -> Result<usize, ConfigError> {
    if raw < 0 {
        wwarn!(raw, "checked_item_count: negative item count");
        return Err(ConfigError::NegativeItemCount(raw));
    }
    Ok(usize::try_from(raw).unwrap_or(usize::MAX))
}
