//! Application-wide constants

pub const API_PREFIX: &str = "/api";

/// Accepted digit count for phone numbers, separators excluded.
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;
