/// Converts an integral, non-negative double to a `u64`.
///
/// Callers must have range-checked `value` already; the cast saturates
/// rather than wraps for anything out of range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u64(value: f64) -> u64 {
    value as u64
}

/// Converts a `u64` to a double.
///
/// Values above `2^53` round to the nearest representable double.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}
