//! Debug helpers

/// Log a value at debug level and hand it back, for peeking into the middle
/// of an expression without restructuring it. Unlike `dbg!` the output goes
/// through `tracing`, so it respects subscribers and filtering.
pub fn log_value<T: std::fmt::Debug>(value: T, message: &str) -> T {
    tracing::debug!(value = ?value, "{}", message);
    value
}
