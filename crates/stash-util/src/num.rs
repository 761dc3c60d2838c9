//! Numeric option helpers

/// Collapse NaN into `None`, keeping every other value including the
/// infinities, so parse results compose with `unwrap_or`.
pub fn maybe_number(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_ordinary_numbers() {
        assert_eq!(maybe_number(0.0), Some(0.0));
        assert_eq!(maybe_number(12.0), Some(12.0));
        assert_eq!(maybe_number(-3.5), Some(-3.5));
    }

    #[test]
    fn test_keeps_infinities() {
        assert_eq!(maybe_number(f64::INFINITY), Some(f64::INFINITY));
        assert_eq!(maybe_number(f64::NEG_INFINITY), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_drops_nan() {
        assert_eq!(maybe_number(f64::NAN), None);
        assert_eq!(maybe_number(f64::NAN).unwrap_or(87.0), 87.0);
    }
}
