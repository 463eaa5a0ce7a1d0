//! Common numeric helpers for HUD geometry

/// Round to the nearest integer, halves rounding up (`floor(v + 0.5)`)
///
/// NaN maps to 0 and out-of-range values saturate.
#[inline]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Fraction of `current` over `max` as a percentage, 0 when `max` is not positive
pub fn percent_of(current: f32, max: f32) -> f64 {
    if max > 0.0 {
        current as f64 / max as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(1e12), i32::MAX);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(10.0, 20.0), 50.0);
        assert_eq!(percent_of(5.0, 0.0), 0.0);
        assert_eq!(percent_of(5.0, -1.0), 0.0);
    }
}
