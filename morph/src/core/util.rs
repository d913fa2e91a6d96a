use std::f64::consts::PI;

pub const TWO_PI: f64 = PI * 2.0;

/// Linearly remap `value` from `[in_start, in_end]` to `[out_start, out_end]`.
/// Values outside the input range extrapolate; nothing is clamped.
pub fn map_range(
    value: f64,
    in_start: f64,
    in_end: f64,
    out_start: f64,
    out_end: f64,
) -> f64 {
    (value - in_start) / (in_end - in_start) * (out_end - out_start)
        + out_start
}

/// Linear interpolation between two values. Returns a value between `start` and
/// `end` based on the interpolation parameter `t` (typically 0.0 to 1.0).
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Utilities to contain a value within a range
pub mod constrain {
    /// Clamp a value between min and max
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        value.max(min).min(max)
    }

    /// Clamp a value between min and max such that values that overshoot
    /// enter from the opposite bound, e.g.
    /// `constrain::wrap(1.2, 0.0, 1.0) // => 0.2`.
    /// Unlike a plain modulo the upper bound itself is excluded, so
    /// `wrap(360.0, 0.0, 360.0) == 0.0`.
    pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
        if min == max {
            return min;
        }

        let range = max - min;
        let value = value - min;

        let wrapped = value - (value / range).floor() * range;
        min + wrapped
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[macro_export]
    macro_rules! assert_approx_eq {
        ($a:expr, $b:expr) => {
            assert!(
                ($a - $b).abs() < 0.001,
                "Values not approximately equal: {} and {}, difference: {}",
                $a,
                $b,
                ($a - $b).abs()
            );
        };
        ($a:expr, $b:expr, $epsilon:expr) => {
            assert!(
                ($a - $b).abs() < $epsilon,
                "Values not approximately equal:
                    {} and {}, difference: {}, tolerance: {}",
                $a,
                $b,
                ($a - $b).abs(),
                $epsilon
            );
        };
    }

    #[test]
    fn map_range_is_exact_at_boundaries() {
        assert_eq!(map_range(-1.0, -1.0, 1.0, 80.0, 120.0), 80.0);
        assert_eq!(map_range(1.0, -1.0, 1.0, 80.0, 120.0), 120.0);
        assert_eq!(map_range(-1.0, -1.0, 1.0, 0.0, 360.0), 0.0);
        assert_eq!(map_range(1.0, -1.0, 1.0, 0.0, 360.0), 360.0);
    }

    #[test]
    fn map_range_midpoint() {
        assert_approx_eq!(map_range(0.0, -1.0, 1.0, 0.0, 360.0), 180.0);
        assert_approx_eq!(map_range(0.5, 0.0, 1.0, 10.0, 20.0), 15.0);
    }

    #[test]
    fn map_range_inverted_output() {
        assert_approx_eq!(map_range(0.25, 0.0, 1.0, 1.0, 0.0), 0.75);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_approx_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn wrap_hue_values() {
        assert_approx_eq!(constrain::wrap(460.0, 0.0, 360.0), 100.0);
        assert_approx_eq!(constrain::wrap(360.0, 0.0, 360.0), 0.0);
        assert_approx_eq!(constrain::wrap(-20.0, 0.0, 360.0), 340.0);
        assert_approx_eq!(constrain::wrap(1.2, 0.0, 1.0), 0.2);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(constrain::clamp(1.5, -1.0, 1.0), 1.0);
        assert_eq!(constrain::clamp(-1.5, -1.0, 1.0), -1.0);
        assert_eq!(constrain::clamp(0.3, -1.0, 1.0), 0.3);
    }
}
