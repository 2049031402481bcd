/// Eased value interpolation for the animated stat counters.

/// Cubic ease-out over a normalized time `t`; clamped so callers can feed
/// raw elapsed ratios. Monotone non-decreasing on [0, 1] and exactly 1.0 at
/// the end of the curve.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Displayed counter value at `elapsed_ms` into a `duration_ms` animation
/// toward `target`. Once the duration has elapsed the result is the target
/// itself, never a rounded neighbour.
pub fn value_at(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = f64::from(elapsed_ms) / f64::from(duration_ms);
    (f64::from(target) * ease_out_cubic(t)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_exactly_on_target() {
        for target in [0, 1, 12, 98, 1240, u32::MAX / 2] {
            assert_eq!(value_at(target, 900, 900), target);
            assert_eq!(value_at(target, 5000, 900), target);
        }
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(value_at(1240, 0, 900), 0);
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut last = 0;
        for elapsed in (0..=1200).step_by(16) {
            let v = value_at(1240, elapsed, 900);
            assert!(v >= last, "regressed at {elapsed}ms: {v} < {last}");
            last = v;
        }
        assert_eq!(last, 1240);
    }

    #[test]
    fn zero_target_stays_zero() {
        for elapsed in [0, 100, 899, 900, 10_000] {
            assert_eq!(value_at(0, elapsed, 900), 0);
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(value_at(98, 0, 0), 98);
    }

    #[test]
    fn ease_curve_ends_flat() {
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert!(ease_out_cubic(0.5) > 0.5, "ease-out front-loads progress");
    }
}
