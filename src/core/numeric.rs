//! Axis-number helpers: significant-digit rounding and display precision.

const MAX_SINGLE_STEP_POWER: i32 = 300;

/// Rounds `number` to its most significant decimal digit (`1234 -> 1000`,
/// `0.0456 -> 0.05`).
///
/// Zero, NaN and infinities are returned unchanged.
#[must_use]
pub fn round_to_next_significant(number: f64) -> f64 {
    if !number.is_finite() || number == 0.0 {
        return number;
    }

    let digits = number.abs().log10().ceil();
    let power = 1 - digits as i32;
    // 10^power overflows past 1e308 for tiny and subnormal input; scale in two steps.
    let (pre_scale, power) = if power > MAX_SINGLE_STEP_POWER {
        (
            10.0_f64.powi(MAX_SINGLE_STEP_POWER),
            power - MAX_SINGLE_STEP_POWER,
        )
    } else {
        (1.0, power)
    };
    let magnitude = 10.0_f64.powi(power);
    let shifted = (number * pre_scale * magnitude).round();
    shifted / magnitude / pre_scale
}

/// Number of decimal places needed to tell `number`-sized steps apart.
///
/// Negative for steps of 1000 and above; callers clamp as needed. Zero and
/// non-finite input yield 0.
#[must_use]
pub fn decimals(number: f64) -> i32 {
    if number == 0.0 || !number.is_finite() {
        return 0;
    }

    let rounded = round_to_next_significant(number).abs();
    (-rounded.log10()).ceil() as i32 + 2
}

/// Smallest step above `number`: `number + f64::EPSILON`, or the next
/// representable value where the epsilon is absorbed by the magnitude.
///
/// NaN and infinities are returned unchanged.
#[must_use]
pub fn next_up(number: f64) -> f64 {
    if !number.is_finite() {
        return number;
    }

    let stepped = number + f64::EPSILON;
    if stepped > number {
        stepped
    } else {
        number.next_up()
    }
}

#[cfg(test)]
mod tests {
    use super::{decimals, next_up, round_to_next_significant};

    #[test]
    fn rounding_keeps_sign() {
        assert_eq!(round_to_next_significant(-1234.0), -1000.0);
        assert_eq!(round_to_next_significant(-0.0456), -0.05);
    }

    #[test]
    fn rounding_tiny_values_stays_finite() {
        let rounded = round_to_next_significant(1e-308);
        assert!(rounded.is_finite());
        assert!((rounded - 1e-308).abs() <= 1e-320);

        let subnormal = round_to_next_significant(5e-310);
        assert!(subnormal.is_finite());
        assert!((subnormal - 5e-310).abs() <= 1e-320);

        let smallest = round_to_next_significant(f64::from_bits(1));
        assert!(smallest.is_finite() && smallest > 0.0);
    }

    #[test]
    fn decimals_of_negative_step_uses_magnitude() {
        assert_eq!(decimals(-0.25), decimals(0.25));
    }

    #[test]
    fn next_up_above_epsilon_scale() {
        let big = 1.0e20;
        assert!(next_up(big) > big);
        assert_eq!(next_up(f64::MAX), f64::INFINITY);
    }
}
