use approx::assert_relative_eq;
use radar_chart_rs::core::{decimals, next_up, round_to_next_significant};

#[test]
fn round_to_next_significant_keeps_one_digit() {
    assert_relative_eq!(round_to_next_significant(1234.0), 1000.0);
    assert_relative_eq!(round_to_next_significant(0.0456), 0.05);
    assert_relative_eq!(round_to_next_significant(87.0), 90.0);
    assert_relative_eq!(round_to_next_significant(0.5), 0.5);
}

#[test]
fn round_to_next_significant_passes_degenerate_input_through() {
    assert_eq!(round_to_next_significant(0.0), 0.0);
    assert!(round_to_next_significant(f64::NAN).is_nan());
    assert_eq!(round_to_next_significant(f64::INFINITY), f64::INFINITY);
    assert_eq!(
        round_to_next_significant(f64::NEG_INFINITY),
        f64::NEG_INFINITY
    );
}

#[test]
fn decimals_tracks_step_magnitude() {
    assert_eq!(decimals(0.0), 0);
    assert_eq!(decimals(1.0), 2);
    assert_eq!(decimals(5.0), 2);
    assert_eq!(decimals(0.5), 3);
    assert_eq!(decimals(0.25), 3);
    assert_eq!(decimals(0.0456), 4);
}

#[test]
fn decimals_of_non_finite_input_is_zero() {
    assert_eq!(decimals(f64::NAN), 0);
    assert_eq!(decimals(f64::INFINITY), 0);
}

#[test]
fn next_up_steps_past_finite_values() {
    assert_eq!(next_up(1.0), 1.0 + f64::EPSILON);
    assert!(next_up(0.0) > 0.0);
    assert!(next_up(-1.0) > -1.0);
    assert!(next_up(1.0e300) > 1.0e300);
}

#[test]
fn next_up_passes_non_finite_values_through() {
    assert_eq!(next_up(f64::INFINITY), f64::INFINITY);
    assert_eq!(next_up(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert!(next_up(f64::NAN).is_nan());
}

#[test]
fn tiny_and_subnormal_values_round_to_finite_steps() {
    assert_relative_eq!(round_to_next_significant(1e-308), 1e-308, max_relative = 1e-9);
    assert_relative_eq!(round_to_next_significant(2.2e-308), 2e-308, max_relative = 1e-9);
    assert_relative_eq!(round_to_next_significant(5e-310), 5e-310, max_relative = 1e-9);
    assert!(round_to_next_significant(-5e-310) < 0.0);

    assert!(decimals(1e-308) >= 310);
    assert_eq!(decimals(2.2e-308), 310);
    assert!(decimals(5e-310) >= 311);
}
