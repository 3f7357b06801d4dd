use proptest::num::f64::{NORMAL, SUBNORMAL, ZERO};
use proptest::prelude::*;
use radar_chart_rs::core::{Point, get_position, next_up, normalized_angle_from_angle};

proptest! {
    #[test]
    fn label_angles_stay_in_first_turn(
        slice_angle in 0.0f64..360.0,
        index in 0usize..64,
        rotation in -10_000.0f64..10_000.0
    ) {
        let angle = normalized_angle_from_angle(slice_angle * index as f64 + rotation);
        prop_assert!((0.0..360.0).contains(&angle));
    }

    #[test]
    fn zero_distance_position_is_the_center(
        x in -10_000.0f64..10_000.0,
        y in -10_000.0f64..10_000.0,
        angle in -720.0f64..720.0
    ) {
        let center = Point::new(x, y);
        prop_assert_eq!(get_position(center, 0.0, angle), center);
    }

    #[test]
    fn position_is_periodic_in_full_turns(
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        distance in 0.0f64..5_000.0,
        angle in -720.0f64..720.0
    ) {
        let center = Point::new(x, y);
        let a = get_position(center, distance, angle);
        let b = get_position(center, distance, angle + 360.0);
        prop_assert!((a.x - b.x).abs() <= 1e-6);
        prop_assert!((a.y - b.y).abs() <= 1e-6);
    }

    #[test]
    fn next_up_is_strictly_greater(value in NORMAL | SUBNORMAL | ZERO) {
        prop_assert!(next_up(value) > value);
    }
}
