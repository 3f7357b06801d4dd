//! Angle helpers for polar chart layouts.
//!
//! Angles are in degrees and measured clockwise from the positive x axis,
//! since screen space `y` grows downward.

use std::f64::consts::PI;

use crate::core::Point;

pub const DEG2RAD: f64 = PI / 180.0;
pub const RAD2DEG: f64 = 180.0 / PI;
pub const FDEG2RAD: f32 = std::f32::consts::PI / 180.0;
pub const FRAD2DEG: f32 = 180.0 / std::f32::consts::PI;

/// Position around `center` at `distance` along `angle_degrees`.
#[must_use]
pub fn get_position(center: Point, distance: f64, angle_degrees: f64) -> Point {
    let radians = angle_degrees * DEG2RAD;
    Point::new(
        center.x + distance * radians.cos(),
        center.y + distance * radians.sin(),
    )
}

/// Returns an angle in `[0, 360)`: negative angles are lifted by whole turns,
/// then reduced modulo 360. Non-finite input yields NaN.
#[must_use]
pub fn normalized_angle_from_angle(angle: f64) -> f64 {
    // One exact remainder; repeated `+ 360.0` stalls for large negative input.
    let reduced = angle % 360.0;
    if reduced < 0.0 {
        // `-1e-17 + 360.0` rounds to 360.0, fold it back to 0.
        (reduced + 360.0) % 360.0
    } else {
        reduced
    }
}
