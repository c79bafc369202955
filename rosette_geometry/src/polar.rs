// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle and polar-coordinate helpers shared by share and radar charts.
//!
//! Screen coordinates grow downwards, so a positive angle turns clockwise. Both chart families
//! rotate their angles by a quarter turn so that angle zero points straight up (12 o'clock).

use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Vec2};

/// Rotation (in degrees) applied to share-chart angles so the first slice starts at 12 o'clock.
const SHARE_ROTATION_DEGREES: f64 = -90.0;

/// Converts degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Converts a share-chart angle in degrees (0 = top, clockwise) to a screen angle in radians.
pub fn share_angle(degrees: f64) -> f64 {
    to_radians(degrees + SHARE_ROTATION_DEGREES)
}

/// Returns the screen angle in radians of axis `index` out of `count` evenly spaced axes.
///
/// Axis 0 points up; subsequent axes proceed clockwise. `count` must be non-zero.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64 - FRAC_PI_2
}

/// Projects `(radius, angle)` around `center` into Cartesian screen coordinates.
pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Returns `value / max`, or `0.0` when `max` is zero or either input is not finite.
///
/// The result is not clamped to `1.0`: values above `max` map past the outer ring.
pub fn radius_fraction(value: f64, max: f64) -> f64 {
    if max == 0.0 || !max.is_finite() || !value.is_finite() {
        return 0.0;
    }
    value / max
}
