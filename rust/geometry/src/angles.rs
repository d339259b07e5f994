// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Angle helpers and the project north context

use nalgebra::Vector3;
use std::f64::consts::PI;

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Plan angle of `vector` in degrees, measured from −X.
///
/// `atan2` is shifted by half a turn: values below π gain π, and exactly π
/// wraps to 0.
pub fn vector_angle(vector: &Vector3<f64>) -> f64 {
    let radians = vector.y.atan2(vector.x);
    let shifted = if radians < PI { radians + PI } else { radians - PI };
    radians_to_degrees(shifted)
}

/// Rotation of project north relative to the model's internal Y axis.
///
/// Read once from the host's project location and passed by value to anything
/// that needs it; nothing in the core mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectNorth {
    degrees: f64,
}

impl ProjectNorth {
    /// From a host angle in radians, rounded to three decimals in degrees.
    pub fn from_radians(radians: f64) -> Self {
        let degrees = (radians_to_degrees(radians) * 1000.0).round() / 1000.0;
        Self { degrees }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Facing of a view direction relative to project north, in [0, 360).
    pub fn facing_degrees(&self, view_direction: &Vector3<f64>) -> f64 {
        (vector_angle(view_direction) - self.degrees).rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degree_radian_conversions() {
        assert_relative_eq!(radians_to_degrees(PI), 180.0);
        assert_relative_eq!(degrees_to_radians(90.0), PI / 2.0);
    }

    #[test]
    fn vector_angle_is_offset_by_half_turn() {
        assert_relative_eq!(vector_angle(&Vector3::new(1.0, 0.0, 0.0)), 180.0);
        assert_relative_eq!(vector_angle(&Vector3::new(0.0, 1.0, 0.0)), 270.0);
        assert_relative_eq!(vector_angle(&Vector3::new(0.0, -1.0, 0.0)), 90.0);
        // atan2 returns exactly π here, which wraps to zero.
        assert_relative_eq!(vector_angle(&Vector3::new(-1.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn north_offset_rounds_to_three_decimals() {
        let north = ProjectNorth::from_radians(0.5);
        assert_eq!(north.degrees(), 28.648);
    }

    #[test]
    fn facing_wraps_into_full_turn() {
        let north = ProjectNorth::from_degrees(200.0);
        let facing = north.facing_degrees(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(facing, 340.0);
    }
}
