// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! WGS-84 conversions for the world coordinates carried by entity PDUs.
//!
//! Entity locations travel as geocentric (ECEF) [`Vector3Double`] values in
//! metres, and orientations as [`EulerAngles`] relative to that frame. The
//! helpers here move between those and geodetic latitude, longitude and
//! height, and turn a local heading/pitch/roll into DIS Euler angles.

use serde::{Deserialize, Serialize};

use super::common::{EulerAngles, Vector3Double};

/// WGS-84 semi-major axis in metres.
pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS-84 semi-minor axis in metres.
pub const SEMI_MINOR_AXIS: f64 = 6_356_752.3142;

/// Geodetic position. Angles are radians, height is metres above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeodeticPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

impl GeodeticPosition {
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Build a position from latitude and longitude given in degrees.
    pub fn from_degrees(latitude: f64, longitude: f64, height: f64) -> Self {
        Self::new(latitude.to_radians(), longitude.to_radians(), height)
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    /// Convert a geocentric position using Bowring's closed-form latitude.
    ///
    /// Accurate to well under a millimetre for heights near the surface. The
    /// poles (zero distance from the polar axis) are not representable.
    pub fn from_ecef(position: &Vector3Double) -> Self {
        let (a, b) = (SEMI_MAJOR_AXIS, SEMI_MINOR_AXIS);
        let Vector3Double { x, y, z } = *position;

        let e_squared = (a * a - b * b) / (a * a);
        let e_prime_squared = (a * a - b * b) / (b * b);
        let w = x.hypot(y);

        let longitude = y.atan2(x);
        let b_zero = (a * z / (b * w)).atan();
        let latitude = ((z + e_prime_squared * b * b_zero.sin().powi(3))
            / (w - a * e_squared * b_zero.cos().powi(3)))
        .atan();
        let height = w / latitude.cos() - prime_vertical_radius(latitude);

        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Geocentric position of this point.
    pub fn to_ecef(&self) -> Vector3Double {
        let (a, b) = (SEMI_MAJOR_AXIS, SEMI_MINOR_AXIS);
        let n = prime_vertical_radius(self.latitude);
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();

        Vector3Double::new(
            (n + self.height) * cos_lat * cos_lon,
            (n + self.height) * cos_lat * sin_lon,
            (b * b / (a * a) * n + self.height) * sin_lat,
        )
    }
}

fn prime_vertical_radius(latitude: f64) -> f64 {
    let (a, b) = (SEMI_MAJOR_AXIS, SEMI_MINOR_AXIS);
    let (sin_lat, cos_lat) = latitude.sin_cos();
    a * a / (a * a * cos_lat * cos_lat + b * b * sin_lat * sin_lat).sqrt()
}

// =============================================================================
// Orientation
// =============================================================================

type Axis = [f64; 3];

const X_AXIS: Axis = [1.0, 0.0, 0.0];
const Y_AXIS: Axis = [0.0, 1.0, 0.0];
const Z_AXIS: Axis = [0.0, 0.0, 1.0];

/// Convert a local heading, pitch and roll (degrees) at `position` into DIS
/// Euler angles relative to the geocentric frame.
///
/// Heading is clockwise from true north, pitch is positive nose up and roll
/// is positive right wing down.
pub fn heading_pitch_roll_to_euler(
    heading: f64,
    pitch: f64,
    roll: f64,
    position: &GeodeticPosition,
) -> EulerAngles {
    let (heading, pitch, roll) = (heading.to_radians(), pitch.to_radians(), roll.to_radians());

    // Local north/east/down frame at the position.
    let east = rotate(Y_AXIS, Z_AXIS, position.longitude);
    let north = rotate(Z_AXIS, scale(east, -1.0), position.latitude);
    let down = cross(north, east);

    let north = rotate(north, down, heading);
    let east = rotate(east, down, heading);
    let north = rotate(north, east, pitch);
    let east = rotate(east, north, roll);

    let psi = dot(north, Y_AXIS).atan2(dot(north, X_AXIS));
    let theta = (-dot(north, Z_AXIS)).atan2(dot(north, X_AXIS).hypot(dot(north, Y_AXIS)));
    let y2 = rotate(Y_AXIS, Z_AXIS, psi);
    let z2 = rotate(Z_AXIS, y2, theta);
    let phi = dot(east, z2).atan2(dot(east, y2));

    EulerAngles::new(psi as f32, theta as f32, phi as f32)
}

/// Rotate `v` about the unit axis `n` by `angle` radians (Rodrigues).
fn rotate(v: Axis, n: Axis, angle: f64) -> Axis {
    let (sin, cos) = angle.sin_cos();
    let along = dot(n, v) * (1.0 - cos);
    let across = cross(n, v);
    [
        along * n[0] + cos * v[0] + sin * across[0],
        along * n[1] + cos * v[1] + sin * across[1],
        along * n[2] + cos * v[2] + sin * across[2],
    ]
}

fn cross(a: Axis, b: Axis) -> Axis {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: Axis, b: Axis) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn scale(a: Axis, factor: f64) -> Axis {
    [a[0] * factor, a[1] * factor, a[2] * factor]
}
