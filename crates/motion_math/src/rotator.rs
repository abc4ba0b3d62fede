//! Euler rotation in degrees.
//!
//! [`Rotator`] is the pitch/yaw/roll form callers usually edit and store.
//! Anything that interpolates converts it to a [`Quat`] first.

use glam::{EulerRot, Quat};
use serde::{Deserialize, Serialize};

/// Rotation as Euler angles in degrees.
///
/// Yaw turns about Z, pitch about Y, roll about X, applied in that order
/// (intrinsic Z-Y-X).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotator {
    /// Rotation about Y, in degrees.
    pub pitch: f32,
    /// Rotation about Z, in degrees.
    pub yaw: f32,
    /// Rotation about X, in degrees.
    pub roll: f32,
}

impl Rotator {
    /// No rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Convert to a unit quaternion.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Convert from a quaternion. Angles come back in `(-180, 180]`.
    #[must_use]
    pub fn from_quat(rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.normalize().to_euler(EulerRot::ZYX);
        Self::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees()).normalized()
    }

    /// Wrap every angle into `(-180, 180]`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(
            normalize_axis(self.pitch),
            normalize_axis(self.yaw),
            normalize_axis(self.roll),
        )
    }

    /// Angle of the shortest rotation from `self` to `other`, in degrees.
    #[must_use]
    pub fn angle_to(self, other: Self) -> f32 {
        self.to_quat().angle_between(other.to_quat()).to_degrees()
    }
}

impl From<Rotator> for Quat {
    fn from(rotator: Rotator) -> Self {
        rotator.to_quat()
    }
}

impl From<Quat> for Rotator {
    fn from(rotation: Quat) -> Self {
        Self::from_quat(rotation)
    }
}

fn normalize_axis(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}
