//! Ovoid path descriptors.
//!
//! [`OvoidPathData`] is the world-space description a caller builds per
//! query: a 3D center, per-axis radii and an orientation. [`Ovoid`] is the
//! same ovoid resolved into the vector space of a particular query (2D or
//! 3D), ready for [`Ovoid::intersect`] and [`Ovoid::outline`].

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::vector::OvoidVector;

/// The pair of world axes a 2D query reads from 3D ovoid data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OvoidPlane {
    /// No plane chosen. Invalid for 2D queries.
    #[default]
    None,
    /// World X and Y.
    XY,
    /// World X and Z.
    XZ,
    /// World Y and Z.
    YZ,
}

impl OvoidPlane {
    /// World-axis indices `[a, b]` read by this plane, or `None` for
    /// [`OvoidPlane::None`].
    #[must_use]
    pub const fn axes(self) -> Option<[usize; 2]> {
        match self {
            Self::None => None,
            Self::XY => Some([0, 1]),
            Self::XZ => Some([0, 2]),
            Self::YZ => Some([1, 2]),
        }
    }
}

/// World-space description of an ellipse/ellipsoid path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OvoidPathData {
    /// Center of the ovoid in world space.
    pub center: Vec3,
    /// Radius along each local axis. Must be positive.
    pub radii: Vec3,
    /// Orientation of the ovoid's local axes.
    pub rotation: Quat,
}

impl OvoidPathData {
    /// Radii used by [`Default`].
    pub const DEFAULT_RADII: Vec3 = Vec3::new(100.0, 50.0, 50.0);

    /// Create an axis-aligned ovoid.
    #[must_use]
    pub fn new(center: Vec3, radii: Vec3) -> Self {
        Self {
            center,
            radii,
            rotation: Quat::IDENTITY,
        }
    }

    /// Set the orientation of the ovoid.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Resolve this ovoid into the vector space of `V`.
    ///
    /// `plane` is only read for 2D queries.
    ///
    /// # Errors
    ///
    /// - [`MathError::UnspecifiedProjectionPlane`] for a 2D query with
    ///   [`OvoidPlane::None`].
    /// - [`MathError::DegenerateOvoid`] if a resolved radius is not positive.
    pub fn resolve<V: OvoidVector>(&self, plane: OvoidPlane) -> Result<Ovoid<V>, MathError> {
        Ovoid::new(
            V::from_world(self.center, plane)?,
            V::from_world(self.radii, plane)?,
            V::rotation_from_world(self.rotation, plane)?,
        )
    }
}

impl Default for OvoidPathData {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Self::DEFAULT_RADII)
    }
}

/// An ovoid expressed in a query's own vector space.
///
/// Radii are validated on construction, so every `Ovoid` is non-degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ovoid<V: OvoidVector> {
    center: V,
    radii: V,
    rotation: V::Rotation,
}

impl<V: OvoidVector> Ovoid<V> {
    /// Create an ovoid from its center, radii and orientation.
    ///
    /// # Errors
    ///
    /// [`MathError::DegenerateOvoid`] if any radius is zero, negative or
    /// non-finite.
    pub fn new(center: V, radii: V, rotation: V::Rotation) -> Result<Self, MathError> {
        if !radii.is_finite() {
            return Err(MathError::DegenerateOvoid {
                min_radius: f32::NAN,
            });
        }
        let min_radius = radii.min_element();
        if min_radius <= 0.0 {
            return Err(MathError::DegenerateOvoid { min_radius });
        }
        Ok(Self {
            center,
            radii,
            rotation,
        })
    }

    /// Create an axis-aligned ovoid.
    ///
    /// # Errors
    ///
    /// See [`Ovoid::new`].
    pub fn axis_aligned(center: V, radii: V) -> Result<Self, MathError> {
        Self::new(center, radii, V::IDENTITY)
    }

    #[must_use]
    pub fn center(&self) -> V {
        self.center
    }

    #[must_use]
    pub fn radii(&self) -> V {
        self.radii
    }

    #[must_use]
    pub fn rotation(&self) -> V::Rotation {
        self.rotation
    }

    /// Transform a world-space offset from the center into the ovoid's
    /// radii-normalized frame, where the ovoid is the unit circle/sphere.
    #[must_use]
    pub fn to_unit_frame(&self, offset: V) -> V {
        V::unrotate(self.rotation, offset) / self.radii
    }

    /// `Σ((local point) / radii)²` for a world-space point. Equal to 1 on
    /// the boundary, below 1 inside.
    #[must_use]
    pub fn boundary_measure(&self, point: V) -> f32 {
        let unit = self.to_unit_frame(point - self.center);
        unit.dot(unit)
    }

    /// Sample `segments` points around the ovoid's local XY ellipse, in
    /// world space. Fewer than three segments yields no points.
    #[must_use]
    pub fn outline(&self, segments: usize) -> Vec<V> {
        if segments < 3 {
            return Vec::new();
        }
        (0..segments)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / segments as f32;
                let local = V::from_local_xy(angle.cos(), angle.sin()) * self.radii;
                self.center + V::rotate(self.rotation, local)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn test_default_path_data() {
        let data = OvoidPathData::default();
        assert_eq!(data.center, Vec3::ZERO);
        assert_eq!(data.radii, Vec3::new(100.0, 50.0, 50.0));
        assert_eq!(data.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_plane_axes() {
        assert_eq!(OvoidPlane::default(), OvoidPlane::None);
        assert_eq!(OvoidPlane::None.axes(), None);
        assert_eq!(OvoidPlane::XY.axes(), Some([0, 1]));
        assert_eq!(OvoidPlane::XZ.axes(), Some([0, 2]));
        assert_eq!(OvoidPlane::YZ.axes(), Some([1, 2]));
    }

    #[test]
    fn test_resolve_2d_projects_center_and_radii() {
        let data = OvoidPathData::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(10.0, 20.0, 30.0));
        let ovoid = data.resolve::<Vec2>(OvoidPlane::XZ).unwrap();
        assert_eq!(ovoid.center(), Vec2::new(1.0, 3.0));
        assert_eq!(ovoid.radii(), Vec2::new(10.0, 30.0));
    }

    #[test]
    fn test_resolve_2d_without_plane_fails() {
        let data = OvoidPathData::default();
        assert_eq!(
            data.resolve::<Vec2>(OvoidPlane::None),
            Err(MathError::UnspecifiedProjectionPlane)
        );
    }

    #[test]
    fn test_degenerate_radii_rejected() {
        let zero = OvoidPathData::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(
            zero.resolve::<Vec3>(OvoidPlane::None),
            Err(MathError::DegenerateOvoid { min_radius: 0.0 })
        );

        let negative = Ovoid::axis_aligned(Vec2::ZERO, Vec2::new(-2.0, 1.0));
        assert_eq!(negative, Err(MathError::DegenerateOvoid { min_radius: -2.0 }));

        let infinite = Ovoid::axis_aligned(Vec3::ZERO, Vec3::new(1.0, f32::INFINITY, 1.0));
        assert!(infinite.is_err());
    }

    #[test]
    fn test_degenerate_only_on_projected_axes() {
        // The Y radius is never read by an XZ query.
        let data = OvoidPathData::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 5.0));
        assert!(data.resolve::<Vec2>(OvoidPlane::XZ).is_ok());
        assert!(data.resolve::<Vec2>(OvoidPlane::XY).is_err());
    }

    #[test]
    fn test_outline_points_on_boundary() {
        let data = OvoidPathData::new(Vec3::new(5.0, -3.0, 2.0), Vec3::new(100.0, 50.0, 25.0))
            .with_rotation(Quat::from_euler(glam::EulerRot::ZYX, 0.4, -0.2, 1.3));
        let ovoid = data.resolve::<Vec3>(OvoidPlane::None).unwrap();
        let points = ovoid.outline(32);
        assert_eq!(points.len(), 32);
        for p in points {
            assert!((ovoid.boundary_measure(p) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_outline_too_few_segments() {
        let ovoid = Ovoid::axis_aligned(Vec2::ZERO, Vec2::ONE).unwrap();
        assert!(ovoid.outline(2).is_empty());
        assert_eq!(ovoid.outline(3).len(), 3);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let data = OvoidPathData::new(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(4.0))
            .with_rotation(Quat::from_rotation_z(0.5));
        let bytes = rmp_serde::to_vec(&data).unwrap();
        let restored: OvoidPathData = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(data, restored);
    }
}
