//! Vector kind classification.
//!
//! Intersection queries are generic over the vector type the caller works
//! in. [`OvoidVector`] is implemented for [`Vec2`] and [`Vec3`] only and
//! reports, at compile time, whether the query is 2-component or
//! 3-component. The kind decides which formula variant runs and, for 2D
//! queries, which pair of world axes is read from 3D ovoid data.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use glam::{Mat2, Quat, Vec2, Vec3};

use crate::error::MathError;
use crate::ovoid::OvoidPlane;

/// Number of components of a query vector type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorKind {
    /// A planar query (`Vec2`).
    Two,
    /// A spatial query (`Vec3`).
    Three,
}

impl VectorKind {
    /// Number of scalar components for this kind.
    #[must_use]
    pub const fn component_count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Returns the [`VectorKind`] of `V`.
#[must_use]
pub const fn kind_of<V: OvoidVector>() -> VectorKind {
    V::KIND
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for glam::Vec2 {}
    impl Sealed for glam::Vec3 {}
}

/// A vector type an ovoid query can be expressed in.
///
/// Sealed: the closed set is `Vec2` and `Vec3`.
pub trait OvoidVector:
    sealed::Sealed
    + Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Mul<f32, Output = Self>
    + Div<Output = Self>
{
    /// Component count of this vector type.
    const KIND: VectorKind;

    /// The all-zero vector.
    const ZERO: Self;

    /// Rotation representation matching this vector type.
    type Rotation: Copy + Debug + PartialEq + Send + Sync + 'static;

    /// The identity rotation.
    const IDENTITY: Self::Rotation;

    /// Reads a world-space 3D vector into this vector type.
    ///
    /// 3D queries keep the vector as is and ignore `plane`. 2D queries read
    /// the two axes selected by `plane`.
    ///
    /// # Errors
    ///
    /// [`MathError::UnspecifiedProjectionPlane`] for a 2D query with
    /// [`OvoidPlane::None`].
    fn from_world(v: Vec3, plane: OvoidPlane) -> Result<Self, MathError>;

    /// Reads a world-space rotation into this vector type's rotation.
    ///
    /// For 2D queries this is the twist of `rotation` about the plane's
    /// normal, expressed in the plane's own coordinates.
    ///
    /// # Errors
    ///
    /// [`MathError::UnspecifiedProjectionPlane`] for a 2D query with
    /// [`OvoidPlane::None`].
    fn rotation_from_world(rotation: Quat, plane: OvoidPlane) -> Result<Self::Rotation, MathError>;

    /// Builds a vector from local X/Y components (Z is zero in 3D).
    fn from_local_xy(x: f32, y: f32) -> Self;

    /// Rotates `v` by `rotation`.
    fn rotate(rotation: Self::Rotation, v: Self) -> Self;

    /// Rotates `v` by the inverse of `rotation`.
    fn unrotate(rotation: Self::Rotation, v: Self) -> Self;

    /// Dot product.
    fn dot(self, rhs: Self) -> f32;

    /// Smallest component.
    fn min_element(self) -> f32;

    /// Largest component.
    fn max_element(self) -> f32;

    /// `true` if every component is finite.
    fn is_finite(self) -> bool;

    /// Euclidean length.
    fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// `true` if every component is within `tolerance` of zero.
    fn is_nearly_zero(self, tolerance: f32) -> bool;
}

impl OvoidVector for Vec2 {
    const KIND: VectorKind = VectorKind::Two;
    const ZERO: Self = Vec2::ZERO;

    type Rotation = Mat2;

    const IDENTITY: Mat2 = Mat2::IDENTITY;

    fn from_world(v: Vec3, plane: OvoidPlane) -> Result<Self, MathError> {
        let [a, b] = plane.axes().ok_or(MathError::UnspecifiedProjectionPlane)?;
        Ok(Vec2::new(v[a], v[b]))
    }

    fn rotation_from_world(rotation: Quat, plane: OvoidPlane) -> Result<Mat2, MathError> {
        let q = rotation.normalize();
        // Twist component about the plane normal. A positive turn about +Y
        // carries +X towards -Z, so it reads as clockwise in (x, z).
        let (along_normal, sign) = match plane {
            OvoidPlane::XY => (q.z, 1.0),
            OvoidPlane::XZ => (q.y, -1.0),
            OvoidPlane::YZ => (q.x, 1.0),
            OvoidPlane::None => return Err(MathError::UnspecifiedProjectionPlane),
        };
        let angle = 2.0 * along_normal.atan2(q.w);
        Ok(Mat2::from_angle(sign * angle))
    }

    fn from_local_xy(x: f32, y: f32) -> Self {
        Vec2::new(x, y)
    }

    fn rotate(rotation: Mat2, v: Self) -> Self {
        rotation * v
    }

    fn unrotate(rotation: Mat2, v: Self) -> Self {
        rotation.transpose() * v
    }

    fn dot(self, rhs: Self) -> f32 {
        Vec2::dot(self, rhs)
    }

    fn min_element(self) -> f32 {
        Vec2::min_element(self)
    }

    fn max_element(self) -> f32 {
        Vec2::max_element(self)
    }

    fn is_finite(self) -> bool {
        Vec2::is_finite(self)
    }

    fn is_nearly_zero(self, tolerance: f32) -> bool {
        self.abs().max_element() <= tolerance
    }
}

impl OvoidVector for Vec3 {
    const KIND: VectorKind = VectorKind::Three;
    const ZERO: Self = Vec3::ZERO;

    type Rotation = Quat;

    const IDENTITY: Quat = Quat::IDENTITY;

    fn from_world(v: Vec3, _plane: OvoidPlane) -> Result<Self, MathError> {
        Ok(v)
    }

    fn rotation_from_world(rotation: Quat, _plane: OvoidPlane) -> Result<Quat, MathError> {
        Ok(rotation.normalize())
    }

    fn from_local_xy(x: f32, y: f32) -> Self {
        Vec3::new(x, y, 0.0)
    }

    fn rotate(rotation: Quat, v: Self) -> Self {
        rotation * v
    }

    fn unrotate(rotation: Quat, v: Self) -> Self {
        rotation.conjugate() * v
    }

    fn dot(self, rhs: Self) -> f32 {
        Vec3::dot(self, rhs)
    }

    fn min_element(self) -> f32 {
        Vec3::min_element(self)
    }

    fn max_element(self) -> f32 {
        Vec3::max_element(self)
    }

    fn is_finite(self) -> bool {
        Vec3::is_finite(self)
    }

    fn is_nearly_zero(self, tolerance: f32) -> bool {
        self.abs().max_element() <= tolerance
    }
}
