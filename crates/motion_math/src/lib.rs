//! # motion_math
//!
//! Geometry and animation helpers for real-time code. Re-exports [`glam`]
//! for linear algebra and provides two primitives on top of it:
//!
//! - [`vector`]: 2D/3D query classification ([`OvoidVector`], [`VectorKind`]).
//! - [`ovoid`]: ellipse/ellipsoid descriptors ([`OvoidPathData`], [`Ovoid`]).
//! - [`intersect`]: ray/ovoid intersection ([`compute_ovoid_intersection`]).
//! - [`decay`]: frame-rate-independent exponential decay ([`exponential_decay`]).
//! - [`rotator`]: Euler angles in degrees ([`Rotator`]).
//! - [`config`] / [`follow`]: dead zone thresholds and smooth follow.
//! - [`error`]: error types.
//!
//! Intersection and decay are pure functions over `Copy` values with no
//! shared state, so they are safe to call from any thread.
//!
//! ## Usage
//!
//! ```rust
//! use motion_math::{OvoidPathData, Vec3, compute_ovoid_intersection_3d};
//!
//! let path = OvoidPathData::new(Vec3::ZERO, Vec3::new(100.0, 50.0, 50.0));
//! let hit = compute_ovoid_intersection_3d(&path, Vec3::X).unwrap();
//! assert!(hit.abs_diff_eq(Vec3::new(100.0, 0.0, 0.0), 1e-3));
//! ```

pub mod config;
pub mod decay;
pub mod error;
pub mod follow;
pub mod intersect;
pub mod ovoid;
pub mod rotator;
pub mod vector;

// Re-export glam types for convenience.
pub use glam::{EulerRot, Mat2, Quat, Vec2, Vec3, Vec4};

pub use config::DeadZoneConfig;
pub use decay::{Decay, decay_alpha, exponential_decay};
pub use error::{ConfigError, MathError};
pub use follow::Follow;
pub use intersect::{compute_ovoid_intersection, compute_ovoid_intersection_3d};
pub use ovoid::{Ovoid, OvoidPathData, OvoidPlane};
pub use rotator::Rotator;
pub use vector::{OvoidVector, VectorKind, kind_of};
