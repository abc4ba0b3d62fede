//! Ray / ovoid intersection.
//!
//! The ray is moved into the ovoid's radii-normalized local frame, where the
//! ovoid becomes the unit circle (2D) or unit sphere (3D), and the quadratic
//! `|o + t·d|² = 1` is solved there. The hit is mapped back to world space
//! with the ovoid's rotation and center.
//!
//! Near-singular configurations are not errors: when no usable hit exists
//! the ovoid center is returned so the query stays total.

use glam::Vec3;
use tracing::trace;

use crate::error::MathError;
use crate::ovoid::{Ovoid, OvoidPathData, OvoidPlane};
use crate::vector::OvoidVector;

/// Per-component tolerance under which a reference location counts as
/// "not provided".
pub const REFERENCE_ZERO_TOLERANCE: f32 = 1e-4;

/// Forward vectors shorter than this cannot be normalized.
pub const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// Ray denominators at or below this fall back to the ovoid center.
pub const DENOMINATOR_EPSILON: f32 = f32::MIN_POSITIVE;

/// Origins whose radii-normalized squared distance from the center exceeds
/// 1 by no more than this count as lying on the boundary.
pub const BOUNDARY_EPSILON: f32 = 1e-4;

impl<V: OvoidVector> Ovoid<V> {
    /// Intersect a ray with this ovoid's boundary.
    ///
    /// The ray starts at `reference`, or at the center when `reference` is
    /// `None` or nearly zero, and points along `forward` (normalized here).
    ///
    /// From an origin inside or on the ovoid the exit point is returned.
    /// From an origin outside, the first point the ray enters through is
    /// returned; if the ray misses or the ovoid lies behind the origin, the
    /// center is returned instead.
    ///
    /// # Errors
    ///
    /// [`MathError::InvalidDirection`] if `forward` is non-finite or
    /// (near) zero-length.
    pub fn intersect(&self, forward: V, reference: Option<V>) -> Result<V, MathError> {
        let direction = normalize_direction(forward)?;
        let origin = match reference {
            Some(r) if !r.is_nearly_zero(REFERENCE_ZERO_TOLERANCE) => r,
            _ => self.center(),
        };

        let local_origin = V::unrotate(self.rotation(), origin - self.center());
        let local_direction = V::unrotate(self.rotation(), direction);

        let Some(t) = solve_local(local_origin, local_direction, self.radii()) else {
            trace!(?origin, ?direction, "no usable ovoid hit, falling back to center");
            return Ok(self.center());
        };

        let local_hit = local_origin + local_direction * t;
        Ok(self.center() + V::rotate(self.rotation(), local_hit))
    }
}

/// Intersect a ray with an ovoid described in world space.
///
/// `V` selects the query kind. For `Vec2` queries, `plane` picks which two
/// world axes of `data` are used; it is ignored for `Vec3` queries. A
/// zero `reference` means "start at the center".
///
/// # Errors
///
/// - [`MathError::UnspecifiedProjectionPlane`] for a `Vec2` query with
///   [`OvoidPlane::None`].
/// - [`MathError::DegenerateOvoid`] if a used radius is not positive.
/// - [`MathError::InvalidDirection`] if `forward` cannot be normalized.
pub fn compute_ovoid_intersection<V: OvoidVector>(
    data: &OvoidPathData,
    forward: V,
    reference: V,
    plane: OvoidPlane,
) -> Result<V, MathError> {
    data.resolve::<V>(plane)?.intersect(forward, Some(reference))
}

/// 3D convenience wrapper around [`compute_ovoid_intersection`] with the
/// ray starting at the ovoid center.
///
/// # Errors
///
/// See [`compute_ovoid_intersection`].
pub fn compute_ovoid_intersection_3d(data: &OvoidPathData, forward: Vec3) -> Result<Vec3, MathError> {
    compute_ovoid_intersection(data, forward, Vec3::ZERO, OvoidPlane::None)
}

fn normalize_direction<V: OvoidVector>(forward: V) -> Result<V, MathError> {
    if !forward.is_finite() {
        return Err(MathError::InvalidDirection);
    }
    let length = forward.length();
    if length < MIN_DIRECTION_LENGTH {
        return Err(MathError::InvalidDirection);
    }
    Ok(forward * length.recip())
}

/// Ray parameter `t` at which `origin + t·direction` meets the ovoid
/// boundary, if any. Both vectors are in the ovoid's unrotated local frame.
fn solve_local<V: OvoidVector>(origin: V, direction: V, radii: V) -> Option<f32> {
    // Stretching by the largest radius keeps the direction's length >= 1 in
    // this frame, so it cannot underflow however large the radii are.
    let max_radius = radii.max_element();
    let stretched = direction * max_radius / radii;
    let denominator = stretched.length();
    if denominator <= DENOMINATOR_EPSILON {
        return None;
    }
    let w = stretched * denominator.recip();
    let u = origin / radii;

    // Solve |u + s·w|² = 1 with |w| = 1.
    let b = u.dot(w);
    let c = u.dot(u) - 1.0;

    let s = if c <= BOUNDARY_EPSILON {
        // Inside or on the boundary: take the exit root.
        (-b + (b * b - c.min(0.0)).sqrt()).max(0.0)
    } else {
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let entry = -b - discriminant.sqrt();
        if entry < 0.0 {
            return None;
        }
        entry
    };
    Some(s * max_radius / denominator)
}
