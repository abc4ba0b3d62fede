//! Frame-rate-independent exponential decay interpolation.
//!
//! One step integrates `d/dt value = rate · (target − value)` exactly over
//! `dt`:
//!
//! ```text
//! value' = target + (current − target) · exp(−rate · dt)
//! ```
//!
//! Because `exp(−r·(dt₁+dt₂)) = exp(−r·dt₁) · exp(−r·dt₂)`, any split of the
//! same elapsed time into frames lands on the same value.
//!
//! ```rust
//! use motion_math::exponential_decay;
//!
//! let next = exponential_decay(0.0_f32, 10.0, 1.0, 1.0);
//! assert!((next - 6.321).abs() < 1e-3);
//! ```

use glam::{Quat, Vec2, Vec3, Vec4};

use crate::rotator::Rotator;

/// A value that can decay towards a target.
pub trait Decay: Copy {
    /// Move towards `target`, leaving `remaining` (in `[0, 1]`) of the gap.
    #[must_use]
    fn decay_towards(self, target: Self, remaining: f32) -> Self;

    /// One decay step over `dt` at `rate`. Parameters are already validated.
    #[must_use]
    fn decay_step(self, target: Self, dt: f32, rate: f32) -> Self {
        self.decay_towards(target, (-rate * dt).exp())
    }
}

macro_rules! impl_linear_decay {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decay for $ty {
                fn decay_towards(self, target: Self, remaining: f32) -> Self {
                    target + (self - target) * remaining
                }
            }
        )*
    };
}

impl_linear_decay!(f32, Vec2, Vec3, Vec4);

impl Decay for f64 {
    fn decay_towards(self, target: Self, remaining: f32) -> Self {
        target + (self - target) * f64::from(remaining)
    }

    fn decay_step(self, target: Self, dt: f32, rate: f32) -> Self {
        let remaining = (-f64::from(rate) * f64::from(dt)).exp();
        target + (self - target) * remaining
    }
}

impl Decay for Quat {
    fn decay_towards(self, target: Self, remaining: f32) -> Self {
        // Stay in the same hemisphere so the arc is at most 180 degrees.
        let target = if self.dot(target) < 0.0 { -target } else { target };
        self.slerp(target, 1.0 - remaining).normalize()
    }
}

impl Decay for Rotator {
    fn decay_towards(self, target: Self, remaining: f32) -> Self {
        Rotator::from_quat(self.to_quat().decay_towards(target.to_quat(), remaining))
    }
}

/// Advance `current` one step towards `target`.
///
/// `dt` is the elapsed time in seconds and `rate` how quickly the gap
/// closes. A non-positive (or NaN) `dt` or `rate` returns `current`
/// unchanged.
#[must_use]
pub fn exponential_decay<T: Decay>(current: T, target: T, dt: f32, rate: f32) -> T {
    if !(rate > 0.0 && dt > 0.0) {
        return current;
    }
    current.decay_step(target, dt, rate)
}

/// Fraction of the gap closed by one step: `exponential_decay(0, 1, dt, rate)`.
#[must_use]
pub fn decay_alpha(dt: f32, rate: f32) -> f32 {
    exponential_decay(0.0, 1.0, dt, rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_step() {
        let v = exponential_decay(0.0_f32, 10.0, 1.0, 1.0);
        let expected = 10.0 - 10.0 * (-1.0_f32).exp();
        assert!((v - expected).abs() < 1e-5);
        assert!((v - 6.32).abs() < 1e-2);
    }

    #[test]
    fn test_degenerate_parameters_are_noop() {
        assert_eq!(exponential_decay(3.0_f32, 10.0, 0.0, 1.0), 3.0);
        assert_eq!(exponential_decay(3.0_f32, 10.0, -1.0, 1.0), 3.0);
        assert_eq!(exponential_decay(3.0_f32, 10.0, 1.0, 0.0), 3.0);
        assert_eq!(exponential_decay(3.0_f32, 10.0, 1.0, -5.0), 3.0);
        assert_eq!(exponential_decay(3.0_f32, 10.0, f32::NAN, 1.0), 3.0);
        assert_eq!(exponential_decay(3.0_f32, 10.0, 1.0, f32::NAN), 3.0);
    }

    #[test]
    fn test_fixed_point() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(exponential_decay(v, v, 0.016, 8.0), v);
    }

    #[test]
    fn test_vector_step_each_component() {
        let v = exponential_decay(Vec2::ZERO, Vec2::new(10.0, -10.0), 1.0, 1.0);
        assert!(v.abs_diff_eq(Vec2::new(6.3212, -6.3212), 1e-3));
    }

    #[test]
    fn test_f64_step() {
        let v = exponential_decay(0.0_f64, 10.0, 1.0, 1.0);
        assert!((v - 6.3212).abs() < 1e-3);
        // The decay factor itself is computed in double precision.
        let v = exponential_decay(0.0_f64, 1.0, 1.0, 1.0);
        assert!((v - (1.0 - (-1.0_f64).exp())).abs() < 1e-15);
    }

    #[test]
    fn test_vec4_step() {
        let current = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let target = Vec4::new(0.0, 1.0, 0.0, 1.0);
        let v = exponential_decay(current, target, 1.0, 1.0);
        let remaining = (-1.0_f32).exp();
        assert!(v.abs_diff_eq(Vec4::new(remaining, 1.0 - remaining, 0.0, 1.0), 1e-6));
        assert_eq!(exponential_decay(current, target, 0.0, 1.0), current);
    }

    #[test]
    fn test_split_steps_match_single_step() {
        let single = exponential_decay(0.0_f32, 100.0, 0.5, 3.0);
        let mut split = 0.0_f32;
        for _ in 0..10 {
            split = exponential_decay(split, 100.0, 0.05, 3.0);
        }
        assert!((single - split).abs() < 1e-3);
    }

    #[test]
    fn test_decay_alpha() {
        assert_eq!(decay_alpha(0.0, 1.0), 0.0);
        assert!((decay_alpha(1.0, 1.0) - (1.0 - (-1.0_f32).exp())).abs() < 1e-6);
        assert!(decay_alpha(100.0, 100.0) > 0.9999);
    }

    #[test]
    fn test_quat_takes_short_way_round() {
        let current = Quat::from_rotation_z(170.0_f32.to_radians());
        let target = Quat::from_rotation_z(-170.0_f32.to_radians());
        let step = exponential_decay(current, target, 1.0, 1.0);
        // The short arc passes through 180 degrees, not through zero.
        let travelled = current.angle_between(step);
        let remaining = step.angle_between(target);
        assert!((travelled + remaining - 20.0_f32.to_radians()).abs() < 1e-3);
        assert!(travelled > 0.0);
    }

    #[test]
    fn test_quat_opposite_hemisphere_target() {
        let current = Quat::from_rotation_x(0.3);
        let target = -Quat::from_rotation_x(0.9);
        let step = exponential_decay(current, target, 0.1, 2.0);
        assert!(step.is_normalized());
        assert!(current.angle_between(step) < 0.6 + 1e-4);
    }

    #[test]
    fn test_rotator_crosses_seam() {
        let current = Rotator::new(0.0, 170.0, 0.0);
        let target = Rotator::new(0.0, -170.0, 0.0);
        let step = exponential_decay(current, target, 10.0, 10.0);
        assert!(step.angle_to(target) < 0.1);
        let half = exponential_decay(current, target, 1.0, 2.0_f32.ln());
        assert!((half.yaw.abs() - 180.0).abs() < 1e-2, "{half:?}");
    }
}
