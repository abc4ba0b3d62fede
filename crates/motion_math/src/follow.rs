//! Smooth follow with a dead zone.
//!
//! Plain exponential decay approaches its target forever. [`DeadZoneConfig::follow`]
//! snaps to the target once the remaining distance drops under the
//! threshold for that value's type, which also stops jitter at rest.

use glam::{Quat, Vec2, Vec3};
use tracing::trace;

use crate::config::DeadZoneConfig;
use crate::decay::{Decay, exponential_decay};
use crate::rotator::Rotator;

/// A [`Decay`] value with a distance measure and a dead zone threshold.
pub trait Follow: Decay {
    /// Distance from `self` to `target` in the unit the threshold uses.
    fn distance(self, target: Self) -> f32;

    /// The threshold that applies to this type.
    fn dead_zone(config: &DeadZoneConfig) -> f32;
}

impl Follow for f32 {
    fn distance(self, target: Self) -> f32 {
        (self - target).abs()
    }

    fn dead_zone(config: &DeadZoneConfig) -> f32 {
        config.float
    }
}

impl Follow for Vec2 {
    fn distance(self, target: Self) -> f32 {
        Vec2::distance(self, target)
    }

    fn dead_zone(config: &DeadZoneConfig) -> f32 {
        config.vector
    }
}

impl Follow for Vec3 {
    fn distance(self, target: Self) -> f32 {
        Vec3::distance(self, target)
    }

    fn dead_zone(config: &DeadZoneConfig) -> f32 {
        config.vector
    }
}

impl Follow for Quat {
    fn distance(self, target: Self) -> f32 {
        self.angle_between(target).to_degrees()
    }

    fn dead_zone(config: &DeadZoneConfig) -> f32 {
        config.rotator
    }
}

impl Follow for Rotator {
    fn distance(self, target: Self) -> f32 {
        self.angle_to(target)
    }

    fn dead_zone(config: &DeadZoneConfig) -> f32 {
        config.rotator
    }
}

impl DeadZoneConfig {
    /// One smooth-follow step from `current` towards `target`.
    ///
    /// Non-positive `dt` or `rate` leave `current` untouched. Otherwise,
    /// within the dead zone the target is returned as is; outside it one
    /// [`exponential_decay`] step is taken.
    #[must_use]
    pub fn follow<T: Follow>(&self, current: T, target: T, dt: f32, rate: f32) -> T {
        if !(rate > 0.0 && dt > 0.0) {
            return current;
        }
        let distance = current.distance(target);
        if distance < T::dead_zone(self) {
            trace!(distance, "inside dead zone, snapping to target");
            return target;
        }
        exponential_decay(current, target, dt, rate)
    }
}
