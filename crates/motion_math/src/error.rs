//! Error types for intersection queries and configuration loading.

/// Errors returned by the ovoid intersection functions.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    /// The forward vector is zero-length or contains NaN/infinite components.
    #[error("invalid direction: forward vector must be finite and non-zero")]
    InvalidDirection,

    /// At least one radius is zero, negative or non-finite.
    #[error("degenerate ovoid: every radius must be positive, smallest was {min_radius}")]
    DegenerateOvoid {
        /// The smallest radius, or NaN if a radius was not finite.
        min_radius: f32,
    },

    /// A 2D query was made against 3D ovoid data without choosing a plane.
    #[error("unspecified projection plane for a 2D ovoid query")]
    UnspecifiedProjectionPlane,
}

/// Errors that can occur while loading a [`DeadZoneConfig`](crate::DeadZoneConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse dead zone config: {0}")]
    Json(#[from] serde_json::Error),

    /// A threshold was negative or non-finite.
    #[error("invalid dead zone threshold `{field}`: {value}")]
    InvalidThreshold {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
}
