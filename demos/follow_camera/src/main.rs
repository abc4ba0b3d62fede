//! Follow camera demo.
//!
//! Sweeps an aim direction once around a tilted ovoid at 60 Hz. Each frame
//! the aim ray from an off-center pivot is intersected with the ovoid, and
//! the camera's position and facing follow the hit with exponential decay
//! and dead zones. A top-down minimap marker is tracked in the XY plane.
//!
//! Usage: `follow_camera [dead_zone.json]`

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use motion_math::{
    DeadZoneConfig, OvoidPathData, OvoidPlane, Quat, Rotator, Vec2, Vec3, compute_ovoid_intersection,
};

const FRAME_RATE: f32 = 60.0;
const FRAMES: u32 = 240;
const OUTLINE_SEGMENTS: usize = 32;

/// Follow speeds, in 1/s.
const POSITION_RATE: f32 = 4.0;
const ROTATION_RATE: f32 = 8.0;
const MINIMAP_RATE: f32 = 12.0;

fn load_config(path: Option<&Path>) -> Result<DeadZoneConfig> {
    let Some(path) = path else {
        return Ok(DeadZoneConfig::default());
    };
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    DeadZoneConfig::from_json_reader(file).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("follow_camera=info".parse()?))
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    info!(?config, "follow camera starting");

    let path = OvoidPathData::new(Vec3::new(0.0, 0.0, 100.0), OvoidPathData::DEFAULT_RADII)
        .with_rotation(Quat::from_rotation_x(20f32.to_radians()));
    let outline = path.resolve::<Vec3>(OvoidPlane::None)?.outline(OUTLINE_SEGMENTS);
    info!(points = outline.len(), first = ?outline.first(), "sampled ovoid outline");

    // The camera aims from here, off-center inside the ovoid.
    let pivot = Vec3::new(20.0, 10.0, 100.0);

    let dt = FRAME_RATE.recip();
    let mut position = pivot;
    let mut facing = Rotator::ZERO;
    let mut marker = Vec2::ZERO;

    for frame in 0..FRAMES {
        let angle = std::f32::consts::TAU * frame as f32 / FRAMES as f32;
        let aim = path.rotation * Vec3::new(angle.cos(), angle.sin(), 0.0);

        let hit = compute_ovoid_intersection(&path, aim, pivot, OvoidPlane::None)
            .with_context(|| format!("no intersection at frame {frame}"))?;
        let minimap_hit = compute_ovoid_intersection(&path, aim.truncate(), Vec2::ZERO, OvoidPlane::XY)
            .with_context(|| format!("no minimap intersection at frame {frame}"))?;

        position = config.follow(position, hit, dt, POSITION_RATE);
        let to_hit = (hit - position).try_normalize().unwrap_or(Vec3::X);
        let look = Rotator::from_quat(Quat::from_rotation_arc(Vec3::X, to_hit));
        facing = config.follow(facing, look, dt, ROTATION_RATE);
        marker = config.follow(marker, minimap_hit, dt, MINIMAP_RATE);

        debug!(frame, ?hit, ?position, ?facing, ?marker, "frame");
        if frame % FRAME_RATE as u32 == 0 {
            info!(
                frame,
                lag = position.distance(hit),
                yaw = facing.yaw,
                pitch = facing.pitch,
                "camera state"
            );
        }
    }

    info!(?position, ?facing, ?marker, "follow camera finished");
    Ok(())
}
