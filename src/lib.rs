//! Venture - a deterministic 2D platformer body simulation
//!
//! Core modules:
//! - `sim`: Per-frame simulation (ground probe, integration, collision, animation, camera, goals)
//! - `tuning`: Data-driven physics constants
//! - `error`: Configuration and level loading errors

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, LevelError};
pub use tuning::Tuning;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Default frame timestep used by the headless runner (60 Hz)
    pub const DEFAULT_DT: f32 = 1.0 / 60.0;

    /// Default body full width (world units)
    pub const BODY_WIDTH: f32 = 0.2;
    /// Default body full height (world units)
    pub const BODY_HEIGHT: f32 = 0.2;

    /// Gravity (negative = down), units/s²
    pub const GRAVITY: f32 = -9.8 * 2.5;
    /// Horizontal run speed, units/s
    pub const MOVE_SPEED: f32 = 2.0;
    /// Vertical velocity applied on jump, units/s
    pub const JUMP_STRENGTH: f32 = 6.0;

    /// Ground probe offset below the body's bottom edge (fraction of body height)
    pub const PROBE_GAP: f32 = 0.05;
    /// Ground probe width (fraction of body width)
    pub const PROBE_WIDTH: f32 = 0.9;
    /// Ground probe half-height (world units)
    pub const PROBE_HALF_HEIGHT: f32 = 0.005;

    /// Seconds per animation frame
    pub const FRAME_DURATION: f32 = 0.1;
    /// Horizontal speed above which a grounded body counts as running
    pub const RUN_THRESHOLD: f32 = 0.01;

    /// Overlaps thinner than this are treated as touching, not penetrating
    pub const CONTACT_SKIN: f32 = 1e-4;

    /// Smallest accepted half-extent for any box
    pub const MIN_HALF_EXTENT: f32 = 1e-4;
}

/// Clamp a caller-supplied timestep: negative, NaN or infinite becomes zero
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 { 0.0 } else { dt }
}

/// True when both components are finite
#[inline]
pub fn is_finite_vec(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

/// True when a full body size is finite and each half-extent reaches `MIN_HALF_EXTENT`
#[inline]
pub fn is_valid_body_size(size: Vec2) -> bool {
    is_finite_vec(size) && (size * 0.5).cmpge(Vec2::splat(consts::MIN_HALF_EXTENT)).all()
}
