//! Platformer simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep, no clocks
//! - Stable iteration order (level collider order)
//! - No rendering, audio or platform dependencies; events go through `EventSink`

pub mod aabb;
pub mod animation;
pub mod camera;
pub mod collision;
pub mod events;
pub mod goal;
pub mod input;
pub mod level;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, Axis};
pub use animation::{AnimState, AnimationState};
pub use camera::CameraState;
pub use collision::{Hit, Side, ground_probe, probe_box, resolve_x, resolve_y};
pub use events::{Callback, EventSink, GameEvent, NullSink};
pub use input::{Facing, InputSnapshot, MoveIntent, horizontal_intent, jump_edge};
pub use level::{CameraBounds, Collider, Goal, Level};
pub use state::{Body, Contact, SimState};
pub use tick::tick;
