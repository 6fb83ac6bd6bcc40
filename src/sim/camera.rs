//! Camera controller
//!
//! Locks horizontally onto the body with no smoothing. The vertical position
//! is fixed when the level loads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::CameraBounds;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraState {
    pub pos: Vec2,
}

impl CameraState {
    /// Camera for a freshly spawned body
    pub fn at_spawn(spawn: Vec2, bounds: Option<CameraBounds>) -> Self {
        let mut camera = Self { pos: spawn };
        camera.follow(spawn.x, bounds);
        camera
    }

    pub fn follow(&mut self, body_x: f32, bounds: Option<CameraBounds>) {
        self.pos.x = match bounds {
            Some(bounds) => bounds.clamp(body_x),
            None => body_x,
        };
    }
}
