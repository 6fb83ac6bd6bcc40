//! Simulation state
//!
//! Everything a tick mutates lives in [`SimState`]. Hosts only get read
//! access between ticks; the pipeline in `tick` is the sole writer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::animation::AnimationState;
use super::camera::CameraState;
use super::level::{Collider, Goal, Level};
use crate::error::LevelError;
use crate::{is_finite_vec, is_valid_body_size};
use crate::tuning::Tuning;

/// Support state of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Contact {
    /// Nothing underneath; gravity applies
    #[default]
    Airborne,
    /// Resting on a collider; a jump may fire from here
    Grounded,
}

impl Contact {
    #[inline]
    pub fn is_grounded(self) -> bool {
        self == Contact::Grounded
    }
}

/// The controllable body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half: Vec2,
    pub contact: Contact,
    /// Set when a jump fires, cleared when the jump input is released
    pub jump_latch: bool,
}

impl Body {
    pub fn new(pos: Vec2, half: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half,
            contact: Contact::Airborne,
            jump_latch: false,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half)
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.contact.is_grounded()
    }
}

/// Complete simulation state for one loaded level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub(crate) tuning: Tuning,
    pub(crate) level: Level,
    pub(crate) body: Body,
    pub(crate) animation: AnimationState,
    pub(crate) camera: CameraState,
    pub(crate) tick_count: u64,
}

impl SimState {
    /// Build a simulation for `level`
    pub fn new(level: Level, tuning: Tuning) -> Result<Self, LevelError> {
        tuning.validate()?;
        let (body, camera) = spawn(&level, &tuning)?;
        Ok(Self {
            tuning,
            level,
            body,
            animation: AnimationState::default(),
            camera,
            tick_count: 0,
        })
    }

    /// Replace the level and reset body, animation, camera and goal flags
    ///
    /// On error the current level stays loaded and nothing changes.
    pub fn load_level(&mut self, mut level: Level) -> Result<(), LevelError> {
        let (body, camera) = spawn(&level, &self.tuning)?;
        for goal in &mut level.goals {
            goal.triggered = false;
        }
        log::info!(
            "Level reloaded: {} colliders, {} goals",
            level.colliders.len(),
            level.goals.len()
        );
        self.level = level;
        self.body = body;
        self.camera = camera;
        self.animation = AnimationState::default();
        self.tick_count = 0;
        Ok(())
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_position(&self) -> Vec2 {
        self.body.pos
    }

    pub fn body_half_extents(&self) -> Vec2 {
        self.body.half
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.level.colliders
    }

    pub fn goals(&self) -> &[Goal] {
        &self.level.goals
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

/// Fresh body and camera for a level
fn spawn(level: &Level, tuning: &Tuning) -> Result<(Body, CameraState), LevelError> {
    let size = level.body_size.unwrap_or(tuning.body_size);
    if !is_valid_body_size(size) {
        return Err(LevelError::DegenerateBody {
            width: size.x,
            height: size.y,
        });
    }

    let spawn = if is_finite_vec(level.spawn) {
        level.spawn
    } else {
        log::warn!("Level spawn {:?} is not finite; using origin", level.spawn);
        Vec2::ZERO
    };

    let body = Body::new(spawn, size * 0.5);
    let camera = CameraState::at_spawn(spawn, level.camera_bounds);
    Ok((body, camera))
}
