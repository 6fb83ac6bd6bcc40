//! Level store
//!
//! Static geometry the body moves through: an ordered collider list, goal
//! regions, optional horizontal camera bounds and a spawn point. Levels come
//! from a JSON description or are assembled with the builder methods.
//!
//! Loading is forgiving: a malformed collider or goal entry is skipped with a
//! warning instead of failing the whole level.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aabb::Aabb;
use crate::consts::MIN_HALF_EXTENT;
use crate::error::LevelError;
use crate::{is_finite_vec, is_valid_body_size};

/// A static obstacle
pub type Collider = Aabb;

/// A goal region. `triggered` latches on first contact and is only cleared
/// by reloading the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub bounds: Aabb,
    pub triggered: bool,
}

impl Goal {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            triggered: false,
        }
    }
}

/// Horizontal range the camera center is clamped into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraBounds {
    pub min_x: f32,
    pub max_x: f32,
}

impl CameraBounds {
    /// None if the range is inverted or not finite
    pub fn new(min_x: f32, max_x: f32) -> Option<Self> {
        if min_x.is_finite() && max_x.is_finite() && min_x <= max_x {
            Some(Self { min_x, max_x })
        } else {
            None
        }
    }

    #[inline]
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min_x, self.max_x)
    }
}

/// A loaded level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub spawn: Vec2,
    /// Overrides the tuned body size when present
    pub body_size: Option<Vec2>,
    /// Ordered; earlier colliders win ties during vertical resolution
    pub colliders: Vec<Collider>,
    pub goals: Vec<Goal>,
    pub camera_bounds: Option<CameraBounds>,
}

impl Level {
    /// Empty level with the given spawn point
    pub fn new(spawn: Vec2) -> Self {
        Self {
            spawn,
            ..Default::default()
        }
    }

    /// Append a collider (skipped if degenerate)
    pub fn with_collider(mut self, collider: Collider) -> Self {
        if is_valid_box(&collider) {
            self.colliders.push(collider);
        } else {
            log::warn!("Skipping degenerate collider {:?}", collider);
        }
        self
    }

    /// Append a goal region (skipped if degenerate)
    pub fn with_goal(mut self, bounds: Aabb) -> Self {
        if is_valid_box(&bounds) {
            self.goals.push(Goal::new(bounds));
        } else {
            log::warn!("Skipping degenerate goal {:?}", bounds);
        }
        self
    }

    /// Set camera bounds (ignored if inverted or not finite)
    pub fn with_camera_bounds(mut self, min_x: f32, max_x: f32) -> Self {
        self.camera_bounds = CameraBounds::new(min_x, max_x);
        if self.camera_bounds.is_none() {
            log::warn!("Ignoring invalid camera bounds [{}, {}]", min_x, max_x);
        }
        self
    }

    pub fn with_body_size(mut self, size: Vec2) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Parse a level description
    ///
    /// Document-level problems (bad JSON, a non-object root, a degenerate
    /// `player_size`) are errors. Bad collider or goal entries are skipped.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let desc: LevelDesc = serde_json::from_str(json)?;
        desc.into_level()
    }
}

/// True when a box has finite coordinates and usable extents
pub fn is_valid_box(aabb: &Aabb) -> bool {
    is_finite_vec(aabb.center)
        && is_finite_vec(aabb.half)
        && aabb.half.x >= MIN_HALF_EXTENT
        && aabb.half.y >= MIN_HALF_EXTENT
}

#[derive(Debug, Deserialize)]
struct PointDesc {
    x: f32,
    y: f32,
}

impl From<PointDesc> for Vec2 {
    fn from(p: PointDesc) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// `position` is the box center, `size` the full extents
#[derive(Debug, Deserialize)]
struct BoxDesc {
    position: PointDesc,
    size: PointDesc,
}

#[derive(Debug, Deserialize)]
struct BoundsDesc {
    min: PointDesc,
    max: PointDesc,
}

/// Raw document. Entries stay as JSON values so each one can fail alone.
#[derive(Debug, Deserialize)]
struct LevelDesc {
    #[serde(default)]
    spawn: Option<Value>,
    #[serde(default)]
    player_size: Option<PointDesc>,
    #[serde(default)]
    platforms: Vec<Value>,
    #[serde(default)]
    goals: Vec<Value>,
    #[serde(default)]
    bounds: Option<Value>,
}

impl LevelDesc {
    fn into_level(self) -> Result<Level, LevelError> {
        let spawn = match self.spawn {
            Some(value) => match serde_json::from_value::<PointDesc>(value).map(Vec2::from) {
                Ok(p) if is_finite_vec(p) => p,
                _ => {
                    log::warn!("Level spawn is malformed; using origin");
                    Vec2::ZERO
                }
            },
            None => {
                log::warn!("Level has no spawn; using origin");
                Vec2::ZERO
            }
        };

        let mut level = Level::new(spawn);

        if let Some(size) = self.player_size {
            let size = Vec2::from(size);
            if !is_valid_body_size(size) {
                return Err(LevelError::DegenerateBody {
                    width: size.x,
                    height: size.y,
                });
            }
            level.body_size = Some(size);
        }

        for (i, entry) in self.platforms.into_iter().enumerate() {
            match parse_box(entry) {
                Some(collider) => level.colliders.push(collider),
                None => log::warn!("Skipping malformed platform entry {}", i),
            }
        }

        for (i, entry) in self.goals.into_iter().enumerate() {
            match parse_box(entry) {
                Some(bounds) => level.goals.push(Goal::new(bounds)),
                None => log::warn!("Skipping malformed goal entry {}", i),
            }
        }

        if let Some(bounds) = self.bounds {
            match serde_json::from_value::<BoundsDesc>(bounds) {
                Ok(b) => level = level.with_camera_bounds(b.min.x, b.max.x),
                Err(e) => log::warn!("Ignoring malformed level bounds: {}", e),
            }
        }

        log::info!(
            "Loaded level: spawn=({}, {}), {} colliders, {} goals, bounds={:?}",
            level.spawn.x,
            level.spawn.y,
            level.colliders.len(),
            level.goals.len(),
            level.camera_bounds
        );

        Ok(level)
    }
}

fn parse_box(entry: Value) -> Option<Aabb> {
    let desc: BoxDesc = serde_json::from_value(entry).ok()?;
    let aabb = Aabb::from_size(desc.position.into(), desc.size.into());
    is_valid_box(&aabb).then_some(aabb)
}
