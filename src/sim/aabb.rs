//! Axis-aligned bounding boxes
//!
//! Every shape in the simulation is a box described by its center and
//! half-extents:
//! - min = center - half
//! - max = center + half

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Coordinate axis used by the per-axis resolution passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// An axis-aligned box in center/half-extent form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build from a center and full size
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }

    /// Separating-axis test: boxes overlap only if their intervals intersect
    /// strictly on both axes. Touching faces do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_with_skin(other, 0.0)
    }

    /// Overlap test that ignores intersections no deeper than `skin`
    #[inline]
    pub fn overlaps_with_skin(&self, other: &Aabb, skin: f32) -> bool {
        self.penetration(other, Axis::X) > skin && self.penetration(other, Axis::Y) > skin
    }

    /// Overlap depth along one axis: (half_a + half_b) - |center delta|
    ///
    /// Positive means the projected intervals intersect by that much.
    #[inline]
    pub fn penetration(&self, other: &Aabb, axis: Axis) -> f32 {
        let delta = axis.of(self.center) - axis.of(other.center);
        axis.of(self.half) + axis.of(other.half) - delta.abs()
    }
}
