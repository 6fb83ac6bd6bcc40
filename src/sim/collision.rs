//! Ground probing and per-axis collision resolution
//!
//! The body is resolved one axis at a time: the vertical pass runs to
//! completion before any horizontal movement. Each pass snaps the body out
//! of a collider by the penetration depth along that axis only, placing it
//! flush against the face it hit.
//!
//! Overlaps no deeper than [`CONTACT_SKIN`] count as touching. A face left
//! exactly flush by one pass would otherwise read as a sliver of overlap to
//! the next pass on the other axis and throw the body sideways.

use glam::Vec2;

use super::aabb::{Aabb, Axis};
use super::level::Collider;
use super::state::Body;
use crate::consts::CONTACT_SKIN;
use crate::tuning::Tuning;

/// Where the collider sat relative to the body when it was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Collider under the body (landing)
    Below,
    /// Collider over the body (head bump)
    Above,
    Left,
    Right,
}

/// A correction applied to the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the level's collider list
    pub collider: usize,
    pub side: Side,
    /// Depth removed along the resolved axis
    pub penetration: f32,
}

/// Thin box just under the body's feet, narrower than the body so that
/// walls it is flush against never count as support
pub fn probe_box(body: &Body, tuning: &Tuning) -> Aabb {
    let height = body.half.y * 2.0;
    let gap = tuning.probe_gap * height;
    let half = Vec2::new(body.half.x * tuning.probe_width, tuning.probe_half_height);
    let center = Vec2::new(body.pos.x, body.pos.y - body.half.y - gap);
    Aabb::new(center, half)
}

/// Top edge of the highest collider the probe touches, if any
pub fn ground_probe(body: &Body, colliders: &[Collider], tuning: &Tuning) -> Option<f32> {
    let probe = probe_box(body, tuning);
    colliders
        .iter()
        .filter(|c| probe.overlaps(c))
        .map(|c| c.top())
        .reduce(f32::max)
}

/// Vertical pass
///
/// Walks colliders in level order and applies the first correction found:
/// - collider below and body not rising: land on its top, zero downward velocity
/// - collider above: push under it, zero upward velocity
///
/// A collider below while the body is rising is tangential contact and is
/// skipped.
pub fn resolve_y(body: &mut Body, colliders: &[Collider]) -> Option<Hit> {
    for (index, collider) in colliders.iter().enumerate() {
        let bounds = body.aabb();
        if !bounds.overlaps_with_skin(collider, CONTACT_SKIN) {
            continue;
        }

        let penetration = bounds.penetration(collider, Axis::Y);

        if body.pos.y - collider.center.y > 0.0 {
            if body.vel.y > 0.0 {
                continue;
            }
            body.pos.y = collider.top() + body.half.y;
            body.vel.y = 0.0;
            log::trace!("Landed on collider {} (penetration {})", index, penetration);
            return Some(Hit {
                collider: index,
                side: Side::Below,
                penetration,
            });
        }

        body.pos.y = collider.bottom() - body.half.y;
        body.vel.y = body.vel.y.min(0.0);
        log::trace!("Head bump on collider {} (penetration {})", index, penetration);
        return Some(Hit {
            collider: index,
            side: Side::Above,
            penetration,
        });
    }
    None
}

/// Horizontal pass: push out of every overlapping collider in level order.
/// Any correction stops horizontal motion. Returns the number of corrections.
pub fn resolve_x(body: &mut Body, colliders: &[Collider]) -> usize {
    let mut corrections = 0;
    for (index, collider) in colliders.iter().enumerate() {
        let bounds = body.aabb();
        if !bounds.overlaps_with_skin(collider, CONTACT_SKIN) {
            continue;
        }

        let penetration = bounds.penetration(collider, Axis::X);
        let side = if body.pos.x - collider.center.x > 0.0 {
            body.pos.x = collider.max().x + body.half.x;
            Side::Left
        } else {
            body.pos.x = collider.min().x - body.half.x;
            Side::Right
        };
        body.vel.x = 0.0;
        corrections += 1;
        log::trace!(
            "Wall on the {:?} from collider {} (penetration {})",
            side,
            index,
            penetration
        );
    }
    corrections
}
