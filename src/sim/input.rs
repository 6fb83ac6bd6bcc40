//! Input translation
//!
//! Turns a raw button snapshot into a horizontal velocity, a facing change
//! and an edge-triggered jump.

use serde::{Deserialize, Serialize};

use super::state::{Body, Contact};

/// Buttons held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Horizontal part of the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    pub velocity_x: f32,
    /// None keeps the previous facing
    pub facing: Option<Facing>,
}

/// Map left/right to a velocity. Both or neither held cancel out and leave
/// the facing unchanged.
pub fn horizontal_intent(input: &InputSnapshot, move_speed: f32) -> MoveIntent {
    match (input.left, input.right) {
        (true, false) => MoveIntent {
            velocity_x: -move_speed,
            facing: Some(Facing::Left),
        },
        (false, true) => MoveIntent {
            velocity_x: move_speed,
            facing: Some(Facing::Right),
        },
        _ => MoveIntent {
            velocity_x: 0.0,
            facing: None,
        },
    }
}

/// Fire a jump on the press edge. Returns true if the jump fired.
///
/// Releasing the button always re-arms the latch. A held button fires at
/// most once until it is released.
pub fn jump_edge(body: &mut Body, jump_held: bool, jump_strength: f32) -> bool {
    if !jump_held {
        body.jump_latch = false;
        return false;
    }
    if body.jump_latch || !body.contact.is_grounded() {
        return false;
    }

    body.vel.y = jump_strength;
    body.contact = Contact::Airborne;
    body.jump_latch = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn grounded_body() -> Body {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(0.1));
        body.contact = Contact::Grounded;
        body
    }

    #[test]
    fn test_horizontal_intent() {
        let left = InputSnapshot {
            left: true,
            ..Default::default()
        };
        let intent = horizontal_intent(&left, 2.0);
        assert_eq!(intent.velocity_x, -2.0);
        assert_eq!(intent.facing, Some(Facing::Left));

        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };
        let intent = horizontal_intent(&right, 2.0);
        assert_eq!(intent.velocity_x, 2.0);
        assert_eq!(intent.facing, Some(Facing::Right));
    }

    #[test]
    fn test_both_directions_cancel() {
        let both = InputSnapshot {
            left: true,
            right: true,
            jump: false,
        };
        let intent = horizontal_intent(&both, 2.0);
        assert_eq!(intent.velocity_x, 0.0);
        assert_eq!(intent.facing, None);

        let none = horizontal_intent(&InputSnapshot::default(), 2.0);
        assert_eq!(none.velocity_x, 0.0);
        assert_eq!(none.facing, None);
    }

    #[test]
    fn test_jump_fires_once_per_press() {
        let mut body = grounded_body();
        assert!(jump_edge(&mut body, true, 6.0));
        assert_eq!(body.vel.y, 6.0);
        assert_eq!(body.contact, Contact::Airborne);
        assert!(body.jump_latch);

        // Landed again but still holding: no second jump
        body.contact = Contact::Grounded;
        body.vel.y = 0.0;
        assert!(!jump_edge(&mut body, true, 6.0));
        assert_eq!(body.vel.y, 0.0);

        // Release re-arms
        assert!(!jump_edge(&mut body, false, 6.0));
        assert!(!body.jump_latch);
        assert!(jump_edge(&mut body, true, 6.0));
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(0.1));
        assert!(!jump_edge(&mut body, true, 6.0));
        assert_eq!(body.vel.y, 0.0);
        assert!(!body.jump_latch);
    }
}
