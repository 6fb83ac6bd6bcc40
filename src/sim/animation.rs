//! Animation state machine
//!
//! Derives the visual state from the resolved physics state and advances a
//! frame counter. How many frames each state loops over is up to the
//! renderer; the counter only ever increases until the state changes.

use serde::{Deserialize, Serialize};

use super::state::Body;
use crate::sanitize_dt;
use crate::tuning::Tuning;

/// Visual state of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    Run,
    /// Airborne and rising
    Jump,
    /// Airborne and not rising
    Fall,
}

impl AnimState {
    /// Pick the state for a body after collision resolution
    pub fn classify(body: &Body, run_threshold: f32) -> Self {
        if !body.is_grounded() {
            if body.vel.y > 0.0 {
                AnimState::Jump
            } else {
                AnimState::Fall
            }
        } else if body.vel.x.abs() > run_threshold {
            AnimState::Run
        } else {
            AnimState::Idle
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimState::Idle => "idle",
            AnimState::Run => "run",
            AnimState::Jump => "jump",
            AnimState::Fall => "fall",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationState {
    pub state: AnimState,
    pub frame: u32,
    pub facing_left: bool,
    /// Time accumulated toward the next frame
    pub frame_timer: f32,
}

impl AnimationState {
    /// Re-derive the state and advance frames by `dt`
    pub fn update(&mut self, body: &Body, dt: f32, tuning: &Tuning) {
        let next = AnimState::classify(body, tuning.run_threshold);
        if next != self.state {
            self.state = next;
            self.frame = 0;
            self.frame_timer = 0.0;
        }

        let period = tuning.frame_duration;
        self.frame_timer += sanitize_dt(dt);

        // Skip all but the last whole period in one step so the loop stays short
        let bulk = (self.frame_timer / period).floor() - 1.0;
        if bulk >= 1.0 {
            self.frame = self.frame.wrapping_add(bulk as u32);
            self.frame_timer = (self.frame_timer - bulk * period).max(0.0);
        }

        // Loop so a long frame still advances the right number of frames
        while self.frame_timer >= period {
            self.frame_timer -= period;
            self.frame = self.frame.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Contact;
    use glam::Vec2;

    fn body(contact: Contact, vel: Vec2) -> Body {
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(0.1));
        body.contact = contact;
        body.vel = vel;
        body
    }

    #[test]
    fn test_classify() {
        let t = 0.01;
        assert_eq!(AnimState::classify(&body(Contact::Grounded, Vec2::ZERO), t), AnimState::Idle);
        assert_eq!(
            AnimState::classify(&body(Contact::Grounded, Vec2::new(0.005, 0.0)), t),
            AnimState::Idle
        );
        assert_eq!(
            AnimState::classify(&body(Contact::Grounded, Vec2::new(-2.0, 0.0)), t),
            AnimState::Run
        );
        assert_eq!(
            AnimState::classify(&body(Contact::Airborne, Vec2::new(2.0, 3.0)), t),
            AnimState::Jump
        );
        assert_eq!(
            AnimState::classify(&body(Contact::Airborne, Vec2::new(0.0, -1.0)), t),
            AnimState::Fall
        );
    }

    #[test]
    fn test_frames_advance_with_large_dt() {
        let tuning = Tuning {
            frame_duration: 0.125,
            ..Default::default()
        };
        let mut anim = AnimationState::default();
        let idle = body(Contact::Grounded, Vec2::ZERO);
        anim.update(&idle, 0.5, &tuning);
        assert_eq!(anim.state, AnimState::Idle);
        assert_eq!(anim.frame, 4);
        assert_eq!(anim.frame_timer, 0.0);

        anim.update(&idle, 0.0625, &tuning);
        assert_eq!(anim.frame, 4);
        assert_eq!(anim.frame_timer, 0.0625);
    }

    #[test]
    fn test_huge_dt_advances_in_bounded_time() {
        let tuning = Tuning::default();
        let idle = body(Contact::Grounded, Vec2::ZERO);

        let mut anim = AnimationState::default();
        anim.update(&idle, 1.0e8, &tuning);
        assert!(anim.frame > 0);
        assert!(anim.frame_timer >= 0.0 && anim.frame_timer < tuning.frame_duration);

        let mut anim = AnimationState::default();
        anim.update(&idle, f32::INFINITY, &tuning);
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.frame_timer, 0.0);
    }

    #[test]
    fn test_state_change_resets_frame() {
        let tuning = Tuning {
            frame_duration: 0.125,
            ..Default::default()
        };
        let mut anim = AnimationState::default();
        anim.update(&body(Contact::Grounded, Vec2::ZERO), 0.375, &tuning);
        assert_eq!(anim.frame, 3);

        anim.update(&body(Contact::Grounded, Vec2::new(2.0, 0.0)), 0.0625, &tuning);
        assert_eq!(anim.state, AnimState::Run);
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.frame_timer, 0.0625);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(AnimState::Idle.as_str(), "idle");
        assert_eq!(AnimState::Run.as_str(), "run");
        assert_eq!(AnimState::Jump.as_str(), "jump");
        assert_eq!(AnimState::Fall.as_str(), "fall");
    }
}
