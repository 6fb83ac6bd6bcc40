//! Per-frame simulation tick
//!
//! One call runs the whole pipeline in a fixed order:
//! 1. Input: horizontal velocity, facing, edge-triggered jump
//! 2. Ground probe (before gravity, so this tick's integration sees it)
//! 3. Vertical axis: gravity, move, resolve
//! 4. Horizontal axis: move, resolve
//! 5. Land event, animation, camera, goals
//!
//! The vertical axis is settled before the body moves sideways. Resolving
//! horizontal motion against a body that has not landed yet lets wall
//! corrections disturb the vertical state.

use super::collision::{Hit, Side, ground_probe, resolve_x, resolve_y};
use super::events::{EventSink, GameEvent};
use super::goal;
use super::input::{Facing, InputSnapshot, horizontal_intent, jump_edge};
use super::state::{Body, Contact, SimState};
use crate::sanitize_dt;

/// Advance the simulation by `dt` seconds. Negative or NaN `dt` is treated
/// as zero. Events are pushed into `events` before this returns.
pub fn tick<S: EventSink + ?Sized>(
    state: &mut SimState,
    input: &InputSnapshot,
    dt: f32,
    events: &mut S,
) {
    let dt = sanitize_dt(dt);
    let SimState {
        tuning,
        level,
        body,
        animation,
        camera,
        tick_count,
    } = state;

    *tick_count += 1;
    let was_grounded = body.is_grounded();

    // --- INPUT ---
    let intent = horizontal_intent(input, tuning.move_speed);
    body.vel.x = intent.velocity_x;
    if let Some(facing) = intent.facing {
        animation.facing_left = facing == Facing::Left;
    }
    if jump_edge(body, input.jump, tuning.jump_strength) {
        log::debug!("Jump at ({}, {})", body.pos.x, body.pos.y);
        events.emit(GameEvent::Jump);
    }

    // --- VERTICAL ---
    let support = ground_probe(body, &level.colliders, tuning);
    apply_gravity(body, support.is_some(), tuning.gravity, dt);
    body.contact = match support {
        Some(top) if body.vel.y <= 0.0 => {
            // Sit exactly on the support instead of hovering in the probe gap
            body.pos.y = top + body.half.y;
            Contact::Grounded
        }
        _ => Contact::Airborne,
    };
    body.pos.y += body.vel.y * dt;
    if let Some(Hit {
        side: Side::Below, ..
    }) = resolve_y(body, &level.colliders)
    {
        body.contact = Contact::Grounded;
    }

    // --- HORIZONTAL ---
    body.pos.x += body.vel.x * dt;
    resolve_x(body, &level.colliders);

    // --- DERIVED STATE ---
    if !was_grounded && body.is_grounded() {
        log::debug!("Land at ({}, {})", body.pos.x, body.pos.y);
        events.emit(GameEvent::Land);
    }
    animation.update(body, dt, tuning);
    camera.follow(body.pos.x, level.camera_bounds);
    goal::evaluate(&mut level.goals, &body.aabb(), events);
}

/// Gravity only acts on an unsupported body. A supported body drops any
/// downward velocity but keeps upward velocity so a jump can leave.
fn apply_gravity(body: &mut Body, supported: bool, gravity: f32, dt: f32) {
    if supported {
        body.vel.y = body.vel.y.max(0.0);
    } else {
        body.vel.y += gravity * dt;
    }
}
