//! Goal evaluation
//!
//! A goal fires once per level load: the first tick the body overlaps it.

use super::aabb::Aabb;
use super::events::{EventSink, GameEvent};
use super::level::Goal;

/// Trigger untriggered goals the body overlaps. Returns how many fired.
pub fn evaluate<S: EventSink + ?Sized>(goals: &mut [Goal], body: &Aabb, events: &mut S) -> usize {
    let mut fired = 0;
    for (index, goal) in goals.iter_mut().enumerate() {
        if goal.triggered || !body.overlaps(&goal.bounds) {
            continue;
        }
        goal.triggered = true;
        fired += 1;
        log::info!("Goal {} reached", index);
        events.emit(GameEvent::GoalReached { index });
    }
    fired
}
