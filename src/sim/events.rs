//! Simulation events and the sink they are pushed into
//!
//! The host decides the transport. A tick emits each event synchronously,
//! at most once per occurrence.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

/// Something the host may want to react to (sound, level completion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Body left the ground from an edge-triggered jump
    Jump,
    /// Body became grounded this tick after being airborne
    Land,
    /// Body touched goal `index` for the first time since the level loaded
    GoalReached { index: usize },
}

impl GameEvent {
    /// Sound cue for the host's audio layer
    pub fn sound_name(&self) -> Option<&'static str> {
        match self {
            GameEvent::Jump => Some("jump"),
            GameEvent::Land => Some("land"),
            GameEvent::GoalReached { .. } => None,
        }
    }
}

/// Receiver for events produced during a tick
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Queue transport: events accumulate until the host drains them
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Channel transport. A disconnected receiver drops the event.
impl EventSink for Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        if self.send(event).is_err() {
            log::debug!("Event receiver gone, dropping {:?}", event);
        }
    }
}

/// Callback transport
pub struct Callback<F>(pub F);

impl<F: FnMut(GameEvent)> EventSink for Callback<F> {
    fn emit(&mut self, event: GameEvent) {
        (self.0)(event);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_sound_names() {
        assert_eq!(GameEvent::Jump.sound_name(), Some("jump"));
        assert_eq!(GameEvent::Land.sound_name(), Some("land"));
        assert_eq!(GameEvent::GoalReached { index: 0 }.sound_name(), None);
    }

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = mpsc::channel();
        let mut sink = tx;
        sink.emit(GameEvent::Land);
        sink.emit(GameEvent::GoalReached { index: 2 });
        let got: Vec<_> = rx.try_iter().collect();
        assert_eq!(got, vec![GameEvent::Land, GameEvent::GoalReached { index: 2 }]);
    }

    #[test]
    fn test_callback_sink() {
        let mut count = 0;
        {
            let mut sink = Callback(|_e: GameEvent| count += 1);
            sink.emit(GameEvent::Jump);
            sink.emit(GameEvent::Jump);
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut sink = tx;
        sink.emit(GameEvent::Jump);
    }
}
