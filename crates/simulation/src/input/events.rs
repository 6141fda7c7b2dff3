use bevy::prelude::*;

/// Host-assigned identifier of a touch contact.
pub type FingerId = u64;

/// Raw pointer input, in screen pixels with the origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    TouchStarted { finger: FingerId, position: Vec2 },
    TouchMoved { finger: FingerId, position: Vec2 },
    TouchEnded { finger: FingerId, position: Vec2 },
    /// A tap already recognised by the host (e.g. a mouse click).
    Tap { position: Vec2 },
}

/// Input pushed by the host between frames, polled once per frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
