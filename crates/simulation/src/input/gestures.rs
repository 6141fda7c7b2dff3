use bevy::prelude::*;

use super::events::{FingerId, InputEvent};

/// Longest press, in seconds, that still counts as a tap.
const TAP_MAX_SECS: f32 = 0.2;
/// How far, in pixels, a finger may drift and still tap.
const TAP_SLOP_PX: f32 = 20.0;

/// Camera intents recognised from raw touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Single-finger drag, in screen pixels since the previous sample.
    Pan { delta: Vec2 },
    /// Change in distance between two fingers, in pixels.
    Pinch { delta: f32 },
    Tap { position: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Contact {
    finger: FingerId,
    position: Vec2,
    down_at: Vec2,
    started_secs: f32,
}

/// Two-slot touch tracker.
///
/// Slot 0 is the primary (panning) finger and slot 1 the secondary one; a
/// second finger switches from panning to pinching. Slots are positional: if
/// the primary finger lifts first the secondary keeps slot 1 and panning
/// waits for a new primary contact.
#[derive(Resource, Debug, Clone, Default)]
pub struct TouchGestures {
    slots: [Option<Contact>; 2],
    pan_from: Option<Vec2>,
    pinch_distance: Option<f32>,
    /// Set once two fingers were down together; suppresses taps until all lift.
    multi_touch: bool,
}

impl TouchGestures {
    pub fn is_panning(&self) -> bool {
        self.pan_from.is_some()
    }

    pub fn is_pinching(&self) -> bool {
        self.slots[0].is_some() && self.slots[1].is_some()
    }

    pub fn active_fingers(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Feed one input event; `now_secs` is the host clock used for taps.
    pub fn apply(&mut self, event: InputEvent, now_secs: f32) -> Option<Gesture> {
        match event {
            InputEvent::TouchStarted { finger, position } => {
                self.touch_started(finger, position, now_secs);
                None
            }
            InputEvent::TouchMoved { finger, position } => self.touch_moved(finger, position),
            InputEvent::TouchEnded { finger, position } => {
                self.touch_ended(finger, position, now_secs)
            }
            InputEvent::Tap { position } => Some(Gesture::Tap { position }),
        }
    }

    fn slot_of(&self, finger: FingerId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.map(|c| c.finger) == Some(finger))
    }

    fn touch_started(&mut self, finger: FingerId, position: Vec2, now_secs: f32) {
        if self.slot_of(finger).is_some() {
            return;
        }
        let contact = Contact {
            finger,
            position,
            down_at: position,
            started_secs: now_secs,
        };
        if self.slots[0].is_none() {
            self.slots[0] = Some(contact);
            if self.slots[1].is_none() {
                self.pan_from = Some(position);
            } else {
                self.pan_from = None;
                self.multi_touch = true;
            }
        } else if self.slots[1].is_none() {
            self.slots[1] = Some(contact);
            self.pan_from = None;
            self.multi_touch = true;
        } else {
            // Third and later fingers are ignored.
            return;
        }
        self.pinch_distance = None;
    }

    fn touch_moved(&mut self, finger: FingerId, position: Vec2) -> Option<Gesture> {
        let slot = self.slot_of(finger)?;
        if let Some(contact) = self.slots[slot].as_mut() {
            contact.position = position;
        }

        if let (Some(a), Some(b)) = (self.slots[0], self.slots[1]) {
            let distance = a.position.distance(b.position);
            return match self.pinch_distance.replace(distance) {
                // First sample only establishes the baseline.
                None => None,
                Some(previous) => Some(Gesture::Pinch {
                    delta: distance - previous,
                }),
            };
        }

        if slot == 0 {
            if let Some(from) = self.pan_from {
                self.pan_from = Some(position);
                return Some(Gesture::Pan {
                    delta: position - from,
                });
            }
        }
        None
    }

    fn touch_ended(&mut self, finger: FingerId, position: Vec2, now_secs: f32) -> Option<Gesture> {
        let slot = self.slot_of(finger)?;
        let contact = self.slots[slot].take()?;
        self.pinch_distance = None;

        if slot == 0 {
            self.pan_from = None;
        } else {
            // Resume panning from wherever the primary finger is now.
            self.pan_from = self.slots[0].map(|c| c.position);
        }

        let tap = !self.multi_touch
            && now_secs - contact.started_secs <= TAP_MAX_SECS
            && position.distance(contact.down_at) <= TAP_SLOP_PX;

        if self.active_fingers() == 0 {
            self.multi_touch = false;
        }

        tap.then_some(Gesture::Tap { position })
    }
}
