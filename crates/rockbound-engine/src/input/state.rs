//! Keyboard state derived from the event stream.
//!
//! Frame lifecycle: `apply()` the frame's events, run one or more fixed
//! steps querying `is_held` / `was_pressed`, call `end_step()` after each.
//! A press is visible to exactly one step.

use std::collections::HashSet;

use super::queue::InputEvent;

#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<u32>,
    pressed: HashSet<u32>,
    released: HashSet<u32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a frame's events into the held set and the edge sets.
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    // Auto-repeat KeyDown is not a new press.
                    if self.held.insert(key_code) {
                        self.pressed.insert(key_code);
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    if self.held.remove(&key_code) {
                        self.released.insert(key_code);
                    }
                }
            }
        }
    }

    /// Clear the edge sets once a step has observed them.
    pub fn end_step(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn is_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// Any of `key_codes` is held.
    pub fn any_held(&self, key_codes: &[u32]) -> bool {
        key_codes.iter().any(|k| self.held.contains(k))
    }

    /// Rising edge: went down since the previous step.
    pub fn was_pressed(&self, key_code: u32) -> bool {
        self.pressed.contains(&key_code)
    }

    pub fn was_released(&self, key_code: u32) -> bool {
        self.released.contains(&key_code)
    }

    /// Drop all state (scene change, focus loss).
    pub fn reset(&mut self) {
        self.held.clear();
        self.end_step();
    }
}
