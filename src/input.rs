//! Keyboard mapping
//!
//! Turns raw key-down/key-up events (DOM `KeyboardEvent.key` names) into the
//! `InputIntent` snapshot the simulation consumes.

use serde::{Deserialize, Serialize};

use crate::sim::InputIntent;

/// Game controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Jump,
    Fire,
}

impl Key {
    /// Map a key name to a control. Unmapped keys give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Jump),
            " " | "Space" | "Spacebar" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Currently held controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    intent: InputIntent,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns false for keys the game ignores.
    pub fn key_down(&mut self, name: &str) -> bool {
        self.set(name, true)
    }

    /// Record a key release. Returns false for keys the game ignores.
    pub fn key_up(&mut self, name: &str) -> bool {
        self.set(name, false)
    }

    pub fn press(&mut self, key: Key) {
        self.apply(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.apply(key, false);
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.intent = InputIntent::default();
    }

    /// Snapshot for the next tick
    pub fn intent(&self) -> InputIntent {
        self.intent
    }

    fn set(&mut self, name: &str, down: bool) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.apply(key, down);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.intent.left = down,
            Key::Right => self.intent.right = down,
            Key::Jump => self.intent.jump = down,
            Key::Fire => self.intent.fire = down,
        }
    }
}
