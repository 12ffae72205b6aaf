//! Keyboard mapping
//!
//! Keys arrive as DOM `KeyboardEvent.key` strings and are queued into the next
//! frame's `TickInput`.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Jump,
    Restart,
}

impl Key {
    /// Map a DOM key identifier; anything else is ignored
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            " " => Some(Key::Jump),
            "r" | "R" => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Record a key press for the next tick
pub fn queue_key(input: &mut TickInput, key: Key) {
    match key {
        Key::Jump => input.jumps = input.jumps.saturating_add(1),
        Key::Restart => input.restart = true,
    }
}
