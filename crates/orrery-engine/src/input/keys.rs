//! Current keyboard press state.
//!
//! Key-down sets and key-up clears one flag per key identifier. There is no
//! event queue and no edge detection: readers only see what is held right now.
//! Identifiers are the DOM `KeyboardEvent.key` strings, lower-cased, so
//! `"W"` and `"w"` are the same key and arrows read as `"arrowleft"` etc.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as held.
    pub fn press(&mut self, key: &str) {
        self.pressed.insert(key.to_lowercase());
    }

    /// Mark `key` as released. Releasing a key that is not held is a no-op.
    pub fn release(&mut self, key: &str) {
        self.pressed.remove(&key.to_lowercase());
    }

    /// Whether `key` is currently held. `key` must already be lower-case.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// Number of keys currently held.
    pub fn held_count(&self) -> usize {
        self.pressed.len()
    }

    /// Release everything (e.g. when the page loses focus).
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }
}
