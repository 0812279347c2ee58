/// Input event types the engine queues for the next update.
/// Generic, no game-specific semantics.
///
/// Keyboard input is not queued: it lands directly in
/// [`KeyState`](crate::input::keys::KeyState), since only the current
/// press state matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at viewport pixel coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at viewport pixel coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to viewport pixel coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Scroll wheel. Positive `delta` scrolls away from the page (zoom out).
    Wheel { delta: f32 },
    /// The render surface was resized to `width` × `height` pixels.
    Resize { width: f32, height: f32 },
    /// The user picked entry `choice` of options-panel control `control`.
    OptionSelected { control: u32, choice: u32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and clears them each update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop all pending events, keeping the allocation.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Wheel { delta: -120.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn option_selected_event() {
        let mut q = InputQueue::new();
        q.push(InputEvent::OptionSelected { control: 1, choice: 0 });
        let events = q.drain();
        assert_eq!(events.len(), 1);
        match events[0] {
            InputEvent::OptionSelected { control, choice } => {
                assert_eq!(control, 1);
                assert_eq!(choice, 0);
            }
            _ => panic!("Expected OptionSelected event"),
        }
    }

    #[test]
    fn clear_empties_queue() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Resize { width: 800.0, height: 600.0 });
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.iter().count(), 0);
    }
}
