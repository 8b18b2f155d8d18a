use std::collections::VecDeque;

use crate::device::PointerEvent;

/// Abstraction over pointer event access for testability.
pub trait PointerBackend {
    /// Take the next pending pointer event, if any.
    fn next_event(&mut self) -> Option<PointerEvent>;
}

/// Virtual pointer backend for testing.
#[derive(Debug, Clone, Default)]
pub struct VirtualPointerBackend {
    queue: VecDeque<PointerEvent>,
}

impl VirtualPointerBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push_back(event);
    }

    /// Queue a primary button press at `(x, y)`.
    pub fn click(&mut self, x: i32, y: i32) {
        self.push(PointerEvent::primary_down(x, y));
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl PointerBackend for VirtualPointerBackend {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.queue.pop_front()
    }
}
