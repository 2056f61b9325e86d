//! Mouse pointer tracking for the cursor glow effect.
//!
//! Every mouse-move event overwrites the recorded position unconditionally;
//! coordinates from the terminal are always well-formed, so there is nothing
//! to validate. The renderer reads the latest position on the next frame.

/// Pointer coordinates in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    /// Column
    pub x: u16,
    /// Row
    pub y: u16,
}

/// Records the most recent pointer position.
///
/// Attached for the lifetime of the TUI session; [`detach`](Self::detach) at
/// teardown makes further events no-ops so a stale handler can never mutate
/// state after the view is gone.
#[derive(Debug)]
pub struct PointerTracker {
    position: PointerPosition,
    attached: bool,
}

impl PointerTracker {
    /// Creates an attached tracker at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: PointerPosition { x: 0, y: 0 },
            attached: true,
        }
    }

    /// Overwrites the position with the event's coordinates.
    pub const fn record(&mut self, x: u16, y: u16) {
        if self.attached {
            self.position = PointerPosition { x, y };
        }
    }

    /// The most recently recorded position.
    #[must_use]
    pub const fn position(&self) -> PointerPosition {
        self.position
    }

    /// Stops accepting events.
    pub const fn detach(&mut self) {
        self.attached = false;
    }

    /// Whether the tracker still accepts events.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_origin() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.position(), PointerPosition { x: 0, y: 0 });
        assert!(tracker.is_attached());
    }

    #[test]
    fn test_latest_event_wins() {
        let mut tracker = PointerTracker::new();
        for i in 0..10u16 {
            tracker.record(i, i * 2);
        }
        assert_eq!(tracker.position(), PointerPosition { x: 9, y: 18 });
    }

    #[test]
    fn test_detached_tracker_ignores_events() {
        let mut tracker = PointerTracker::new();
        tracker.record(5, 7);
        tracker.detach();
        tracker.record(40, 12);
        assert_eq!(tracker.position(), PointerPosition { x: 5, y: 7 });
        assert!(!tracker.is_attached());
    }
}
