// SPDX-License-Identifier: MPL-2.0
//! Controller input port.
//!
//! The host adapter polls its controller hardware and forwards raw button
//! state; [`ButtonTracker`] reduces that stream to rising edges so holding a
//! button down navigates once, not once per poll.

/// Navigation buttons on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Advances to the next image.
    Primary,
    /// Steps back to the previous image.
    Secondary,
}

/// Controller connection lifecycle as reported by the host's SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Scanning,
    Connecting,
    Connected,
}

/// Tracks per-button pressed state and reports rising edges.
#[derive(Debug, Default, Clone)]
pub struct ButtonTracker {
    pressed: [bool; 2],
}

impl ButtonTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current pressed state for `button` and returns `true`
    /// only on the transition from released to pressed.
    pub fn track(&mut self, button: Button, pressed: bool) -> bool {
        let slot = &mut self.pressed[button as usize];
        let edge = pressed && !*slot;
        *slot = pressed;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_is_an_edge() {
        let mut tracker = ButtonTracker::new();
        assert!(tracker.track(Button::Primary, true));
    }

    #[test]
    fn held_button_reports_a_single_edge() {
        let mut tracker = ButtonTracker::new();
        assert!(tracker.track(Button::Primary, true));
        assert!(!tracker.track(Button::Primary, true));
        assert!(!tracker.track(Button::Primary, true));
    }

    #[test]
    fn release_rearms_the_edge() {
        let mut tracker = ButtonTracker::new();
        assert!(tracker.track(Button::Secondary, true));
        assert!(!tracker.track(Button::Secondary, false));
        assert!(tracker.track(Button::Secondary, true));
    }

    #[test]
    fn buttons_are_tracked_independently() {
        let mut tracker = ButtonTracker::new();
        assert!(tracker.track(Button::Primary, true));
        assert!(tracker.track(Button::Secondary, true));
        assert!(!tracker.track(Button::Primary, true));
    }

    #[test]
    fn release_is_never_an_edge() {
        let mut tracker = ButtonTracker::new();
        assert!(!tracker.track(Button::Primary, false));
        tracker.track(Button::Primary, true);
        assert!(!tracker.track(Button::Primary, false));
    }
}
