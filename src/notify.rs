// 🔔 Notification Banner - Transient status message
// Two states: hidden, or shown with a message and kind. A shown banner
// auto-hides 3 seconds after the most recent show() call; showing again
// re-arms the deadline so the newest message gets its full display window.

use std::time::{Duration, Instant};

/// How long a banner stays visible after the latest show()
pub const DISPLAY_FOR: Duration = Duration::from_secs(3);

// ============================================================================
// BANNER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct Banner {
    shown: Option<Shown>,
}

#[derive(Debug)]
struct Shown {
    message: String,
    kind: Kind,
    deadline: Instant,
}

impl Banner {
    pub fn new() -> Self {
        Banner::default()
    }

    /// Show a message, replacing any pending one and re-arming the deadline
    pub fn show(&mut self, message: impl Into<String>, kind: Kind) {
        self.show_at(message, kind, Instant::now());
    }

    /// Hide the banner if its deadline has passed
    ///
    /// Driven from the UI event loop; a no-op while hidden or still within
    /// the display window.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Current message and kind, if shown
    pub fn current(&self) -> Option<(&str, Kind)> {
        self.shown.as_ref().map(|s| (s.message.as_str(), s.kind))
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    fn show_at(&mut self, message: impl Into<String>, kind: Kind, now: Instant) {
        self.shown = Some(Shown {
            message: message.into(),
            kind,
            deadline: now + DISPLAY_FOR,
        });
    }

    fn tick_at(&mut self, now: Instant) {
        if let Some(shown) = &self.shown {
            if now >= shown.deadline {
                self.shown = None;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let banner = Banner::new();
        assert!(!banner.is_visible());
        assert!(banner.current().is_none());
    }

    #[test]
    fn test_show_then_expire() {
        let t0 = Instant::now();
        let mut banner = Banner::new();
        banner.show_at("Feedback submitted successfully!", Kind::Success, t0);

        assert_eq!(
            banner.current(),
            Some(("Feedback submitted successfully!", Kind::Success))
        );

        // still within the window
        banner.tick_at(t0 + Duration::from_secs(2));
        assert!(banner.is_visible());

        // past the deadline
        banner.tick_at(t0 + DISPLAY_FOR);
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_second_show_rearms_deadline() {
        let t0 = Instant::now();
        let mut banner = Banner::new();
        banner.show_at("first", Kind::Success, t0);

        // 2s later a newer message arrives; its window restarts from here
        let t1 = t0 + Duration::from_secs(2);
        banner.show_at("second", Kind::Error, t1);

        // the first message's deadline must not hide the second
        banner.tick_at(t0 + DISPLAY_FOR);
        assert_eq!(banner.current(), Some(("second", Kind::Error)));

        banner.tick_at(t1 + DISPLAY_FOR);
        assert!(!banner.is_visible());
    }
}
