// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification slides in, stays on screen until its auto-dismiss
//! deadline, slides out, and is then removed. Every severity follows the
//! same timeline.

use crate::app::config::{NOTIFICATION_AUTO_DISMISS, NOTIFICATION_ENTER, NOTIFICATION_LEAVE};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Error => "⚠",
        }
    }
}

/// Animation stage of a notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Sliding in; the payload is the progress from 0 to 1.
    Entering(f32),
    Shown,
    /// Sliding out; the payload is the progress from 0 to 1.
    Leaving(f32),
    Expired,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    /// Start of the on-screen timeline. Reset when a queued notification
    /// becomes visible.
    shown_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>, now: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            shown_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Restarts the timeline, used when leaving the queue.
    pub(super) fn show(&mut self, now: Instant) {
        self.shown_at = now;
    }

    /// Stage of the notification at `now`.
    #[must_use]
    pub fn stage(&self, now: Instant) -> Stage {
        let age = now.saturating_duration_since(self.shown_at);
        let leave_at = NOTIFICATION_AUTO_DISMISS;

        if age < NOTIFICATION_ENTER && NOTIFICATION_ENTER < leave_at {
            Stage::Entering(ratio(age, NOTIFICATION_ENTER))
        } else if age < leave_at {
            Stage::Shown
        } else if age < leave_at + NOTIFICATION_LEAVE {
            Stage::Leaving(ratio(age - leave_at, NOTIFICATION_LEAVE))
        } else {
            Stage::Expired
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.stage(now) == Stage::Expired
    }

    /// Fraction of the toast pushed off-screen at `now`: 1 fully outside,
    /// 0 in place.
    #[must_use]
    pub fn slide(&self, now: Instant) -> f32 {
        match self.stage(now) {
            Stage::Entering(progress) => 1.0 - progress,
            Stage::Shown => 0.0,
            Stage::Leaving(progress) => progress,
            Stage::Expired => 1.0,
        }
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn notification_ids_are_unique() {
        let now = Instant::now();
        let n1 = Notification::new(Severity::Success, "test", now);
        let n2 = Notification::new(Severity::Success, "test", now);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn timeline_stages() {
        let now = Instant::now();
        let notification = Notification::new(Severity::Info, "hello", now);

        assert_eq!(notification.stage(now), Stage::Entering(0.0));
        assert_eq!(notification.stage(now + ms(100)), Stage::Shown);
        assert_eq!(notification.stage(now + ms(4999)), Stage::Shown);
        assert_eq!(notification.stage(now + ms(5000)), Stage::Leaving(0.0));
        assert_eq!(notification.stage(now + ms(5300)), Stage::Expired);
    }

    #[test]
    fn every_severity_expires() {
        let now = Instant::now();
        for severity in [Severity::Info, Severity::Success, Severity::Error] {
            let notification = Notification::new(severity, "bye", now);
            assert!(!notification.is_expired(now + ms(5299)));
            assert!(notification.is_expired(now + ms(5300)));
        }
    }

    #[test]
    fn slide_moves_in_then_out() {
        let now = Instant::now();
        let notification = Notification::new(Severity::Success, "sent", now);

        assert_eq!(notification.slide(now), 1.0);
        assert_eq!(notification.slide(now + ms(2000)), 0.0);
        assert!((notification.slide(now + ms(5150)) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Error.color());
        assert_ne!(Severity::Info.color(), Severity::Error.color());
    }
}
