// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and removes them once their
//! timeline has run out.

use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE_NOTIFICATIONS` notifications are showing,
    /// it's displayed immediately. Otherwise, it's added to the queue and
    /// shown when space becomes available.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => tracing::warn!(message = notification.message(), "notification"),
            Severity::Success | Severity::Info => {
                tracing::debug!(message = notification.message(), "notification");
            }
        }

        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Creates and pushes a notification. Returns its ID.
    pub fn emit(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        now: Instant,
    ) -> NotificationId {
        let notification = Notification::new(severity, message, now);
        let id = notification.id();
        self.push(notification);
        id
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes every notification whose timeline ended.
    ///
    /// Returns `true` if anything was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        let removed = self.visible.len() < before;
        if removed {
            self.promote_from_queue(now);
        }
        removed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Promotes queued notifications while there is space, starting their
    /// timeline at `now`.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            if let Some(mut notification) = self.queue.pop_front() {
                notification.show(now);
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}
