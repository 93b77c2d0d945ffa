// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm actions (a sent message, a
//! settings problem) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels and
//!   its enter/shown/leave timeline
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```
//! use iced_folio::ui::notifications::{Manager, Severity};
//! use std::time::{Duration, Instant};
//!
//! let now = Instant::now();
//! let mut manager = Manager::new();
//! manager.emit(Severity::Success, "Message sent", now);
//!
//! manager.tick(now + Duration::from_secs(10));
//! assert!(!manager.has_notifications());
//! ```
//!
//! # Design Considerations
//!
//! - Every toast leaves after 5s, whatever its severity
//! - Max visible toasts: 3 (others are queued)
//! - Position: top-right corner, below the navbar

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity, Stage};
pub use toast::Toast;
