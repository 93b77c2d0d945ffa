// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! The tick subscription only runs while something is animating or waiting
//! on a timer, so an idle page does not wake up.

use super::Message;
use crate::app::config::{SYSTEM_THEME_POLL_INTERVAL, TICK_INTERVAL};
use iced::{event, time, window, Subscription};

/// Routes window resizes to the application.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates a periodic tick subscription while timed work is pending.
pub fn create_tick_subscription(has_pending_work: bool) -> Subscription<Message> {
    if has_pending_work {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Polls the system color scheme while no preference is pinned.
pub fn create_system_theme_subscription(follows_system: bool) -> Subscription<Message> {
    if follows_system {
        time::every(SYSTEM_THEME_POLL_INTERVAL).map(|_| Message::PollSystemTheme)
    } else {
        Subscription::none()
    }
}
