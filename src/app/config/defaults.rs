// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all timing and layout constants.
//!
//! This module serves as the single source of truth for the fixed durations
//! and thresholds used by the page behaviors. Constants are organized by
//! category.
//!
//! # Categories
//!
//! - **Contact Form**: Validation limits, character counter tiers
//! - **Submission**: Simulated send latency and success display
//! - **Notifications**: Toast lifetime and slide animations
//! - **Typewriter**: Typing, deleting and pause speeds
//! - **Scroll Effects**: Thresholds and margins for visibility rules
//! - **Theme**: System theme polling

use std::time::Duration;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Minimum number of characters accepted in the message field.
pub const MESSAGE_MIN_CHARS: usize = 20;

/// Maximum number of characters accepted in the message field.
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Above this count the character counter switches to the warning tone.
pub const COUNTER_WARNING_CHARS: usize = 400;

/// Above this count the character counter switches to the danger tone.
pub const COUNTER_DANGER_CHARS: usize = 450;

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Simulated network latency before the message counts as sent.
pub const SEND_DELAY: Duration = Duration::from_millis(2000);

/// Fade-out of the form once the message is sent.
pub const FORM_EXIT: Duration = Duration::from_millis(300);

/// How long the success panel stays up before the form resets.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Slide-in animation of a toast.
pub const NOTIFICATION_ENTER: Duration = Duration::from_millis(100);

/// Time after creation when a toast starts leaving on its own.
pub const NOTIFICATION_AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Slide-out animation of a toast.
pub const NOTIFICATION_LEAVE: Duration = Duration::from_millis(300);

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

// ==========================================================================
// Typewriter Defaults
// ==========================================================================

/// Delay before the first character is typed.
pub const TYPEWRITER_START_DELAY: Duration = Duration::from_millis(1000);

/// Delay between typed characters.
pub const TYPEWRITER_TYPE_DELAY: Duration = Duration::from_millis(100);

/// Delay between deleted characters.
pub const TYPEWRITER_DELETE_DELAY: Duration = Duration::from_millis(50);

/// Pause on a fully typed phrase.
pub const TYPEWRITER_HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Pause on an empty line before the next phrase.
pub const TYPEWRITER_NEXT_PHRASE_DELAY: Duration = Duration::from_millis(500);

/// Caret blink half-period.
pub const TYPEWRITER_CARET_BLINK: Duration = Duration::from_millis(530);

// ==========================================================================
// Scroll Effect Defaults
// ==========================================================================

/// Scroll offset beyond which the navbar turns opaque.
pub const NAVBAR_SOLID_AFTER_PX: f32 = 50.0;

/// Share of a section that must be visible for it to become active.
pub const ACTIVE_SECTION_THRESHOLD: f32 = 0.3;

/// Margin trimmed from the top and bottom of the viewport for the active
/// section rule.
pub const ACTIVE_SECTION_MARGIN_PX: f32 = 80.0;

/// Share of a card that must be visible for it to be revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Margin trimmed from the bottom of the viewport for the reveal rule.
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = 50.0;

/// Extra delay per skill card so they reveal one after another.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Duration of a card fade-in.
pub const REVEAL_FADE: Duration = Duration::from_millis(600);

/// Default parallax speed factor.
pub const DEFAULT_PARALLAX_SPEED: f32 = 0.5;

/// Duration of the animated scroll to a section.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Gap left between the navbar and a section heading after navigation.
pub const SMOOTH_SCROLL_GAP_PX: f32 = 20.0;

/// Window width under which the navigation collapses into a menu.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// ==========================================================================
// Theme Defaults
// ==========================================================================

/// Interval between system theme checks while no preference is stored.
pub const SYSTEM_THEME_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How long the theme toggle shows its spin state after a click.
pub const THEME_TOGGLE_SPIN: Duration = Duration::from_millis(300);

/// Interval of the animation tick while timers are pending.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MESSAGE_MIN_CHARS < MESSAGE_MAX_CHARS);
    assert!(COUNTER_WARNING_CHARS < COUNTER_DANGER_CHARS);
    assert!(COUNTER_DANGER_CHARS < MESSAGE_MAX_CHARS);
    assert!(ACTIVE_SECTION_THRESHOLD > 0.0 && ACTIVE_SECTION_THRESHOLD <= 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleting_is_faster_than_typing() {
        assert!(TYPEWRITER_DELETE_DELAY < TYPEWRITER_TYPE_DELAY);
    }

    #[test]
    fn toast_leaves_after_it_entered() {
        assert!(NOTIFICATION_ENTER < NOTIFICATION_AUTO_DISMISS);
    }
}
