// SPDX-License-Identifier: MPL-2.0
//! Animated scrolling to a section.
//!
//! Navigation links scroll so that the section's top edge lands just below
//! the fixed navbar. The offset is interpolated with an ease-in-out curve and
//! the application applies each sample through a scroll operation.

use crate::app::config::{SMOOTH_SCROLL_DURATION, SMOOTH_SCROLL_GAP_PX};
use crate::page::{PageLayout, SectionId, NAVBAR_HEIGHT};
use std::time::{Duration, Instant};

/// Scroll offset that brings `section` under the navbar.
///
/// Clamped to the scrollable range of a viewport `viewport_height` tall.
#[must_use]
pub fn target_for(section: SectionId, layout: &PageLayout, viewport_height: f32) -> Option<f32> {
    let region = layout.section(section)?;
    let target = (region.top - NAVBAR_HEIGHT - SMOOTH_SCROLL_GAP_PX).max(0.0);
    Some(target.min(layout.max_offset(viewport_height)))
}

/// Cubic ease-in-out over `t ∈ [0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f32,
    to: f32,
    started: Instant,
    /// Last offset handed out by `sample`.
    applied: f32,
}

/// Distance between a reported offset and the animated one that still
/// counts as the animation's own scroll.
const DRIFT_TOLERANCE_PX: f32 = 1.0;

/// A running scroll animation, if any.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    animation: Option<Animation>,
    duration: Duration,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(SMOOTH_SCROLL_DURATION)
    }
}

impl SmoothScroll {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            animation: None,
            duration,
        }
    }

    /// Starts scrolling from `from` to `to`, replacing any running animation.
    pub fn start(&mut self, from: f32, to: f32, now: Instant) {
        tracing::debug!(from, to, "smooth scroll");
        self.animation = Some(Animation {
            from,
            to,
            started: now,
            applied: from,
        });
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.animation.is_some()
    }

    /// Stops the animation.
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    /// Cancels the animation when the page reports an offset it did not
    /// apply, i.e. the user scrolled by hand. Returns `true` if it was
    /// cancelled.
    pub fn interrupted_by(&mut self, offset_y: f32) -> bool {
        let drifted = self
            .animation
            .is_some_and(|animation| (offset_y - animation.applied).abs() > DRIFT_TOLERANCE_PX);
        if drifted {
            tracing::debug!(offset_y, "smooth scroll interrupted");
            self.cancel();
        }
        drifted
    }

    /// Offset to apply at `now`. The animation ends once a sample reaches
    /// the target.
    pub fn sample(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation.as_mut()?;
        let elapsed = now.saturating_duration_since(animation.started);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        if t >= 1.0 {
            let target = animation.to;
            self.animation = None;
            return Some(target);
        }
        animation.applied = animation.from + (animation.to - animation.from) * ease_in_out(t);
        Some(animation.applied)
    }
}
