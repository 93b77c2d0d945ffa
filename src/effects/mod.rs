// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven and timed visual effects.
//!
//! Each scroll-driven effect implements [`ScrollEffect`] and is registered in
//! [`Effects`], which the application feeds with every new viewport. The
//! effects are independent: none reads another's state.
//!
//! Timed effects that do not depend on scrolling ([`typewriter`] and
//! [`smooth_scroll`]) are driven directly by the application tick.

pub mod active_section;
pub mod backdrop;
pub mod parallax;
pub mod reveal;
pub mod smooth_scroll;
pub mod typewriter;

pub use active_section::ActiveSection;
pub use backdrop::NavbarBackdrop;
pub use parallax::Parallax;
pub use reveal::Reveal;
pub use smooth_scroll::SmoothScroll;
pub use typewriter::Typewriter;

use crate::page::PageLayout;
use std::time::Instant;

/// Visible part of the scrollable page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Distance scrolled from the top of the page.
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(offset_y: f32, width: f32, height: f32) -> Self {
        Self {
            offset_y,
            width,
            height,
        }
    }

    /// Top and bottom page coordinates of the viewport after shrinking it
    /// by the given margins.
    #[must_use]
    pub fn inset(&self, top_margin: f32, bottom_margin: f32) -> (f32, f32) {
        let top = self.offset_y + top_margin;
        let bottom = (self.offset_y + self.height - bottom_margin).max(top);
        (top, bottom)
    }
}

/// An effect recomputed whenever the page scrolls.
pub trait ScrollEffect {
    fn name(&self) -> &'static str;

    /// Updates the effect for the new viewport. Returns `true` when its
    /// visible output changed.
    fn on_scroll(&mut self, viewport: &Viewport, layout: &PageLayout, now: Instant) -> bool;
}

/// Every scroll-driven effect of the page.
#[derive(Debug, Default)]
pub struct Effects {
    pub active_section: ActiveSection,
    pub reveal: Reveal,
    pub parallax: Parallax,
    pub backdrop: NavbarBackdrop,
}

impl Effects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn registered(&mut self) -> [&mut dyn ScrollEffect; 4] {
        [
            &mut self.active_section,
            &mut self.reveal,
            &mut self.parallax,
            &mut self.backdrop,
        ]
    }

    /// Feeds a viewport to every effect. Returns the names of the effects
    /// whose output changed.
    pub fn on_scroll(
        &mut self,
        viewport: &Viewport,
        layout: &PageLayout,
        now: Instant,
    ) -> Vec<&'static str> {
        self.registered()
            .into_iter()
            .filter_map(|effect| {
                effect
                    .on_scroll(viewport, layout, now)
                    .then(|| effect.name())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_viewport() {
        let viewport = Viewport::new(100.0, 1024.0, 800.0);
        assert_eq!(viewport.inset(80.0, 80.0), (180.0, 820.0));
    }

    #[test]
    fn inset_never_inverts() {
        let viewport = Viewport::new(0.0, 300.0, 100.0);
        let (top, bottom) = viewport.inset(80.0, 80.0);
        assert_eq!(top, bottom);
    }

    #[test]
    fn first_scroll_reports_changed_effects() {
        let layout = PageLayout::new(4, 6, 4);
        let mut effects = Effects::new();
        let now = Instant::now();

        let changed = effects.on_scroll(&Viewport::new(0.0, 1280.0, 1200.0), &layout, now);
        assert!(changed.contains(&"active-section"));
        assert!(changed.contains(&"reveal"));

        let changed = effects.on_scroll(&Viewport::new(0.0, 1280.0, 1200.0), &layout, now);
        assert!(changed.is_empty());
    }
}
