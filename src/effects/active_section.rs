// SPDX-License-Identifier: MPL-2.0
//! Highlights the navigation link of the section being read.

use super::{ScrollEffect, Viewport};
use crate::app::config::{ACTIVE_SECTION_MARGIN_PX, ACTIVE_SECTION_THRESHOLD};
use crate::page::{PageLayout, SectionId};
use std::time::Instant;

/// Tracks the active section.
///
/// A section is a candidate when at least `threshold` of it lies inside the
/// viewport shrunk by `margin` at the top and bottom. The last candidate in
/// page order wins. When no section qualifies, the previous one stays
/// active.
#[derive(Debug, Clone)]
pub struct ActiveSection {
    current: Option<SectionId>,
    threshold: f32,
    margin: f32,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new(ACTIVE_SECTION_THRESHOLD, ACTIVE_SECTION_MARGIN_PX)
    }
}

impl ActiveSection {
    #[must_use]
    pub fn new(threshold: f32, margin: f32) -> Self {
        Self {
            current: None,
            threshold,
            margin,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    #[must_use]
    pub fn is_active(&self, section: SectionId) -> bool {
        self.current == Some(section)
    }

    /// Section that should be active for `viewport`, if any qualifies.
    #[must_use]
    pub fn candidate(&self, viewport: &Viewport, layout: &PageLayout) -> Option<SectionId> {
        let (top, bottom) = viewport.inset(self.margin, self.margin);
        layout
            .sections()
            .filter(|(_, region)| region.visible_ratio(top, bottom) >= self.threshold)
            .map(|(id, _)| id)
            .last()
    }
}

impl ScrollEffect for ActiveSection {
    fn name(&self) -> &'static str {
        "active-section"
    }

    fn on_scroll(&mut self, viewport: &Viewport, layout: &PageLayout, _now: Instant) -> bool {
        match self.candidate(viewport, layout) {
            Some(section) if self.current != Some(section) => {
                tracing::debug!(section = section.anchor(), "active section");
                self.current = Some(section);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Region;

    fn scroll_to(effect: &mut ActiveSection, layout: &PageLayout, offset: f32, height: f32) -> bool {
        effect.on_scroll(
            &Viewport::new(offset, 1280.0, height),
            layout,
            Instant::now(),
        )
    }

    fn region(layout: &PageLayout, id: SectionId) -> Region {
        layout.section(id).expect("section exists")
    }

    #[test]
    fn top_of_page_highlights_home() {
        let layout = PageLayout::new(4, 6, 4);
        let mut effect = ActiveSection::default();

        assert!(scroll_to(&mut effect, &layout, 0.0, 700.0));
        assert_eq!(effect.current(), Some(SectionId::Home));
    }

    #[test]
    fn last_qualifying_section_wins() {
        let layout = PageLayout::new(4, 6, 4);
        let mut effect = ActiveSection::default();

        // Tall viewport: Home and About both qualify, About comes later.
        assert!(scroll_to(&mut effect, &layout, 0.0, 1200.0));
        assert_eq!(effect.current(), Some(SectionId::About));
    }

    #[test]
    fn scrolling_into_contact_highlights_it() {
        let layout = PageLayout::new(4, 6, 4);
        let mut effect = ActiveSection::default();
        let contact = region(&layout, SectionId::Contact);

        scroll_to(&mut effect, &layout, contact.top, 900.0);
        assert!(effect.is_active(SectionId::Contact));
    }

    #[test]
    fn highlight_is_sticky_when_nothing_qualifies() {
        let layout = PageLayout::new(4, 6, 4);
        let mut effect = ActiveSection::default();
        scroll_to(&mut effect, &layout, 0.0, 700.0);

        // A viewport thinner than both margins sees nothing.
        assert!(!scroll_to(&mut effect, &layout, 2000.0, 100.0));
        assert_eq!(effect.current(), Some(SectionId::Home));
    }

    #[test]
    fn unchanged_section_reports_no_change() {
        let layout = PageLayout::new(4, 6, 4);
        let mut effect = ActiveSection::default();
        scroll_to(&mut effect, &layout, 0.0, 700.0);

        assert!(!scroll_to(&mut effect, &layout, 10.0, 700.0));
    }
}
