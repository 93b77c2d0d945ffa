// SPDX-License-Identifier: MPL-2.0
//! Fade-in of cards as they scroll into view.
//!
//! Cards start hidden and are revealed the first time enough of them is on
//! screen. A revealed card never hides again. Skill cards start their fade
//! with a delay proportional to their index so a row appears one card after
//! the other.

use super::{ScrollEffect, Viewport};
use crate::app::config::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_FADE, REVEAL_STAGGER, REVEAL_THRESHOLD};
use crate::page::{CardId, CardKind, PageLayout};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Distance a card slides up while fading in.
pub const REVEAL_SLIDE_PX: f32 = 30.0;

#[derive(Debug, Clone)]
pub struct Reveal {
    /// Fade start of every revealed card.
    started: HashMap<CardId, Instant>,
    threshold: f32,
    bottom_margin: f32,
    stagger: Duration,
    fade: Duration,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            started: HashMap::new(),
            threshold: REVEAL_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN_PX,
            stagger: REVEAL_STAGGER,
            fade: REVEAL_FADE,
        }
    }
}

impl Reveal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay before the fade of `card` starts.
    #[must_use]
    pub fn delay_for(&self, card: CardId) -> Duration {
        match card.kind {
            CardKind::Skill => self
                .stagger
                .saturating_mul(u32::try_from(card.index).unwrap_or(u32::MAX)),
            CardKind::Stat | CardKind::Project => Duration::ZERO,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, card: CardId) -> bool {
        self.started.contains_key(&card)
    }

    /// Fade progress of `card` at `now`, from 0 (hidden) to 1.
    #[must_use]
    pub fn progress(&self, card: CardId, now: Instant) -> f32 {
        let Some(&start) = self.started.get(&card) else {
            return 0.0;
        };
        if now < start {
            return 0.0;
        }
        let fade = self.fade.as_secs_f32();
        if fade <= 0.0 {
            return 1.0;
        }
        let linear = (now.duration_since(start).as_secs_f32() / fade).min(1.0);
        ease_out(linear)
    }

    /// Opacity and upward offset for rendering `card`.
    #[must_use]
    pub fn appearance(&self, card: CardId, now: Instant) -> (f32, f32) {
        let progress = self.progress(card, now);
        (progress, (1.0 - progress) * REVEAL_SLIDE_PX)
    }

    /// Whether some fade is still running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started.values().any(|&start| now < start + self.fade)
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

impl ScrollEffect for Reveal {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn on_scroll(&mut self, viewport: &Viewport, layout: &PageLayout, now: Instant) -> bool {
        let (top, bottom) = viewport.inset(0.0, self.bottom_margin);
        let newly_visible: Vec<CardId> = layout
            .cards()
            .filter(|(card, _)| !self.started.contains_key(card))
            .filter(|(_, region)| {
                let ratio = region.visible_ratio(top, bottom);
                ratio > 0.0 && ratio >= self.threshold
            })
            .map(|(card, _)| card)
            .collect();

        for card in &newly_visible {
            self.started.insert(*card, now + self.delay_for(*card));
        }
        if !newly_visible.is_empty() {
            tracing::debug!(count = newly_visible.len(), "cards revealed");
        }
        !newly_visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn skill(index: usize) -> CardId {
        CardId::new(CardKind::Skill, index)
    }

    fn region_of(layout: &PageLayout, card: CardId) -> crate::page::Region {
        layout
            .cards()
            .find(|(id, _)| *id == card)
            .map(|(_, region)| region)
            .expect("card exists")
    }

    #[test]
    fn cards_below_the_fold_stay_hidden() {
        let layout = PageLayout::new(4, 6, 4);
        let mut reveal = Reveal::new();
        let now = Instant::now();

        reveal.on_scroll(&Viewport::new(0.0, 1280.0, 700.0), &layout, now);
        assert!(!reveal.is_revealed(skill(0)));
        assert_eq!(reveal.progress(skill(0), now), 0.0);
    }

    #[test]
    fn card_reveals_once_ten_percent_is_inside_margin() {
        let layout = PageLayout::new(4, 6, 4);
        let card = skill(0);
        let region = region_of(&layout, card);
        let mut reveal = Reveal::new();
        let now = Instant::now();

        // Bottom of the shrunk viewport sits 14px into a 150px card: < 10%.
        let height = 700.0;
        let offset = region.top + 14.0 + REVEAL_BOTTOM_MARGIN_PX - height;
        reveal.on_scroll(&Viewport::new(offset, 1280.0, height), &layout, now);
        assert!(!reveal.is_revealed(card));

        // 15px is exactly 10%.
        let offset = region.top + 15.0 + REVEAL_BOTTOM_MARGIN_PX - height;
        assert!(reveal.on_scroll(&Viewport::new(offset, 1280.0, height), &layout, now));
        assert!(reveal.is_revealed(card));
    }

    #[test]
    fn revealed_cards_never_hide_again() {
        let layout = PageLayout::new(4, 6, 4);
        let mut reveal = Reveal::new();
        let now = Instant::now();
        let skills = layout
            .section(crate::page::SectionId::Skills)
            .expect("skills section");

        reveal.on_scroll(&Viewport::new(skills.top, 1280.0, 900.0), &layout, now);
        assert!(reveal.is_revealed(skill(0)));

        assert!(!reveal.on_scroll(&Viewport::new(0.0, 1280.0, 700.0), &layout, now));
        assert!(reveal.is_revealed(skill(0)));
    }

    #[test]
    fn skill_cards_are_staggered() {
        let layout = PageLayout::new(4, 6, 4);
        let mut reveal = Reveal::new();
        let now = Instant::now();
        let skills = layout
            .section(crate::page::SectionId::Skills)
            .expect("skills section");
        reveal.on_scroll(&Viewport::new(skills.top, 1280.0, 900.0), &layout, now);

        assert_eq!(reveal.delay_for(skill(3)), ms(300));
        assert_eq!(reveal.delay_for(CardId::new(CardKind::Project, 3)), Duration::ZERO);

        // Card 2 has not started at +150ms while card 0 has.
        assert!(reveal.progress(skill(0), now + ms(150)) > 0.0);
        assert_eq!(reveal.progress(skill(2), now + ms(150)), 0.0);
        assert!(reveal.progress(skill(2), now + ms(250)) > 0.0);
    }

    #[test]
    fn fade_completes_after_duration() {
        let layout = PageLayout::new(4, 0, 0);
        let mut reveal = Reveal::new();
        let now = Instant::now();
        let stat = CardId::new(CardKind::Stat, 0);
        let region = region_of(&layout, stat);

        reveal.on_scroll(&Viewport::new(region.top, 1280.0, 700.0), &layout, now);
        assert!(reveal.is_animating(now + ms(599)));
        assert_eq!(reveal.appearance(stat, now + ms(600)), (1.0, 0.0));
        assert!(!reveal.is_animating(now + ms(600)));
    }
}
