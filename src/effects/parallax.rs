// SPDX-License-Identifier: MPL-2.0
//! Parallax translation of decorative layers.

use super::{ScrollEffect, Viewport};
use crate::app::config::DEFAULT_PARALLAX_SPEED;
use crate::page::PageLayout;
use std::time::Instant;

/// Decorative layers that move with the page at their own speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Large blob behind the hero headline.
    HeroBackdrop,
    /// Small accent blob next to the hero headline.
    HeroAccent,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::HeroBackdrop, Layer::HeroAccent];

    /// Speed factor of the layer. Layers without their own speed use the
    /// default.
    #[must_use]
    pub fn speed(self) -> f32 {
        match self {
            Layer::HeroBackdrop => DEFAULT_PARALLAX_SPEED,
            Layer::HeroAccent => 0.3,
        }
    }
}

/// Vertical translation of a layer scrolled by `offset_y` pixels.
#[must_use]
pub fn translation(offset_y: f32, speed: f32) -> f32 {
    -(offset_y * speed)
}

#[derive(Debug, Clone, Default)]
pub struct Parallax {
    offset_y: f32,
}

impl Parallax {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current translation of `layer`, in pixels (negative moves up).
    #[must_use]
    pub fn offset(&self, layer: Layer) -> f32 {
        translation(self.offset_y, layer.speed())
    }
}

impl ScrollEffect for Parallax {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn on_scroll(&mut self, viewport: &Viewport, _layout: &PageLayout, _now: Instant) -> bool {
        let changed = self.offset_y != viewport.offset_y;
        self.offset_y = viewport.offset_y;
        changed
    }
}
