// SPDX-License-Identifier: MPL-2.0
//! Navbar background: translucent at the top of the page, near-opaque once
//! the page has scrolled.

use super::{ScrollEffect, Viewport};
use crate::app::config::NAVBAR_SOLID_AFTER_PX;
use crate::page::PageLayout;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct NavbarBackdrop {
    solid: bool,
}

impl NavbarBackdrop {
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.solid
    }
}

impl ScrollEffect for NavbarBackdrop {
    fn name(&self) -> &'static str {
        "navbar-backdrop"
    }

    fn on_scroll(&mut self, viewport: &Viewport, _layout: &PageLayout, _now: Instant) -> bool {
        let solid = viewport.offset_y > NAVBAR_SOLID_AFTER_PX;
        let changed = solid != self.solid;
        self.solid = solid;
        changed
    }
}
