// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls underneath two overlays: the fixed navbar and the toast
//! column in the top-right corner.

use super::Message;
use crate::effects::Viewport;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::sections::{self, PageContext};
use iced::widget::{mouse_area, scrollable, Column, Container, Id, Stack};
use iced::{Element, Length};
use std::time::Instant;

const PAGE_SCROLLABLE: &str = "page";

/// Identifier of the page scrollable, target of smooth scrolling.
pub fn page_scrollable_id() -> Id {
    Id::new(PAGE_SCROLLABLE)
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub page: PageContext<'a>,
    pub navbar: NavbarViewContext<'a>,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

fn to_viewport(viewport: scrollable::Viewport) -> Viewport {
    let bounds = viewport.bounds();
    Viewport::new(viewport.absolute_offset().y, bounds.width, bounds.height)
}

/// Renders the page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = scrollable(sections::view(&ctx.page).map(Message::Page))
        .id(page_scrollable_id())
        .on_scroll(|viewport| Message::PageScrolled(to_viewport(viewport)))
        .width(Length::Fill)
        .height(Length::Fill);

    let page = mouse_area(page).on_press(Message::PagePressed);

    // The navbar only claims its own height so presses below it reach the page.
    let navbar = Column::new()
        .width(Length::Fill)
        .push(navbar::view(ctx.navbar).map(Message::Navbar));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.now).map(Message::Notification);

    Container::new(Stack::new().push(page).push(navbar).push(toasts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
