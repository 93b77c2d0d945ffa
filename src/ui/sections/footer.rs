// SPDX-License-Identifier: MPL-2.0
//! Page footer.

use super::{secondary_text, Message, PageContext};
use crate::page::FOOTER_HEIGHT;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Copyright line for `year`.
#[must_use]
pub fn copyright(year: i32, name: &str) -> String {
    format!("© {year} {name}. All rights reserved.")
}

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    Container::new(
        Text::new(copyright(ctx.footer_year, &ctx.portfolio.owner.name))
            .size(typography::BODY_SM)
            .style(secondary_text),
    )
    .width(Length::Fill)
    .height(Length::Fixed(FOOTER_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::section(true))
    .into()
}
