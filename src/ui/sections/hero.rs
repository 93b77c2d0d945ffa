// SPDX-License-Identifier: MPL-2.0
//! Hero banner: typewriter headline, calls to action and parallax blobs.

use super::{brand_text, secondary_text, section_length, Message, PageContext};
use crate::effects::parallax::Layer;
use crate::page::{SectionId, NAVBAR_HEIGHT};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Resting distance of each blob from the top of the hero.
fn resting_top(layer: Layer) -> f32 {
    match layer {
        Layer::HeroBackdrop => 360.0,
        Layer::HeroAccent => 120.0,
    }
}

fn blob<'a>(ctx: &PageContext<'_>, layer: Layer) -> Element<'a, Message> {
    let top = (resting_top(layer) + ctx.parallax.offset(layer)).max(0.0);
    let (size, color, alpha, align) = match layer {
        Layer::HeroBackdrop => (
            sizing::HERO_BLOB * 1.6,
            palette::PRIMARY_400,
            0.18,
            alignment::Horizontal::Left,
        ),
        Layer::HeroAccent => (
            sizing::HERO_BLOB,
            palette::PRIMARY_600,
            0.22,
            alignment::Horizontal::Right,
        ),
    };

    let shape = Container::new(Space::new())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(styles::container::blob(color, alpha));

    Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(top)))
        .push(
            Container::new(shape)
                .width(Length::Fill)
                .padding([0.0, spacing::XXL])
                .align_x(align),
        )
        .into()
}

fn headline<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let owner = &ctx.portfolio.owner;
    let caret_alpha = if ctx.typewriter.caret_visible(ctx.now) {
        1.0
    } else {
        0.0
    };

    let typed = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.typewriter.text().to_string())
                .size(typography::DISPLAY)
                .style(brand_text(1.0)),
        )
        .push(
            Text::new("|")
                .size(typography::DISPLAY)
                .style(brand_text(caret_alpha)),
        );

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new("View My Work").size(typography::BODY_LG))
                .on_press(Message::Navigate(SectionId::Projects))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new("Get In Touch").size(typography::BODY_LG))
                .on_press(Message::Navigate(SectionId::Contact))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline),
        );

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(typed)
        .push(Text::new(owner.role.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(owner.tagline.as_str())
                .size(typography::BODY_LG)
                .style(secondary_text),
        )
        .push(Space::new().height(Length::Fixed(spacing::MD)))
        .push(actions)
        .into()
}

/// Renders the hero.
pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let foreground = Container::new(headline(ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(iced::Padding {
            top: NAVBAR_HEIGHT,
            ..iced::Padding::ZERO
        })
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let layers = Layer::ALL
        .into_iter()
        .fold(Stack::new(), |stack, layer| stack.push(blob(ctx, layer)))
        .push(foreground)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(layers)
        .width(Length::Fill)
        .height(section_length(ctx.layout, SectionId::Home))
        .clip(true)
        .style(styles::container::section(false))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_rests_below_accent() {
        assert!(resting_top(Layer::HeroBackdrop) > resting_top(Layer::HeroAccent));
    }
}
