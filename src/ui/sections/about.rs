// SPDX-License-Identifier: MPL-2.0
//! About section: short biography followed by the stat cards.

use super::{brand_text, card_slot, grid, secondary_text, section_frame, Message, PageContext};
use crate::page::{CardId, CardKind, Grid, SectionId, ABOUT_TEXT_HEIGHT, GRID_GAP};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let biography = ctx.portfolio.about.paragraphs.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, paragraph| {
            column.push(
                Text::new(paragraph.as_str())
                    .size(typography::BODY_LG)
                    .style(secondary_text),
            )
        },
    );

    let cards = ctx
        .portfolio
        .stats
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            let card = CardId::new(CardKind::Stat, index);
            let (alpha, _) = ctx.reveal.appearance(card, ctx.now);
            let content = Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .push(
                    Text::new(stat.value.as_str())
                        .size(typography::TITLE_LG)
                        .style(brand_text(alpha)),
                )
                .push(Text::new(stat.label.as_str()).size(typography::BODY_SM));
            card_slot(ctx, card, Grid::STATS, content)
        })
        .collect();

    let body = Column::new()
        .spacing(GRID_GAP)
        .push(
            Container::new(biography)
                .width(Length::Fill)
                .height(Length::Fixed(ABOUT_TEXT_HEIGHT))
                .clip(true),
        )
        .push(grid(Grid::STATS, cards));

    section_frame(
        ctx.layout,
        SectionId::About,
        "Turning numbers into decisions",
        true,
        body,
    )
}
