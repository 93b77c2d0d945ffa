// SPDX-License-Identifier: MPL-2.0
//! Skills section: one card per skill with a level meter.
//!
//! Hovering a card shows the tools behind the skill in a tooltip.

use super::{brand_text, card_slot, grid, section_frame, Message, PageContext};
use crate::content::Skill;
use crate::page::{CardId, CardKind, Grid, SectionId};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

const METER_HEIGHT: f32 = 6.0;

/// Horizontal bar filled up to `level` percent.
fn meter<'a>(level: u8) -> Element<'a, Message> {
    let level = u16::from(level.min(100));
    let mut bar = Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(METER_HEIGHT));

    if level > 0 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(level))
                .height(Length::Fill)
                .style(styles::container::meter(true)),
        );
    }
    if level < 100 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(100 - level))
                .height(Length::Fill)
                .style(styles::container::meter(false)),
        );
    }

    bar.into()
}

fn skill_card<'a>(ctx: &PageContext<'a>, index: usize, skill: &'a Skill) -> Element<'a, Message> {
    let card = CardId::new(CardKind::Skill, index);
    let (alpha, _) = ctx.reveal.appearance(card, ctx.now);

    let heading = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(skill.name.as_str())
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(
            Text::new(format!("{}%", skill.level))
                .size(typography::BODY)
                .style(brand_text(alpha)),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(meter(skill.level))
        .push(Text::new(skill.summary.as_str()).size(typography::BODY_SM));

    let slot = card_slot(ctx, card, Grid::SKILLS, content);
    if skill.summary.is_empty() {
        slot
    } else {
        styles::tooltip::styled(slot, skill.summary.as_str(), tooltip::Position::Top).into()
    }
}

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .portfolio
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| skill_card(ctx, index, skill))
        .collect();

    section_frame(
        ctx.layout,
        SectionId::Skills,
        "Tools I use every day",
        false,
        grid(Grid::SKILLS, cards),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_renders_at_bounds() {
        let _empty = meter(0);
        let _full = meter(100);
        let _partial = meter(64);
    }
}
