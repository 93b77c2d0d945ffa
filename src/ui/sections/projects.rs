// SPDX-License-Identifier: MPL-2.0
//! Projects section.

use super::{card_slot, grid, secondary_text, section_frame, Message, PageContext};
use crate::content::Project;
use crate::page::{CardId, CardKind, Grid, SectionId};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Element, Length};

fn project_card<'a>(ctx: &PageContext<'a>, index: usize, project: &'a Project) -> Element<'a, Message> {
    let tags = project.tags.iter().fold(Row::new().spacing(spacing::XS), |row, tag| {
        row.push(
            Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::tag),
        )
    });

    let content = Column::new()
        .spacing(spacing::SM)
        .height(Length::Fill)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(project.summary.as_str())
                .size(typography::BODY)
                .style(secondary_text),
        )
        .push(Space::new().height(Length::Fill))
        .push(tags);

    card_slot(
        ctx,
        CardId::new(CardKind::Project, index),
        Grid::PROJECTS,
        content,
    )
}

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| project_card(ctx, index, project))
        .collect();

    section_frame(
        ctx.layout,
        SectionId::Projects,
        "A few things I have built",
        true,
        grid(Grid::PROJECTS, cards),
    )
}
