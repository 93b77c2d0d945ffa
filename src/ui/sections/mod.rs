// SPDX-License-Identifier: MPL-2.0
//! Page sections, top to bottom.
//!
//! Every section renders at the exact height [`PageLayout`] assigns to it, so
//! the scroll effects can reason about visibility without measuring widgets.
//! Cards are drawn through [`card_slot`], which applies the reveal fade and
//! slide for the card's [`CardId`].

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::contact::{ContactForm, SubmissionFlow};
use crate::content::Portfolio;
use crate::effects::{Parallax, Reveal, Typewriter};
use crate::page::{CardId, Grid, PageLayout, SectionId, GRID_GAP, SECTION_HEADER, SECTION_PADDING};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, text_editor, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Messages emitted by the page body.
#[derive(Debug, Clone)]
pub enum Message {
    /// A call-to-action pointing at another section.
    Navigate(SectionId),
    Contact(contact::Message),
}

/// Everything the page body reads while rendering.
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub layout: &'a PageLayout,
    pub reveal: &'a Reveal,
    pub parallax: &'a Parallax,
    pub typewriter: &'a Typewriter,
    pub form: &'a ContactForm,
    pub flow: &'a SubmissionFlow,
    pub message_editor: &'a text_editor::Content,
    pub footer_year: i32,
    pub now: Instant,
}

/// Renders the whole page as one column.
pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero::view(ctx))
        .push(about::view(ctx))
        .push(skills::view(ctx))
        .push(projects::view(ctx))
        .push(contact::view(ctx).map(Message::Contact))
        .push(footer::view(ctx))
        .into()
}

/// Fixed height of `section`, falling back to its content size when the
/// layout does not know it.
fn section_length(layout: &PageLayout, section: SectionId) -> Length {
    layout
        .section(section)
        .map_or(Length::Shrink, |region| Length::Fixed(region.height))
}

/// Titled section band with the standard padding and centered content.
pub(crate) fn section_frame<'a, M: 'a>(
    layout: &PageLayout,
    section: SectionId,
    subtitle: &'a str,
    alternate: bool,
    body: impl Into<Element<'a, M>>,
) -> Element<'a, M> {
    let header = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_HEADER))
        .push(Text::new(section.label()).size(typography::TITLE_LG))
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .style(secondary_text),
        );

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header)
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(section_length(layout, section))
        .padding(Padding {
            top: SECTION_PADDING,
            bottom: SECTION_PADDING,
            left: spacing::LG,
            right: spacing::LG,
        })
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section(alternate))
        .into()
}

/// Card placeholder of fixed height whose content fades and slides in.
pub(crate) fn card_slot<'a, M: 'a>(
    ctx: &PageContext<'_>,
    card: CardId,
    grid: Grid,
    content: impl Into<Element<'a, M>>,
) -> Element<'a, M> {
    let (alpha, offset) = ctx.reveal.appearance(card, ctx.now);

    let body = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .clip(true)
        .style(styles::container::card(alpha));

    Container::new(body)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(grid.card_height))
        .padding(Padding {
            top: offset,
            ..Padding::ZERO
        })
        .into()
}

/// Lays cards out in rows of `grid.columns`, padding the last row so every
/// column keeps the same width.
pub(crate) fn grid<'a, M: 'a>(grid: Grid, cards: Vec<Element<'a, M>>) -> Element<'a, M> {
    let columns = grid.columns.max(1);
    let mut rows = Column::new().spacing(GRID_GAP).width(Length::Fill);
    let mut cards = cards.into_iter().peekable();

    while cards.peek().is_some() {
        let mut row = Row::new().spacing(GRID_GAP).width(Length::Fill);
        let mut filled = 0;
        for card in cards.by_ref().take(columns) {
            row = row.push(card);
            filled += 1;
        }
        for _ in filled..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

pub(crate) fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

/// Brand-colored text faded by `alpha`.
pub(crate) fn brand_text(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(Color {
            a: alpha,
            ..ColorScheme::for_theme(theme).brand_primary
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{ScrollEffect, Viewport};

    struct Fixture {
        portfolio: Portfolio,
        layout: PageLayout,
        reveal: Reveal,
        parallax: Parallax,
        typewriter: Typewriter,
        form: ContactForm,
        flow: SubmissionFlow,
        editor: text_editor::Content,
    }

    impl Fixture {
        fn new() -> Self {
            let portfolio = Portfolio::load().expect("embedded content parses");
            let layout = PageLayout::new(
                portfolio.stats.len(),
                portfolio.skills.len(),
                portfolio.projects.len(),
            );
            Self {
                typewriter: Typewriter::new(portfolio.owner.phrases.clone()),
                portfolio,
                layout,
                reveal: Reveal::new(),
                parallax: Parallax::new(),
                form: ContactForm::new(),
                flow: SubmissionFlow::default(),
                editor: text_editor::Content::new(),
            }
        }

        fn context(&self, now: Instant) -> PageContext<'_> {
            PageContext {
                portfolio: &self.portfolio,
                layout: &self.layout,
                reveal: &self.reveal,
                parallax: &self.parallax,
                typewriter: &self.typewriter,
                form: &self.form,
                flow: &self.flow,
                message_editor: &self.editor,
                footer_year: 2026,
                now,
            }
        }
    }

    #[test]
    fn page_renders_before_any_scroll() {
        let fixture = Fixture::new();
        let _page = view(&fixture.context(Instant::now()));
    }

    #[test]
    fn page_renders_with_revealed_cards() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        let viewport = Viewport::new(1200.0, 1280.0, 900.0);
        fixture.reveal.on_scroll(&viewport, &fixture.layout, now);
        fixture.parallax.on_scroll(&viewport, &fixture.layout, now);

        let _page = view(&fixture.context(now));
    }

    #[test]
    fn grid_accepts_partial_rows() {
        let cards: Vec<Element<'_, ()>> = (0..5)
            .map(|index| Text::new(index.to_string()).into())
            .collect();
        let _grid = grid(Grid::SKILLS, cards);
    }
}
