// SPDX-License-Identifier: MPL-2.0
//! Contact section: owner details and the validated contact form.
//!
//! The form is disabled while a submission is in flight. Once the message
//! is delivered the form fades out while sliding up, and the success panel
//! fades in while sliding up into place. The panel stays until the form
//! resets.

use super::{secondary_text, section_frame, PageContext};
use crate::app::config::MESSAGE_MAX_CHARS;
use crate::contact::{CounterTone, FieldId, Phase};
use crate::content::Choice;
use crate::page::{SectionId, CONTACT_BODY_HEIGHT};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, pick_list, text, text_editor, text_input, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Height reserved under each field for its error line.
const ERROR_SLOT_HEIGHT: f32 = 18.0;

/// Vertical distance covered by the form and the success panel while they
/// swap.
const EXIT_SLIDE_PX: f32 = 20.0;

/// Opacity and top offset of the form and the success panel.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Crossfade {
    form_alpha: f32,
    form_top: f32,
    panel_alpha: f32,
    panel_top: f32,
}

impl Crossfade {
    /// State at `progress`, 0 showing only the form and 1 only the panel.
    fn at(progress: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            form_alpha: 1.0 - progress,
            form_top: EXIT_SLIDE_PX * (1.0 - progress),
            panel_alpha: progress,
            panel_top: EXIT_SLIDE_PX * (1.0 - progress),
        }
    }
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keystroke in a single-line field.
    Edited(FieldId, String),
    /// Option picked in a select field.
    Selected(FieldId, Choice),
    /// Enter pressed in a single-line field.
    FieldSubmitted(FieldId),
    /// Edit in the message area.
    MessageAction(text_editor::Action),
    Submit,
}

/// Label of the submit button for the current phase.
#[must_use]
pub fn submit_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Sending => "Sending Message...",
        _ => "Send Message",
    }
}

fn field_label(id: FieldId) -> String {
    if id.is_required() {
        format!("{} *", id.label())
    } else {
        id.label().to_string()
    }
}

fn error_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).error),
    }
}

fn counter_text(tone: CounterTone) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        text::Style {
            color: Some(match tone {
                CounterTone::Neutral => colors.text_tertiary,
                CounterTone::Warning => colors.warning,
                CounterTone::Danger => colors.error,
            }),
        }
    }
}

/// Labelled wrapper around an input, with its error line below.
fn field<'a>(
    ctx: &PageContext<'a>,
    id: FieldId,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let error = ctx.form.error(id);
    let focused = ctx.form.active() == Some(id);

    let error_line = Container::new(
        Text::new(error.unwrap_or_default())
            .size(typography::CAPTION)
            .style(error_text),
    )
    .height(Length::Fixed(ERROR_SLOT_HEIGHT));

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(field_label(id)).size(typography::BODY_SM))
        .push(
            Container::new(input)
                .width(Length::Fill)
                .padding(2)
                .style(styles::container::field_group(focused, error.is_some())),
        )
        .push(error_line)
        .into()
}

fn line_input<'a>(
    ctx: &PageContext<'a>,
    id: FieldId,
    placeholder: &'a str,
    busy: bool,
) -> Element<'a, Message> {
    let mut input = text_input(placeholder, ctx.form.value(id))
        .size(typography::BODY)
        .padding(spacing::XS);

    if !busy {
        input = input
            .on_input(move |value| Message::Edited(id, value))
            .on_submit(Message::FieldSubmitted(id));
    }

    field(ctx, id, input)
}

fn select_input<'a>(
    ctx: &PageContext<'a>,
    id: FieldId,
    choices: &'a [Choice],
    placeholder: &'a str,
) -> Element<'a, Message> {
    let value = ctx.form.value(id);
    let selected = choices.iter().find(|choice| choice.value == value).cloned();

    let picker = pick_list(choices, selected, move |choice| Message::Selected(id, choice))
        .placeholder(placeholder)
        .text_size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fill);

    field(ctx, id, picker)
}

fn message_input<'a>(ctx: &PageContext<'a>, busy: bool) -> Element<'a, Message> {
    let mut editor = text_editor(ctx.message_editor)
        .placeholder("Tell me about your project...")
        .size(typography::BODY)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::TEXTAREA_HEIGHT));

    if !busy {
        editor = editor.on_action(Message::MessageAction);
    }

    let count = ctx.form.char_count();
    let counter = Container::new(
        Text::new(format!("{count}/{MESSAGE_MAX_CHARS}"))
            .size(typography::CAPTION)
            .style(counter_text(ctx.form.counter_tone())),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right);

    Column::new()
        .spacing(spacing::XXS)
        .push(field(ctx, FieldId::Message, editor))
        .push(counter)
        .into()
}

fn form<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let phase = ctx.flow.phase();
    let busy = ctx.flow.is_busy();

    let selects = Row::new()
        .spacing(spacing::MD)
        .push(select_input(
            ctx,
            FieldId::ProjectType,
            &ctx.portfolio.project_types,
            "Select project type",
        ))
        .push(select_input(
            ctx,
            FieldId::Timeline,
            &ctx.portfolio.timelines,
            "Select timeline",
        ));

    let submit = button(
        Container::new(Text::new(submit_label(phase)).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press_maybe((!busy).then_some(Message::Submit))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .max_width(sizing::FORM_MAX_WIDTH)
        .push(line_input(ctx, FieldId::Name, "Your name", busy))
        .push(line_input(ctx, FieldId::Email, "you@example.com", busy))
        .push(selects)
        .push(message_input(ctx, busy))
        .push(submit)
        .into()
}

fn success_panel<'a>(alpha: f32) -> Element<'a, Message> {
    let fade = move |color: Color| Color { a: alpha, ..color };

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new("✓")
                .size(typography::DISPLAY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(fade(ColorScheme::for_theme(theme).success)),
                }),
        )
        .push(
            Text::new("Thank you!")
                .size(typography::TITLE_MD)
                .style(move |theme: &Theme| text::Style {
                    color: Some(fade(ColorScheme::for_theme(theme).text_primary)),
                }),
        )
        .push(
            Text::new("Your message has been sent. I'll get back to you within 24 hours.")
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(fade(ColorScheme::for_theme(theme).text_secondary)),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Section-colored layer hiding the form as it fades out.
fn veil<'a>(form_alpha: f32) -> Element<'a, Message> {
    let cover = 1.0 - form_alpha;
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color {
                a: cover,
                ..ColorScheme::for_theme(theme).surface_primary
            })),
            ..Default::default()
        })
        .into()
}

fn offset<'a>(top: f32, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Space::new().height(Length::Fixed(top)))
        .push(content)
        .into()
}

fn details<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let owner = &ctx.portfolio.owner;
    let line = |label: &'a str, value: &'a str| {
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(label).size(typography::CAPTION).style(secondary_text))
            .push(Text::new(value).size(typography::BODY_LG))
    };

    Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(2))
        .push(Text::new("Let's work together").size(typography::TITLE_MD))
        .push(
            Text::new(
                "Have a dataset that needs answers or a report that needs automating? \
                 Send me a few details and I will reply within a day.",
            )
            .size(typography::BODY)
            .style(secondary_text),
        )
        .push(line("Email", owner.email.as_str()))
        .push(line("Location", owner.location.as_str()))
        .into()
}

/// Renders the contact section.
pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let crossfade = Crossfade::at(if ctx.flow.shows_success() {
        ctx.flow.exit_progress(ctx.now)
    } else {
        0.0
    });

    let mut form_area = Stack::new()
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .push(offset(crossfade.form_top, form(ctx)));

    if ctx.flow.shows_success() {
        form_area = form_area
            .push(veil(crossfade.form_alpha))
            .push(offset(crossfade.panel_top, success_panel(crossfade.panel_alpha)));
    }

    let body = Row::new()
        .spacing(spacing::XXL)
        .height(Length::Fixed(CONTACT_BODY_HEIGHT))
        .push(details(ctx))
        .push(form_area);

    section_frame(
        ctx.layout,
        SectionId::Contact,
        "Tell me about your next project",
        false,
        body,
    )
}
