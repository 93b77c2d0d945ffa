// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar.
//!
//! Wide windows show one link per section plus the theme toggle. Below the
//! mobile breakpoint the links collapse into a menu button that opens a
//! dropdown panel. Picking a link closes the menu.

use crate::page::{SectionId, NAVBAR_HEIGHT};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemePreference;
use iced::{
    alignment::Vertical,
    widget::{button, tooltip, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub brand: &'a str,
    pub active: Option<SectionId>,
    pub menu_open: bool,
    /// Window narrower than the mobile breakpoint.
    pub compact: bool,
    /// Page scrolled past the backdrop threshold.
    pub solid: bool,
    pub theme: ThemePreference,
    /// Theme toggle still in its spin state.
    pub spinning: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    NavigateTo(SectionId),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    NavigateTo(SectionId),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::NavigateTo(section) => {
            *menu_open = false;
            Event::NavigateTo(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Glyph of the menu button for the given menu state.
#[must_use]
pub fn menu_glyph(menu_open: bool) -> &'static str {
    if menu_open {
        "✕"
    } else {
        "☰"
    }
}

fn theme_glyph(theme: ThemePreference, spinning: bool) -> &'static str {
    match (spinning, theme) {
        (true, _) => "◐",
        (false, ThemePreference::Dark) => "☀",
        (false, ThemePreference::Light) => "☾",
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(Text::new(ctx.brand).size(typography::TITLE_MD))
        .on_press(Message::NavigateTo(SectionId::Home))
        .padding(spacing::XS)
        .style(styles::button::nav_link(false));

    let theme_tip = match ctx.theme {
        ThemePreference::Light => "Switch to dark mode",
        ThemePreference::Dark => "Switch to light mode",
    };
    let theme_toggle = styles::tooltip::styled(
        button(Text::new(theme_glyph(ctx.theme, ctx.spinning)).size(typography::TITLE_SM))
            .on_press(Message::ToggleTheme)
            .padding(spacing::XS)
            .style(styles::button::ghost),
        theme_tip,
        tooltip::Position::Bottom,
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        row = row.push(theme_toggle).push(
            button(Text::new(menu_glyph(ctx.menu_open)).size(typography::TITLE_SM))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        );
    } else {
        for section in SectionId::ALL {
            row = row.push(nav_link(section, ctx.active == Some(section)));
        }
        row = row.push(theme_toggle);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.solid))
        .into()
}

fn nav_link<'a>(section: SectionId, active: bool) -> Element<'a, Message> {
    button(Text::new(section.label()).size(typography::BODY))
        .on_press(Message::NavigateTo(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link(active))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_column = SectionId::ALL.into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, section| {
            column.push(
                button(Text::new(section.label()).size(typography::BODY_LG))
                    .on_press(Message::NavigateTo(section))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::nav_link(ctx.active == Some(section))),
            )
        },
    );

    Container::new(menu_column)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
