// SPDX-License-Identifier: MPL-2.0
//! Hover tooltips.
//!
//! Tooltips invert the page surface so they stand out in both modes: dark
//! tips on the light page, light tips on the dark page.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Style for the tooltip bubble.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let page = ColorScheme::for_theme(theme);
    let inverted = if theme.extended_palette().is_dark {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    };

    container::Style {
        background: Some(Background::Color(inverted.surface_primary)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: page.text_tertiary,
        },
        shadow: shadow::MD,
        text_color: Some(inverted.text_primary),
        ..Default::default()
    }
}

/// Wraps `content` with a tooltip showing `tip` on hover.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
