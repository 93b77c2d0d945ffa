// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the mobile menu and the success panel.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Fixed navigation bar. `solid` once the page has scrolled.
pub fn navbar(solid: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let background = if solid {
            colors.navbar_solid
        } else {
            colors.navbar_translucent
        };

        container::Style {
            background: Some(Background::Color(background)),
            shadow: if solid { shadow::SM } else { shadow::NONE },
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

/// Full-width section band. Alternate sections use the secondary surface.
pub fn section(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let background = if alternate {
            colors.surface_secondary
        } else {
            colors.surface_primary
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

/// Content card faded by `alpha` while it is revealed.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..colors.surface_primary
            })),
            border: Border {
                color: Color {
                    a: alpha * opacity::OVERLAY_MEDIUM,
                    ..colors.text_tertiary
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: if alpha > 0.0 { shadow::SM } else { shadow::NONE },
            text_color: Some(Color {
                a: alpha,
                ..colors.text_primary
            }),
            ..Default::default()
        }
    }
}

/// Wrapper of a form field. The active field is outlined with the brand
/// color; a field with an error with the error color.
pub fn field_group(focused: bool, invalid: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let (color, width) = match (invalid, focused) {
            (true, _) => (colors.error, border::WIDTH_SM),
            (false, true) => (colors.brand_primary, border::WIDTH_MD),
            (false, false) => (Color::TRANSPARENT, border::WIDTH_SM),
        };

        container::Style {
            background: focused.then(|| Background::Color(colors.surface_tertiary)),
            border: Border {
                color,
                width,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Decorative translucent blob behind the hero headline.
pub fn blob(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..color })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thin progress bar track filled up to a skill level.
pub fn meter(filled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let color = if filled {
            colors.brand_secondary
        } else {
            colors.surface_tertiary
        };

        container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Small pill used for project tags.
pub fn tag(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_tertiary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(colors.brand_primary),
        ..Default::default()
    }
}
