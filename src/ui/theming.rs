// SPDX-License-Identifier: MPL-2.0
//! Light/Dark theming with a persisted preference.
//!
//! The effective mode is resolved in three steps: an explicit stored
//! preference wins; otherwise the system preference is followed; when the
//! system preference is unknown the page is light. Toggling always produces
//! an explicit preference, after which system changes are ignored.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Navbar backdrop
    pub navbar_translucent: Color,
    pub navbar_solid: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            surface_tertiary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            navbar_translucent: Color {
                a: opacity::NAVBAR_TRANSLUCENT,
                ..palette::WHITE
            },
            navbar_solid: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.17),
            surface_tertiary: Color::from_rgb(0.2, 0.2, 0.23),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_400,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            navbar_translucent: Color {
                a: opacity::NAVBAR_TRANSLUCENT,
                ..palette::GRAY_900
            },
            navbar_solid: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_900
            },
        }
    }

    /// Picks the scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// A color mode the user can pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses `light`/`dark`, ignoring case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }
}

/// Resolves the effective mode from a stored preference and the system
/// preference (`None` when it cannot be detected).
#[must_use]
pub fn resolve(stored: Option<ThemePreference>, system_dark: Option<bool>) -> ThemePreference {
    match (stored, system_dark) {
        (Some(preference), _) => preference,
        (None, Some(true)) => ThemePreference::Dark,
        (None, Some(false) | None) => ThemePreference::Light,
    }
}

/// Asks the desktop whether it prefers a dark appearance.
///
/// Returns `None` when detection fails or the platform has no preference.
#[must_use]
pub fn detect_system_dark() -> Option<bool> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(true),
        Ok(dark_light::Mode::Light) => Some(false),
        Ok(dark_light::Mode::Unspecified) => None,
        Err(err) => {
            tracing::debug!("system theme detection failed: {err:?}");
            None
        }
    }
}

/// Runtime theme state of the page.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    stored: Option<ThemePreference>,
    system_dark: Option<bool>,
    /// Session-only override from the command line.
    forced: Option<ThemePreference>,
    spin_until: Option<Instant>,
}

impl ThemeState {
    #[must_use]
    pub fn new(stored: Option<ThemePreference>, system_dark: Option<bool>) -> Self {
        Self {
            stored,
            system_dark,
            ..Self::default()
        }
    }

    /// Forces a mode for this session without persisting it.
    #[must_use]
    pub fn with_forced(mut self, forced: Option<ThemePreference>) -> Self {
        self.forced = forced;
        self
    }

    #[must_use]
    pub fn effective(&self) -> ThemePreference {
        self.forced
            .unwrap_or_else(|| resolve(self.stored, self.system_dark))
    }

    #[must_use]
    pub fn stored(&self) -> Option<ThemePreference> {
        self.stored
    }

    /// Whether system theme changes still affect the page.
    #[must_use]
    pub fn follows_system(&self) -> bool {
        self.stored.is_none() && self.forced.is_none()
    }

    /// Flips the effective mode and pins it. Returns the preference that
    /// must be persisted.
    pub fn toggle(&mut self, now: Instant, spin: Duration) -> ThemePreference {
        let next = self.effective().toggled();
        self.stored = Some(next);
        self.forced = None;
        self.spin_until = Some(now + spin);
        next
    }

    /// Records a new system preference. Returns `true` if the effective
    /// mode changed as a result.
    pub fn on_system_change(&mut self, system_dark: Option<bool>) -> bool {
        let before = self.effective();
        self.system_dark = system_dark;
        before != self.effective()
    }

    /// Whether the toggle control is still in its spin state.
    #[must_use]
    pub fn is_spinning(&self, now: Instant) -> bool {
        self.spin_until.is_some_and(|until| now < until)
    }

    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.effective().is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn no_stored_preference_and_dark_system_resolves_dark() {
        assert_eq!(resolve(None, Some(true)), ThemePreference::Dark);
    }

    #[test]
    fn stored_preference_overrides_system() {
        for system in [Some(true), Some(false), None] {
            assert_eq!(
                resolve(Some(ThemePreference::Light), system),
                ThemePreference::Light
            );
            assert_eq!(
                resolve(Some(ThemePreference::Dark), system),
                ThemePreference::Dark
            );
        }
    }

    #[test]
    fn nothing_known_defaults_to_light() {
        assert_eq!(resolve(None, None), ThemePreference::Light);
        assert_eq!(resolve(None, Some(false)), ThemePreference::Light);
    }

    #[test]
    fn toggle_pins_preference_and_ignores_system_changes() {
        let now = Instant::now();
        let mut state = ThemeState::new(None, Some(false));
        assert!(state.follows_system());

        let persisted = state.toggle(now, Duration::from_millis(300));
        assert_eq!(persisted, ThemePreference::Dark);
        assert_eq!(state.stored(), Some(ThemePreference::Dark));
        assert!(!state.follows_system());

        let changed = state.on_system_change(Some(false));
        assert!(!changed);
        assert_eq!(state.effective(), ThemePreference::Dark);
    }

    #[test]
    fn system_change_applies_while_unset() {
        let mut state = ThemeState::new(None, Some(false));
        assert!(state.on_system_change(Some(true)));
        assert_eq!(state.effective(), ThemePreference::Dark);
    }

    #[test]
    fn forced_mode_wins_until_toggled() {
        let now = Instant::now();
        let mut state = ThemeState::new(Some(ThemePreference::Light), None)
            .with_forced(Some(ThemePreference::Dark));
        assert_eq!(state.effective(), ThemePreference::Dark);

        let persisted = state.toggle(now, Duration::ZERO);
        assert_eq!(persisted, ThemePreference::Light);
        assert_eq!(state.effective(), ThemePreference::Light);
    }

    #[test]
    fn spin_state_expires() {
        let now = Instant::now();
        let mut state = ThemeState::default();
        state.toggle(now, Duration::from_millis(300));

        assert!(state.is_spinning(now + Duration::from_millis(299)));
        assert!(!state.is_spinning(now + Duration::from_millis(300)));
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(ThemePreference::parse("DARK"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse(" light "), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("system"), None);
    }
}
