// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::effects::Viewport;
use crate::error::Error;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use crate::ui::theming::ThemePreference;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(sections::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or was resized.
    PageScrolled(Viewport),
    /// A press on the page that no input captured.
    PagePressed,
    WindowResized(Size),
    Tick(Instant), // Drives timers, fades and smooth scrolling
    /// Time to ask the platform for its color scheme again.
    PollSystemTheme,
    /// Result of a system color scheme query; `None` when unknown.
    SystemThemeDetected(Option<bool>),
    /// Result of writing the theme preference to disk.
    ThemeSaved(Result<(), Error>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Forces a color mode for this session without persisting it.
    pub theme: Option<ThemePreference>,
}
