// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct owns every independent unit of the page (theme, contact
//! form and its submission flow, scroll effects, typewriter, notifications)
//! and translates messages into calls on them. Time only enters through the
//! `Instant` each message is processed at, so the whole page can be driven
//! from tests with synthetic clocks.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::DELIVERED_NOTICE;

use crate::contact::{ContactForm, SubmissionFlow};
use crate::content::Portfolio;
use crate::effects::{Effects, SmoothScroll, Typewriter, Viewport};
use crate::page::PageLayout;
use crate::ui::navbar::ViewContext as NavbarViewContext;
use crate::ui::notifications::{self, Severity};
use crate::ui::sections::PageContext;
use crate::ui::theming::{self, ThemeState};
use chrono::Datelike;
use iced::widget::text_editor;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Toast shown when the embedded page content cannot be parsed.
const CONTENT_ERROR: &str = "Page content could not be loaded.";

/// Root Iced application state.
pub struct App {
    portfolio: Portfolio,
    layout: PageLayout,
    theme: ThemeState,
    /// Explicit settings directory; `None` uses the standard resolution.
    config_dir: Option<PathBuf>,
    theme_writer: Arc<persistence::ThemeWriter>,
    /// Whether the mobile menu is open.
    menu_open: bool,
    /// Whether the window is below the mobile breakpoint.
    compact: bool,
    form: ContactForm,
    flow: SubmissionFlow,
    message_editor: text_editor::Content,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    effects: Effects,
    typewriter: Typewriter,
    smooth_scroll: SmoothScroll,
    viewport: Viewport,
    /// Instant of the last processed message, used for rendering.
    now: Instant,
    footer_year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme.effective())
            .field("phase", &self.flow.phase())
            .field("offset_y", &self.viewport.offset_y)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the page from the embedded content and the stored theme
    /// preference.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::new_at(flags, Instant::now(), theming::detect_system_dark())
    }

    /// Same as [`App::new`] with an explicit clock and system preference.
    pub fn new_at(flags: Flags, now: Instant, system_dark: Option<bool>) -> (Self, Task<Message>) {
        let mut notifications = notifications::Manager::new();

        let portfolio = Portfolio::load().unwrap_or_else(|err| {
            tracing::error!("failed to load page content: {err}");
            notifications.emit(Severity::Error, CONTENT_ERROR, now);
            Portfolio::default()
        });

        let config_dir = flags.config_dir.map(PathBuf::from);
        let (stored, warning) = persistence::load_theme(config_dir.clone());
        if let Some(warning) = warning {
            notifications.emit(Severity::Error, warning, now);
        }
        let theme = ThemeState::new(stored, system_dark).with_forced(flags.theme);

        let layout = PageLayout::new(
            portfolio.stats.len(),
            portfolio.skills.len(),
            portfolio.projects.len(),
        );

        let mut typewriter = Typewriter::new(portfolio.owner.phrases.clone());
        typewriter.start(now);

        let viewport = Viewport::new(
            0.0,
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        );
        let mut effects = Effects::new();
        effects.on_scroll(&viewport, &layout, now);

        tracing::info!(
            owner = %portfolio.owner.name,
            theme = theme.effective().as_str(),
            follows_system = theme.follows_system(),
            "page ready"
        );

        let app = App {
            portfolio,
            layout,
            theme,
            config_dir,
            theme_writer: Arc::new(persistence::ThemeWriter::new()),
            menu_open: false,
            compact: false,
            form: ContactForm::new(),
            flow: SubmissionFlow::default(),
            message_editor: text_editor::Content::new(),
            notifications,
            effects,
            typewriter,
            smooth_scroll: SmoothScroll::default(),
            viewport,
            now,
            footer_year: chrono::Local::now().year(),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("{} | {}", self.portfolio.owner.name, self.portfolio.owner.role)
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Whether any timer, animation or toast still needs ticks.
    fn has_pending_work(&self) -> bool {
        self.flow.has_pending_timers()
            || self.typewriter.next_deadline().is_some()
            || self.smooth_scroll.is_running()
            || self.effects.reveal.is_animating(self.now)
            || self.notifications.has_notifications()
            || self.theme.is_spinning(self.now)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.has_pending_work());
        let theme_sub =
            subscription::create_system_theme_subscription(self.theme.follows_system());

        Subscription::batch([event_sub, tick_sub, theme_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match message {
            Message::Tick(instant) => instant,
            _ => Instant::now(),
        };
        self.update_at(message, now)
    }

    /// Processes `message` as if it arrived at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        self.now = now;

        let mut ctx = update::UpdateContext {
            layout: &self.layout,
            theme: &mut self.theme,
            config_dir: &self.config_dir,
            theme_writer: &self.theme_writer,
            menu_open: &mut self.menu_open,
            compact: &mut self.compact,
            form: &mut self.form,
            flow: &mut self.flow,
            message_editor: &mut self.message_editor,
            notifications: &mut self.notifications,
            effects: &mut self.effects,
            typewriter: &mut self.typewriter,
            smooth_scroll: &mut self.smooth_scroll,
            viewport: &mut self.viewport,
            now,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message, now);
                Task::none()
            }
            Message::PageScrolled(viewport) => update::handle_page_scrolled(&mut ctx, viewport),
            Message::PagePressed => update::handle_page_pressed(&mut ctx),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::PollSystemTheme => update::handle_poll_system_theme(),
            Message::SystemThemeDetected(system_dark) => {
                update::handle_system_theme_detected(&mut ctx, system_dark)
            }
            Message::ThemeSaved(result) => update::handle_theme_saved(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let page = PageContext {
            portfolio: &self.portfolio,
            layout: &self.layout,
            reveal: &self.effects.reveal,
            parallax: &self.effects.parallax,
            typewriter: &self.typewriter,
            form: &self.form,
            flow: &self.flow,
            message_editor: &self.message_editor,
            footer_year: self.footer_year,
            now: self.now,
        };

        let navbar = NavbarViewContext {
            brand: &self.portfolio.owner.name,
            active: self.effects.active_section.current(),
            menu_open: self.menu_open,
            compact: self.compact,
            solid: self.effects.backdrop.is_solid(),
            theme: self.theme.effective(),
            spinning: self.theme.is_spinning(self.now),
        };

        view::view(view::ViewContext {
            page,
            navbar,
            notifications: &self.notifications,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FieldId, Phase};
    use crate::content::Choice;
    use crate::page::{CardId, CardKind, SectionId};
    use crate::ui::navbar;
    use crate::ui::sections::{self, contact};
    use crate::ui::theming::ThemePreference;
    use iced::Size;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn test_app(system_dark: Option<bool>) -> (App, TempDir, Instant) {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            theme: None,
        };
        let start = Instant::now();
        let (app, _task) = App::new_at(flags, start, system_dark);
        (app, dir, start)
    }

    fn contact(message: contact::Message) -> Message {
        Message::Page(sections::Message::Contact(message))
    }

    fn fill_valid_form(app: &mut App, now: Instant) {
        let _ = app.update_at(contact(contact::Message::Edited(FieldId::Name, "Ana".into())), now);
        let _ = app.update_at(
            contact(contact::Message::Edited(FieldId::Email, "ana@x.com".into())),
            now,
        );
        let _ = app.update_at(
            contact(contact::Message::Selected(
                FieldId::ProjectType,
                Choice {
                    value: "web".into(),
                    label: "Web Analytics".into(),
                },
            )),
            now,
        );
        let _ = app.update_at(
            contact(contact::Message::Selected(
                FieldId::Timeline,
                Choice {
                    value: "1 month".into(),
                    label: "Within a month".into(),
                },
            )),
            now,
        );
        let _ = app.update_at(
            contact(contact::Message::MessageAction(text_editor::Action::Edit(
                text_editor::Edit::Paste(std::sync::Arc::new("I need a dashboard!!".to_string())),
            ))),
            now,
        );
    }

    #[test]
    fn new_app_starts_idle_at_top() {
        let (app, _dir, _start) = test_app(None);
        assert_eq!(app.flow.phase(), Phase::Idle);
        assert_eq!(app.effects.active_section.current(), Some(SectionId::Home));
        assert!(!app.effects.backdrop.is_solid());
        assert!(!app.menu_open);
    }

    #[test]
    fn theme_follows_system_until_toggled() {
        let (mut app, _dir, start) = test_app(Some(true));
        assert_eq!(app.theme(), Theme::Dark);
        assert!(app.theme.follows_system());

        let _ = app.update_at(Message::Navbar(navbar::Message::ToggleTheme), start);
        assert_eq!(app.theme(), Theme::Light);
        assert!(!app.theme.follows_system());

        let _ = app.update_at(Message::SystemThemeDetected(Some(true)), start + ms(10));
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.theme.stored(), Some(ThemePreference::Light));
    }

    #[test]
    fn forced_theme_wins_for_the_session() {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            theme: Some(ThemePreference::Dark),
        };
        let (app, _task) = App::new_at(flags, Instant::now(), Some(false));

        assert_eq!(app.theme(), Theme::Dark);
        assert!(!app.theme.follows_system());
    }

    #[test]
    fn contact_submission_runs_to_completion() {
        let (mut app, _dir, start) = test_app(None);
        fill_valid_form(&mut app, start);
        assert_eq!(app.form.char_count(), 20);

        let _ = app.update_at(contact(contact::Message::Submit), start);
        assert_eq!(app.flow.phase(), Phase::Sending);
        assert!(app.has_pending_work());

        let _ = app.update_at(Message::Tick(start + ms(2000)), start + ms(2000));
        assert_eq!(app.flow.phase(), Phase::Success);
        assert!(app
            .notifications
            .visible()
            .any(|toast| toast.message() == DELIVERED_NOTICE));

        let _ = app.update_at(Message::Tick(start + ms(7300)), start + ms(7300));
        assert_eq!(app.flow.phase(), Phase::Idle);
        assert!(FieldId::ALL.iter().all(|&id| app.form.value(id).is_empty()));
        assert_eq!(app.form.char_count(), 0);
        assert!(app.message_editor.text().trim().is_empty());
    }

    #[test]
    fn invalid_submission_shows_errors_and_stays_idle() {
        let (mut app, _dir, start) = test_app(None);

        let _ = app.update_at(contact(contact::Message::Submit), start);

        assert_eq!(app.flow.phase(), Phase::Idle);
        assert!(FieldId::ALL.iter().all(|&id| app.form.error(id).is_some()));
    }

    #[test]
    fn edits_are_ignored_while_sending() {
        let (mut app, _dir, start) = test_app(None);
        fill_valid_form(&mut app, start);
        let _ = app.update_at(contact(contact::Message::Submit), start);

        let _ = app.update_at(
            contact(contact::Message::Edited(FieldId::Name, "Bob".into())),
            start + ms(100),
        );
        assert_eq!(app.form.value(FieldId::Name), "Ana");
    }

    #[test]
    fn navigation_scrolls_smoothly_to_section() {
        let (mut app, _dir, start) = test_app(None);

        let _ = app.update_at(
            Message::Navbar(navbar::Message::NavigateTo(SectionId::Skills)),
            start,
        );
        assert!(app.smooth_scroll.is_running());

        let _ = app.update_at(Message::Tick(start + ms(1000)), start + ms(1000));
        assert!(!app.smooth_scroll.is_running());
    }

    #[test]
    fn manual_scroll_stops_navigation_animation() {
        let (mut app, _dir, start) = test_app(None);

        let _ = app.update_at(
            Message::Navbar(navbar::Message::NavigateTo(SectionId::Projects)),
            start,
        );
        let _ = app.update_at(
            Message::PageScrolled(Viewport::new(0.0, 1280.0, 800.0)),
            start + ms(10),
        );
        assert!(app.smooth_scroll.is_running());

        let _ = app.update_at(
            Message::PageScrolled(Viewport::new(240.0, 1280.0, 800.0)),
            start + ms(20),
        );
        assert!(!app.smooth_scroll.is_running());
    }

    #[test]
    fn scrolling_updates_effects() {
        let (mut app, _dir, start) = test_app(None);

        let _ = app.update_at(
            Message::PageScrolled(Viewport::new(1300.0, 1280.0, 800.0)),
            start,
        );

        assert!(app.effects.backdrop.is_solid());
        assert_eq!(app.effects.active_section.current(), Some(SectionId::Skills));
    }

    #[test]
    fn leaving_compact_layout_closes_menu() {
        let (mut app, _dir, start) = test_app(None);

        let _ = app.update_at(Message::WindowResized(Size::new(500.0, 800.0)), start);
        assert!(app.compact);
        let _ = app.update_at(Message::Navbar(navbar::Message::ToggleMenu), start);
        assert!(app.menu_open);

        let _ = app.update_at(Message::WindowResized(Size::new(1200.0, 800.0)), start);
        assert!(!app.compact);
        assert!(!app.menu_open);
    }

    #[test]
    fn taller_window_reveals_cards_already_on_screen() {
        let (mut app, _dir, start) = test_app(None);
        let first_stat = CardId::new(CardKind::Stat, 0);
        assert!(!app.effects.reveal.is_revealed(first_stat));

        let _ = app.update_at(Message::WindowResized(Size::new(1280.0, 1400.0)), start);

        assert_eq!(app.viewport, Viewport::new(0.0, 1280.0, 1400.0));
        assert!(app.effects.reveal.is_revealed(first_stat));
    }

    #[test]
    fn pressing_the_page_blurs_active_field() {
        let (mut app, _dir, start) = test_app(None);
        let _ = app.update_at(contact(contact::Message::Edited(FieldId::Email, "nope".into())), start);
        assert!(app.form.error(FieldId::Email).is_none());

        let _ = app.update_at(Message::PagePressed, start);

        assert!(app.form.active().is_none());
        assert!(app.form.error(FieldId::Email).is_some());
    }

    #[test]
    fn corrupt_settings_surface_a_toast() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("settings.toml"), "general = [").expect("write");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            theme: None,
        };

        let (app, _task) = App::new_at(flags, Instant::now(), None);

        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn view_renders_in_every_phase() {
        let (mut app, _dir, start) = test_app(None);
        let _ = app.view();

        fill_valid_form(&mut app, start);
        let _ = app.update_at(contact(contact::Message::Submit), start);
        let _ = app.view();

        let _ = app.update_at(Message::Tick(start + ms(2100)), start + ms(2100));
        let _ = app.view();
    }
}
