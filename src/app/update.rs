// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers called from
//! `App::update`. Handlers receive an [`UpdateContext`] borrowing the parts of
//! the application state they may touch, plus the `Instant` the message is
//! processed at.

use super::{persistence, view, Message};
use crate::app::config::{MOBILE_BREAKPOINT_PX, THEME_TOGGLE_SPIN};
use crate::contact::{ContactForm, FieldId, FlowEvent, Phase, SubmissionFlow, SubmitOutcome};
use crate::effects::{smooth_scroll, Effects, SmoothScroll, Typewriter, Viewport};
use crate::error::Error;
use crate::page::{PageLayout, SectionId};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Severity};
use crate::ui::sections::{self, contact};
use crate::ui::theming::{self, ThemeState};
use iced::widget::{operation, scrollable::AbsoluteOffset, text_editor};
use iced::{Size, Task};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Toast shown once a contact message has been delivered.
pub const DELIVERED_NOTICE: &str =
    "Message sent successfully! I'll get back to you within 24 hours.";

/// Toast shown when the theme preference cannot be written.
pub const THEME_SAVE_FAILED: &str = "Your theme preference could not be saved.";

/// Mutable state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub layout: &'a PageLayout,
    pub theme: &'a mut ThemeState,
    pub config_dir: &'a Option<PathBuf>,
    pub theme_writer: &'a Arc<persistence::ThemeWriter>,
    pub menu_open: &'a mut bool,
    pub compact: &'a mut bool,
    pub form: &'a mut ContactForm,
    pub flow: &'a mut SubmissionFlow,
    pub message_editor: &'a mut text_editor::Content,
    pub notifications: &'a mut notifications::Manager,
    pub effects: &'a mut Effects,
    pub typewriter: &'a mut Typewriter,
    pub smooth_scroll: &'a mut SmoothScroll,
    pub viewport: &'a mut Viewport,
    pub now: Instant,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::NavigateTo(section) => start_navigation(ctx, section),
        NavbarEvent::ToggleTheme => toggle_theme(ctx),
    }
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: sections::Message) -> Task<Message> {
    match message {
        sections::Message::Navigate(section) => start_navigation(ctx, section),
        sections::Message::Contact(message) => handle_contact_message(ctx, message),
    }
}

/// Starts an animated scroll towards `section`. The offsets themselves are
/// applied on the following ticks.
fn start_navigation(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    if let Some(target) = smooth_scroll::target_for(section, ctx.layout, ctx.viewport.height) {
        tracing::debug!(section = section.anchor(), target, "scrolling to section");
        ctx.smooth_scroll.start(ctx.viewport.offset_y, target, ctx.now);
    }
    Task::none()
}

fn toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let preference = ctx.theme.toggle(ctx.now, THEME_TOGGLE_SPIN);
    tracing::info!(theme = preference.as_str(), "theme toggled");

    let base_dir = ctx.config_dir.clone();
    let writer = Arc::clone(ctx.theme_writer);
    let ticket = writer.ticket();
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || writer.write(ticket, preference, base_dir))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
                .map(|_written| ())
        },
        Message::ThemeSaved,
    )
}

pub fn handle_theme_saved(ctx: &mut UpdateContext<'_>, result: Result<(), Error>) -> Task<Message> {
    if let Err(err) = result {
        tracing::warn!("failed to save theme preference: {err}");
        ctx.notifications
            .emit(Severity::Error, THEME_SAVE_FAILED, ctx.now);
    }
    Task::none()
}

pub fn handle_contact_message(ctx: &mut UpdateContext<'_>, message: contact::Message) -> Task<Message> {
    match message {
        contact::Message::Submit => submit(ctx),
        contact::Message::FieldSubmitted(id) => {
            ctx.form.blur(id);
            submit(ctx)
        }
        // Inputs are disabled while busy; select lists still publish, so
        // every edit is gated here.
        _ if ctx.flow.is_busy() => Task::none(),
        contact::Message::Edited(id, value) => {
            ctx.form.edit(id, value);
            Task::none()
        }
        contact::Message::Selected(id, choice) => {
            ctx.form.edit(id, choice.value);
            ctx.form.blur(id);
            Task::none()
        }
        contact::Message::MessageAction(action) => {
            let is_edit = action.is_edit();
            let is_click = matches!(action, text_editor::Action::Click(_));
            ctx.message_editor.perform(action);

            if is_edit {
                let text = editor_text(ctx.message_editor);
                ctx.form.edit(FieldId::Message, text);
            } else if is_click {
                ctx.form.focus(FieldId::Message);
            }
            Task::none()
        }
    }
}

/// Text of the message editor without the trailing line break the editor
/// keeps after its last line.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

fn submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.flow.submit(ctx.form, ctx.now) {
        Ok(SubmitOutcome::Rejected { invalid }) => {
            tracing::debug!(?invalid, "contact form rejected");
        }
        Ok(SubmitOutcome::Sending { .. }) => {
            *ctx.menu_open = false;
        }
        Err(err) => tracing::debug!("{err}"),
    }
    Task::none()
}

/// Press on the page outside any input: the active field loses focus and
/// the mobile menu closes.
pub fn handle_page_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(active) = ctx.form.active() {
        ctx.form.blur(active);
    }
    *ctx.menu_open = false;
    Task::none()
}

pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, viewport: Viewport) -> Task<Message> {
    ctx.smooth_scroll.interrupted_by(viewport.offset_y);
    *ctx.viewport = viewport;
    refresh_effects(ctx);
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    let compact = size.width < MOBILE_BREAKPOINT_PX;
    if *ctx.compact && !compact {
        *ctx.menu_open = false;
    }
    *ctx.compact = compact;

    ctx.viewport.width = size.width;
    ctx.viewport.height = size.height;
    refresh_effects(ctx);
    Task::none()
}

/// Re-runs every scroll effect against the current viewport.
fn refresh_effects(ctx: &mut UpdateContext<'_>) {
    let changed = ctx.effects.on_scroll(ctx.viewport, ctx.layout, ctx.now);
    if !changed.is_empty() {
        tracing::debug!(
            ?changed,
            offset = ctx.viewport.offset_y,
            height = ctx.viewport.height,
            "scroll effects updated"
        );
    }
}

/// Advances every timer-driven unit to `now`.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    for event in ctx.flow.advance(ctx.form, ctx.now) {
        match event {
            FlowEvent::Delivered(_) => {
                ctx.notifications
                    .emit(Severity::Success, DELIVERED_NOTICE, ctx.now);
            }
            FlowEvent::Entered(Phase::Resetting) => {
                *ctx.message_editor = text_editor::Content::new();
            }
            FlowEvent::Entered(_) => {}
        }
    }

    ctx.typewriter.advance(ctx.now);
    ctx.notifications.tick(ctx.now);

    match ctx.smooth_scroll.sample(ctx.now) {
        Some(offset) => operation::scroll_to(
            view::page_scrollable_id(),
            AbsoluteOffset { x: 0.0, y: offset },
        ),
        None => Task::none(),
    }
}

pub fn handle_poll_system_theme() -> Task<Message> {
    Task::perform(
        async {
            tokio::task::spawn_blocking(theming::detect_system_dark)
                .await
                .unwrap_or(None)
        },
        Message::SystemThemeDetected,
    )
}

pub fn handle_system_theme_detected(
    ctx: &mut UpdateContext<'_>,
    system_dark: Option<bool>,
) -> Task<Message> {
    if ctx.theme.on_system_change(system_dark) {
        tracing::info!(
            theme = ctx.theme.effective().as_str(),
            "following system color scheme"
        );
    }
    Task::none()
}
