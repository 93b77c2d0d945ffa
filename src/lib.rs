// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio page built with the Iced GUI framework.
//!
//! Besides presenting the owner's profile, skills and projects with
//! scroll-driven effects, it offers a contact form with client-side
//! validation and a simulated submission flow. Everything timed (typewriter,
//! toasts, submission phases, smooth scrolling) is driven by explicit
//! `Instant`s, which keeps the page logic testable without a window.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.3.0")]

pub mod app;
pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod effects;
pub mod error;
pub mod page;
pub mod scheduler;
pub mod ui;

pub use app::config;
