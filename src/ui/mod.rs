// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern. The page logic itself
//! (validation, submission, scroll effects) lives outside `ui` and is only
//! rendered here.
//!
//! # Components
//!
//! - [`navbar`] - Fixed navigation bar with the mobile menu and theme toggle
//! - [`sections`] - Page sections from the hero down to the footer
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark mode resolution and persistence state

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
