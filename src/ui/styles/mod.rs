// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every page component.

pub mod button;
pub mod container;
pub mod tooltip;
