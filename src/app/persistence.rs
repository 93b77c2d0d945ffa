// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Only the theme preference survives a restart. It is written whenever the
//! visitor flips the toggle; a session forced from the command line never
//! reaches this module.

use super::config::{self, Config};
use crate::error::Result;
use crate::ui::theming::ThemePreference;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Stores `preference` in the settings file, keeping any other section.
///
/// # Errors
///
/// Returns an error if the settings file cannot be written.
pub fn persist_theme(preference: ThemePreference, base_dir: Option<PathBuf>) -> Result<()> {
    let (mut cfg, _warning) = config::load_with_override(base_dir.clone());
    cfg.general.theme = Some(preference);
    config::save_with_override(&cfg, base_dir)
}

/// Orders theme writes issued from background tasks.
///
/// Every toggle takes a ticket. Writes run one at a time, and a write whose
/// ticket is older than the newest one issued is skipped, so the file always
/// ends with the last toggled value.
#[derive(Debug, Default)]
pub struct ThemeWriter {
    latest: AtomicU64,
    lock: Mutex<()>,
}

impl ThemeWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next write slot.
    pub fn ticket(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Persists `preference` unless a newer ticket was issued. Returns
    /// whether the file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn write(
        &self,
        ticket: u64,
        preference: ThemePreference,
        base_dir: Option<PathBuf>,
    ) -> Result<bool> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket != self.latest.load(Ordering::SeqCst) {
            tracing::debug!(ticket, "skipping superseded theme write");
            return Ok(false);
        }
        persist_theme(preference, base_dir)?;
        Ok(true)
    }
}

/// Loads the stored preference. The second value is a warning to show when
/// the settings file exists but could not be read.
pub fn load_theme(base_dir: Option<PathBuf>) -> (Option<ThemePreference>, Option<String>) {
    let (Config { general }, warning) = config::load_with_override(base_dir);
    (general.theme, warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn theme_round_trips_through_settings_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let base = Some(dir.path().to_path_buf());

        assert_eq!(load_theme(base.clone()), (None, None));

        persist_theme(ThemePreference::Dark, base.clone()).expect("save succeeds");
        assert_eq!(load_theme(base.clone()).0, Some(ThemePreference::Dark));

        persist_theme(ThemePreference::Light, base.clone()).expect("save succeeds");
        assert_eq!(load_theme(base).0, Some(ThemePreference::Light));
    }

    #[test]
    fn superseded_write_is_skipped() {
        let dir = tempdir().expect("failed to create temp dir");
        let base = Some(dir.path().to_path_buf());
        let writer = ThemeWriter::new();

        let first = writer.ticket();
        let second = writer.ticket();

        assert!(writer
            .write(second, ThemePreference::Dark, base.clone())
            .expect("save succeeds"));
        assert!(!writer
            .write(first, ThemePreference::Light, base.clone())
            .expect("skip succeeds"));

        assert_eq!(load_theme(base).0, Some(ThemePreference::Dark));
    }

    #[test]
    fn writes_in_ticket_order_keep_last_value() {
        let dir = tempdir().expect("failed to create temp dir");
        let base = Some(dir.path().to_path_buf());
        let writer = ThemeWriter::new();

        let first = writer.ticket();
        assert!(writer
            .write(first, ThemePreference::Dark, base.clone())
            .expect("save succeeds"));
        let second = writer.ticket();
        assert!(writer
            .write(second, ThemePreference::Light, base.clone())
            .expect("save succeeds"));

        assert_eq!(load_theme(base).0, Some(ThemePreference::Light));
    }

    #[test]
    fn unreadable_settings_produce_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("settings.toml"), "general = [").expect("write");

        let (theme, warning) = load_theme(Some(dir.path().to_path_buf()));
        assert_eq!(theme, None);
        assert!(warning.is_some());
    }
}
