// SPDX-License-Identifier: MPL-2.0
//! Typewriter headline for the hero section.
//!
//! Cycles through a list of phrases forever: each phrase is typed one
//! character at a time, held, deleted one character at a time, and followed
//! by a short pause before the next phrase. Every step is a timer on a
//! [`Scheduler`], rescheduled from the previous deadline.

use crate::app::config::{
    TYPEWRITER_CARET_BLINK, TYPEWRITER_DELETE_DELAY, TYPEWRITER_HOLD_DELAY,
    TYPEWRITER_NEXT_PHRASE_DELAY, TYPEWRITER_START_DELAY, TYPEWRITER_TYPE_DELAY,
};
use crate::scheduler::Scheduler;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step;

#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    /// Number of characters of the current phrase on screen.
    chars: usize,
    deleting: bool,
    shown: String,
    timers: Scheduler<Step>,
    started: Option<Instant>,
}

impl Typewriter {
    /// Creates a typewriter for `phrases`. Empty phrases are skipped.
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases: phrases.into_iter().filter(|phrase| !phrase.is_empty()).collect(),
            phrase: 0,
            chars: 0,
            deleting: false,
            shown: String::new(),
            timers: Scheduler::new(),
            started: None,
        }
    }

    /// Schedules the first keystroke. Does nothing without phrases or when
    /// already started.
    pub fn start(&mut self, now: Instant) {
        if self.phrases.is_empty() || self.started.is_some() {
            return;
        }
        self.started = Some(now);
        self.timers.schedule(now, TYPEWRITER_START_DELAY, Step);
    }

    /// Text currently on screen, caret excluded.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.shown
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Whether the blinking caret is in its visible half-period.
    #[must_use]
    pub fn caret_visible(&self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return true;
        };
        let period = TYPEWRITER_CARET_BLINK.as_millis().max(1);
        (now.saturating_duration_since(started).as_millis() / period) % 2 == 0
    }

    /// Applies every keystroke due at `now`. Returns `true` if the text
    /// changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(fired) = self.timers.pop_due(now) {
            let delay = self.step();
            self.timers.schedule(fired.deadline, delay, Step);
            changed = true;
        }
        changed
    }

    /// Performs one keystroke and returns the delay until the next one.
    fn step(&mut self) -> Duration {
        let Some(current) = self.phrases.get(self.phrase) else {
            return TYPEWRITER_TYPE_DELAY;
        };
        let length = current.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(length);
        }
        self.shown = current.chars().take(self.chars).collect();

        if !self.deleting && self.chars == length {
            self.deleting = true;
            TYPEWRITER_HOLD_DELAY
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            TYPEWRITER_NEXT_PHRASE_DELAY
        } else if self.deleting {
            TYPEWRITER_DELETE_DELAY
        } else {
            TYPEWRITER_TYPE_DELAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn nothing_is_typed_before_start_delay() {
        let start = Instant::now();
        let mut writer = typewriter(&["Data"]);
        writer.start(start);

        assert!(!writer.advance(start + ms(999)));
        assert_eq!(writer.text(), "");

        assert!(writer.advance(start + ms(1000)));
        assert_eq!(writer.text(), "D");
    }

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let start = Instant::now();
        let mut writer = typewriter(&["ab", "xyz"]);
        writer.start(start);

        // Typing: +1000 "a", +1100 "ab", then hold 2000ms.
        writer.advance(start + ms(1100));
        assert_eq!(writer.text(), "ab");
        writer.advance(start + ms(3099));
        assert_eq!(writer.text(), "ab");

        // Deleting: +3100 "a", +3150 "".
        writer.advance(start + ms(3100));
        assert_eq!(writer.text(), "a");
        writer.advance(start + ms(3150));
        assert_eq!(writer.text(), "");

        // Pause 500ms, then the next phrase.
        writer.advance(start + ms(3649));
        assert_eq!(writer.text(), "");
        writer.advance(start + ms(3650));
        assert_eq!(writer.text(), "x");
    }

    #[test]
    fn cycles_back_to_first_phrase() {
        let start = Instant::now();
        let mut writer = typewriter(&["a"]);
        writer.start(start);

        // +1000 "a" (hold 2000), +3000 "" (pause 500), +3500 "a" again.
        writer.advance(start + ms(3000));
        assert_eq!(writer.text(), "");
        writer.advance(start + ms(3500));
        assert_eq!(writer.text(), "a");
    }

    #[test]
    fn handles_multibyte_characters() {
        let start = Instant::now();
        let mut writer = typewriter(&["é&ü"]);
        writer.start(start);

        writer.advance(start + ms(1100));
        assert_eq!(writer.text(), "é&");
    }

    #[test]
    fn empty_phrase_list_never_schedules() {
        let start = Instant::now();
        let mut writer = typewriter(&["", ""]);
        writer.start(start);

        assert!(writer.next_deadline().is_none());
        assert!(!writer.advance(start + ms(10_000)));
    }

    #[test]
    fn caret_blinks() {
        let start = Instant::now();
        let mut writer = typewriter(&["a"]);
        writer.start(start);

        assert!(writer.caret_visible(start));
        assert!(!writer.caret_visible(start + ms(530)));
        assert!(writer.caret_visible(start + ms(1060)));
    }
}
