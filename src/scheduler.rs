// SPDX-License-Identifier: MPL-2.0
//! Deterministic timer queue for timed UI sequences.
//!
//! Every timed behavior (the contact submission flow, the typewriter, etc.)
//! registers its continuations here instead of nesting delayed callbacks.
//! Time never advances on its own: callers pass the current [`Instant`] to
//! [`Scheduler::pop_due`], which makes each transition testable with
//! synthetic instants and no wall-clock waiting.
//!
//! # Example
//!
//! ```
//! use iced_folio::scheduler::Scheduler;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut timers = Scheduler::new();
//! timers.schedule(start, Duration::from_millis(300), "fade");
//! timers.schedule(start, Duration::from_millis(100), "slide");
//!
//! let later = start + Duration::from_millis(500);
//! assert_eq!(timers.pop_due(later).map(|fired| fired.event), Some("slide"));
//! assert_eq!(timers.pop_due(later).map(|fired| fired.event), Some("fade"));
//! assert!(timers.is_idle());
//! ```

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Handle returned when scheduling, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    pub id: TimerId,
    /// When the timer was due. Follow-up timers should be scheduled from
    /// here rather than from the polling instant to avoid drift.
    pub deadline: Instant,
    pub event: E,
}

/// Ordered queue of pending timers.
///
/// Timers sharing a deadline fire in scheduling order.
#[derive(Debug)]
pub struct Scheduler<E> {
    pending: BTreeMap<(Instant, TimerId), E>,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<E> Scheduler<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) -> TimerId {
        self.schedule_at(now + delay, event)
    }

    /// Schedules `event` to fire at an absolute deadline.
    pub fn schedule_at(&mut self, deadline: Instant, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((deadline, id), event);
        id
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// never scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.pending.keys().find(|(_, timer)| *timer == id).copied();
        key.and_then(|key| self.pending.remove(&key)).is_some()
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired<E>> {
        let (&(deadline, id), _) = self.pending.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.pending.remove(&(deadline, id)).map(|event| Fired {
            id,
            deadline,
            event,
        })
    }

    /// Deadline of the next pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
