// SPDX-License-Identifier: MPL-2.0
//! Simulated contact submission.
//!
//! The flow is a strictly linear state machine:
//!
//! ```text
//! Idle → Validating ─┬─ invalid ─→ Idle
//!                    └─ valid ───→ Sending → Success → Resetting → Idle
//! ```
//!
//! No request leaves the process. After the send delay the flow yields
//! [`FlowEvent::Delivered`] carrying the form snapshot, which is where a real
//! transport would be plugged in. Timed transitions are queued on a
//! [`Scheduler`] and applied by [`SubmissionFlow::advance`].

use super::{ContactForm, FieldId};
use crate::app::config::{FORM_EXIT, SEND_DELAY, SUCCESS_DISPLAY};
use crate::scheduler::Scheduler;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Phase of the submission state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Sending,
    Success,
    Resetting,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Validating => "validating",
            Phase::Sending => "sending",
            Phase::Success => "success",
            Phase::Resetting => "resetting",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress ({0})")]
    InFlight(Phase),
}

/// Snapshot of the form at the moment it was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub timeline: String,
    pub message: String,
}

impl Submission {
    fn capture(form: &ContactForm) -> Self {
        let value = |id| form.value(id).trim().to_string();
        Self {
            name: value(FieldId::Name),
            email: value(FieldId::Email),
            project_type: value(FieldId::ProjectType),
            timeline: value(FieldId::Timeline),
            message: value(FieldId::Message),
        }
    }
}

/// Result of an accepted `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; every failing field now shows its error.
    Rejected { invalid: Vec<FieldId> },
    /// The form is being sent; delivery happens at `deliver_at`.
    Sending { deliver_at: Instant },
}

impl SubmitOutcome {
    /// Phases entered by the `submit` call, in order.
    #[must_use]
    pub fn phases(&self) -> [Phase; 2] {
        match self {
            SubmitOutcome::Rejected { .. } => [Phase::Validating, Phase::Idle],
            SubmitOutcome::Sending { .. } => [Phase::Validating, Phase::Sending],
        }
    }
}

/// Something that happened while advancing the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Entered(Phase),
    Delivered(Submission),
}

/// Durations of the timed phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    pub send_delay: Duration,
    /// Cross-fade from the form to the success panel.
    pub form_exit: Duration,
    /// How long the success panel stays after the cross-fade.
    pub success_display: Duration,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            send_delay: SEND_DELAY,
            form_exit: FORM_EXIT,
            success_display: SUCCESS_DISPLAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Deliver,
    Reset,
}

/// Submission state machine for one contact form.
#[derive(Debug)]
pub struct SubmissionFlow {
    phase: Phase,
    timings: FlowTimings,
    timers: Scheduler<Step>,
    pending: Option<Submission>,
    success_since: Option<Instant>,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new(FlowTimings::default())
    }
}

impl SubmissionFlow {
    #[must_use]
    pub fn new(timings: FlowTimings) -> Self {
        Self {
            phase: Phase::Idle,
            timings,
            timers: Scheduler::new(),
            pending: None,
            success_since: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the submit control must be disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Whether timed transitions are still queued.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_idle()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(from = %self.phase, to = %phase, "submission phase");
        self.phase = phase;
    }

    /// Starts a submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] when a previous submission has not
    /// returned to idle yet. Nothing changes in that case.
    pub fn submit(
        &mut self,
        form: &mut ContactForm,
        now: Instant,
    ) -> Result<SubmitOutcome, SubmitError> {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = %self.phase, "submit ignored while in flight");
            return Err(SubmitError::InFlight(self.phase));
        }

        self.enter(Phase::Validating);
        let invalid = form.validate_all();
        if !invalid.is_empty() {
            self.enter(Phase::Idle);
            return Ok(SubmitOutcome::Rejected { invalid });
        }

        self.pending = Some(Submission::capture(form));
        self.enter(Phase::Sending);
        self.timers.schedule(now, self.timings.send_delay, Step::Deliver);
        Ok(SubmitOutcome::Sending {
            deliver_at: now + self.timings.send_delay,
        })
    }

    /// Applies every transition due at `now`.
    pub fn advance(&mut self, form: &mut ContactForm, now: Instant) -> Vec<FlowEvent> {
        let mut events = Vec::new();

        while let Some(fired) = self.timers.pop_due(now) {
            match fired.event {
                Step::Deliver => {
                    if let Some(submission) = self.pending.take() {
                        tracing::info!(
                            name = %submission.name,
                            email = %submission.email,
                            project_type = %submission.project_type,
                            timeline = %submission.timeline,
                            message_chars = submission.message.chars().count(),
                            "contact message delivered"
                        );
                        events.push(FlowEvent::Delivered(submission));
                    }
                    self.enter(Phase::Success);
                    self.success_since = Some(fired.deadline);
                    events.push(FlowEvent::Entered(Phase::Success));
                    self.timers.schedule(
                        fired.deadline,
                        self.timings.form_exit + self.timings.success_display,
                        Step::Reset,
                    );
                }
                Step::Reset => {
                    self.enter(Phase::Resetting);
                    events.push(FlowEvent::Entered(Phase::Resetting));
                    form.reset();
                    self.success_since = None;
                    self.enter(Phase::Idle);
                    events.push(FlowEvent::Entered(Phase::Idle));
                }
            }
        }

        events
    }

    /// Progress of the form-to-success cross-fade, from 0 to 1.
    ///
    /// Zero outside the success phase.
    #[must_use]
    pub fn exit_progress(&self, now: Instant) -> f32 {
        let Some(since) = self.success_since else {
            return 0.0;
        };
        let fade = self.timings.form_exit.as_secs_f32();
        if fade <= 0.0 {
            return 1.0;
        }
        (now.saturating_duration_since(since).as_secs_f32() / fade).clamp(0.0, 1.0)
    }

    /// Whether the success panel is shown instead of the form.
    #[must_use]
    pub fn shows_success(&self) -> bool {
        self.phase == Phase::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(FieldId::Name, "Ana");
        form.edit(FieldId::Email, "ana@x.com");
        form.edit(FieldId::ProjectType, "web");
        form.edit(FieldId::Timeline, "1 month");
        form.edit(FieldId::Message, "I need a dashboard!!");
        form
    }

    fn phases(events: &[FlowEvent]) -> Vec<Phase> {
        events
            .iter()
            .filter_map(|event| match event {
                FlowEvent::Entered(phase) => Some(*phase),
                FlowEvent::Delivered(_) => None,
            })
            .collect()
    }

    #[test]
    fn invalid_form_returns_to_idle_with_errors() {
        let now = Instant::now();
        let mut form = ContactForm::new();
        let mut flow = SubmissionFlow::default();

        let outcome = flow.submit(&mut form, now).expect("idle flow accepts submit");

        assert!(matches!(outcome, SubmitOutcome::Rejected { ref invalid } if invalid.len() == 5));
        assert_eq!(outcome.phases(), [Phase::Validating, Phase::Idle]);
        assert_eq!(flow.phase(), Phase::Idle);
        assert!(form.has_errors());
        assert!(!flow.has_pending_timers());
    }

    #[test]
    fn valid_form_goes_through_every_phase() {
        let start = Instant::now();
        let mut form = filled_form();
        let mut flow = SubmissionFlow::default();

        let outcome = flow.submit(&mut form, start).expect("submit");
        assert_eq!(outcome.phases(), [Phase::Validating, Phase::Sending]);
        assert_eq!(
            outcome,
            SubmitOutcome::Sending {
                deliver_at: start + ms(2000)
            }
        );
        assert!(flow.is_busy());

        assert!(flow.advance(&mut form, start + ms(1999)).is_empty());
        assert_eq!(flow.phase(), Phase::Sending);

        let events = flow.advance(&mut form, start + ms(2000));
        assert_eq!(phases(&events), vec![Phase::Success]);
        assert!(flow.shows_success());

        assert!(flow.advance(&mut form, start + ms(7299)).is_empty());

        let events = flow.advance(&mut form, start + ms(7300));
        assert_eq!(phases(&events), vec![Phase::Resetting, Phase::Idle]);
        assert_eq!(flow.phase(), Phase::Idle);
        assert!(form.fields().all(|field| field.value.is_empty()));
        assert_eq!(form.char_count(), 0);
    }

    #[test]
    fn delivery_carries_trimmed_snapshot() {
        let start = Instant::now();
        let mut form = filled_form();
        form.edit(FieldId::Name, "  Ana  ");
        let mut flow = SubmissionFlow::default();
        flow.submit(&mut form, start).expect("submit");

        let events = flow.advance(&mut form, start + ms(2000));
        let delivered = events.iter().find_map(|event| match event {
            FlowEvent::Delivered(submission) => Some(submission),
            FlowEvent::Entered(_) => None,
        });

        let submission = delivered.expect("delivery event");
        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.timeline, "1 month");
    }

    #[test]
    fn submit_while_in_flight_is_rejected_without_changes() {
        let start = Instant::now();
        let mut form = filled_form();
        let mut flow = SubmissionFlow::default();
        flow.submit(&mut form, start).expect("first submit");

        let second = flow.submit(&mut form, start + ms(10));
        assert_eq!(second, Err(SubmitError::InFlight(Phase::Sending)));
        assert_eq!(flow.phase(), Phase::Sending);

        flow.advance(&mut form, start + ms(2000));
        let third = flow.submit(&mut form, start + ms(2100));
        assert_eq!(third, Err(SubmitError::InFlight(Phase::Success)));
    }

    #[test]
    fn late_advance_applies_all_due_transitions_at_once() {
        let start = Instant::now();
        let mut form = filled_form();
        let mut flow = SubmissionFlow::default();
        flow.submit(&mut form, start).expect("submit");

        let events = flow.advance(&mut form, start + ms(60_000));
        assert_eq!(
            phases(&events),
            vec![Phase::Success, Phase::Resetting, Phase::Idle]
        );
    }

    #[test]
    fn flow_can_run_again_after_reset() {
        let start = Instant::now();
        let mut form = filled_form();
        let mut flow = SubmissionFlow::default();
        flow.submit(&mut form, start).expect("submit");
        flow.advance(&mut form, start + ms(7300));

        let mut form = filled_form();
        assert!(flow.submit(&mut form, start + ms(8000)).is_ok());
    }

    #[test]
    fn exit_progress_follows_fade() {
        let start = Instant::now();
        let mut form = filled_form();
        let mut flow = SubmissionFlow::default();
        flow.submit(&mut form, start).expect("submit");
        assert_eq!(flow.exit_progress(start), 0.0);

        flow.advance(&mut form, start + ms(2000));
        assert!((flow.exit_progress(start + ms(2150)) - 0.5).abs() < 1e-3);
        assert_eq!(flow.exit_progress(start + ms(4000)), 1.0);
    }

    #[test]
    fn custom_timings_are_honored() {
        let start = Instant::now();
        let mut form = filled_form();
        let mut flow = SubmissionFlow::new(FlowTimings {
            send_delay: ms(10),
            form_exit: ms(1),
            success_display: ms(2),
        });
        flow.submit(&mut form, start).expect("submit");

        let events = flow.advance(&mut form, start + ms(13));
        assert_eq!(
            phases(&events),
            vec![Phase::Success, Phase::Resetting, Phase::Idle]
        );
    }
}
