//! Submission lifecycle state machine
//!
//! Transitions are driven by named inputs rather than terminal events, so
//! the lifecycle is testable by direct invocation. `Validating` is a
//! synchronous stage: every `SubmitRequested` input passes through it
//! inside the transition and settles on `Sending` or back on `Idle`
//! before returning.

use super::contact_form::ContactForm;
use super::field::FieldId;

/// Generic user-visible notice for a failed delivery; the underlying
/// cause is logged, never shown
pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again later.";

/// Lifecycle of one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// The submit control is disabled exactly while sending
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Whether the success banner is visible
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Outcome reported by the submission collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Rejected,
}

/// Named inputs driving the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The field's value changed (the mutation itself has already
    /// happened); revalidates only if the invalid-marker is set
    FieldChanged(FieldId),
    /// Focus left the field; always validates once
    FieldBlurred(FieldId),
    SubmitRequested,
    SubmissionResolved(SubmitOutcome),
    /// The post-resolution observation window elapsed
    ResetElapsed,
}

/// Apply one input to the lifecycle, mutating field error state on the
/// form as a side effect. Returns the new submission state.
pub fn transition(
    state: SubmissionState,
    event: FormEvent,
    form: &mut ContactForm,
) -> SubmissionState {
    match event {
        FormEvent::FieldChanged(id) => {
            // A lingering failure notice sits in the message slot; any
            // edit of that field dismisses it
            if id == FieldId::Message {
                form.failure_notice = None;
            }
            if form.field(id).is_invalid() {
                form.validate_field(id);
            }
            state
        }
        FormEvent::FieldBlurred(id) => {
            form.validate_field(id);
            state
        }
        FormEvent::SubmitRequested => {
            if state.is_sending() {
                // Re-entrancy guard: one snapshot in flight at a time
                return state;
            }
            form.failure_notice = None;
            finish_validating(SubmissionState::Validating, form)
        }
        FormEvent::SubmissionResolved(outcome) => {
            if !state.is_sending() {
                return state;
            }
            match outcome {
                SubmitOutcome::Delivered => SubmissionState::Succeeded,
                SubmitOutcome::Rejected => {
                    form.failure_notice = Some(FAILURE_NOTICE.to_string());
                    SubmissionState::Failed
                }
            }
        }
        FormEvent::ResetElapsed => match state {
            SubmissionState::Succeeded => {
                form.clear_all();
                SubmissionState::Idle
            }
            // The notice outlives the window; it clears on the next
            // edit or submit attempt
            SubmissionState::Failed => SubmissionState::Idle,
            other => other,
        },
    }
}

/// The synchronous `Validating` stage: the form is checked field by
/// field and the state settles on `Sending` or back on `Idle`
fn finish_validating(state: SubmissionState, form: &mut ContactForm) -> SubmissionState {
    debug_assert!(matches!(state, SubmissionState::Validating));
    if form.validate_form() {
        SubmissionState::Sending
    } else {
        form.focus_first_invalid();
        SubmissionState::Idle
    }
}
