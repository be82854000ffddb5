//! Application driver
//!
//! Turns terminal key events into named form inputs, runs the submission
//! flow against the injected client, and owns the post-resolution reset
//! window.

use crate::config::TuiConfig;
use crate::state::{
    transition, ContactForm, FormEvent, FormSnapshot, NavState, SubmissionState, SubmitOutcome,
};
use crate::submit::SubmitClientTrait;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub struct App<C: SubmitClientTrait> {
    pub config: TuiConfig,
    client: C,
    pub form: ContactForm,
    pub submission: SubmissionState,
    pub nav: NavState,
    /// When the current observation window ends, if one is running
    reset_deadline: Option<Instant>,
    /// Snapshot waiting for delivery, taken by the event loop after it
    /// has drawn one frame with the submit control disabled
    pending_submit: Option<FormSnapshot>,
    quit: bool,
}

impl<C: SubmitClientTrait> App<C> {
    pub fn new(config: TuiConfig, client: C) -> Self {
        Self {
            config,
            client,
            form: ContactForm::new(),
            submission: SubmissionState::default(),
            nav: NavState::default(),
            reset_deadline: None,
            pending_submit: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
            }
            // Nav menu toggle
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.nav.toggle();
            }
            // Send shortcut works from any field
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SEND_MODIFIER) => {
                self.queue_submit();
            }
            KeyCode::Tab => {
                self.blur_active();
                self.form.next_field();
            }
            KeyCode::BackTab => {
                self.blur_active();
                self.form.prev_field();
            }
            KeyCode::Enter if self.form.is_submit_row_active() => {
                self.queue_submit();
            }
            KeyCode::Enter => {
                // Enter in the message field adds a newline
                if let Some(id) = self.form.active_field_id() {
                    if id.is_multiline() {
                        self.form.field_mut(id).push_char('\n');
                        self.apply(FormEvent::FieldChanged(id));
                    }
                }
            }
            KeyCode::Up | KeyCode::Left => {
                if let Some(id) = self.form.active_field_id() {
                    if id.is_selection() {
                        self.form.cycle_subject(false);
                        self.apply(FormEvent::FieldChanged(id));
                    }
                }
            }
            KeyCode::Down | KeyCode::Right => {
                if let Some(id) = self.form.active_field_id() {
                    if id.is_selection() {
                        self.form.cycle_subject(true);
                        self.apply(FormEvent::FieldChanged(id));
                    }
                }
            }
            // Unhandled modifier chords never insert their character
            KeyCode::Char(c)
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                if let Some(id) = self.form.active_field_id() {
                    if !id.is_selection() {
                        self.form.field_mut(id).push_char(c);
                        self.apply(FormEvent::FieldChanged(id));
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(id) = self.form.active_field_id() {
                    if !id.is_selection() {
                        self.form.field_mut(id).pop_char();
                        self.apply(FormEvent::FieldChanged(id));
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Advance timer-driven state; called once per event-loop pass
    pub fn tick(&mut self) {
        if let Some(deadline) = self.reset_deadline {
            if Instant::now() >= deadline {
                self.reset_deadline = None;
                self.apply(FormEvent::ResetElapsed);
            }
        }
    }

    /// Start one submission attempt: validate and, if the form holds,
    /// capture a snapshot and enter `Sending`.
    ///
    /// Returns `None` while another snapshot is in flight or when
    /// validation failed; the submit control is disabled for the whole
    /// of `Sending`, so a second attempt cannot start before the first
    /// resolves.
    pub fn begin_submit(&mut self) -> Option<FormSnapshot> {
        if self.submission.is_sending() {
            return None;
        }
        self.apply(FormEvent::SubmitRequested);
        if self.submission.is_sending() {
            Some(self.form.snapshot())
        } else {
            None
        }
    }

    /// Deliver a captured snapshot and resolve the attempt.
    ///
    /// The event loop calls this after drawing one frame in `Sending`,
    /// so the disabled control and busy label are visible for the
    /// length of the delivery.
    pub async fn complete_submit(&mut self, snapshot: FormSnapshot) {
        tracing::info!(recipient = %self.config.recipient(), "sending contact form");
        let outcome = match self.client.submit(&snapshot).await {
            Ok(()) => SubmitOutcome::Delivered,
            Err(err) => {
                // Cause goes to the log; the user sees only the
                // generic notice
                tracing::warn!("submission failed: {err}");
                SubmitOutcome::Rejected
            }
        };
        self.apply(FormEvent::SubmissionResolved(outcome));

        // Both outcomes observe a fixed window before settling back on
        // Idle; only success clears the form when it elapses
        if matches!(
            self.submission,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.reset_deadline = Some(Instant::now() + self.config.reset_window());
        }
    }

    /// Hand a queued snapshot to the event loop, at most once
    pub fn take_pending_submit(&mut self) -> Option<FormSnapshot> {
        self.pending_submit.take()
    }

    fn queue_submit(&mut self) {
        self.pending_submit = self.begin_submit();
    }

    fn apply(&mut self, event: FormEvent) {
        self.submission = transition(self.submission, event, &mut self.form);
    }

    /// Blur the field losing focus, if a field (not the submit row) has it
    fn blur_active(&mut self) {
        if let Some(id) = self.form.active_field_id() {
            self.apply(FormEvent::FieldBlurred(id));
        }
    }
}
