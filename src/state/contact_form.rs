//! Contact form state and operations

use super::field::{FieldId, FormField};
use super::rules;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options for the selection-style subject field
pub const SUBJECT_OPTIONS: [&str; 4] = ["General", "Collaboration", "Speaking", "Other"];

/// Field values captured at the moment of a submission attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    /// May be empty
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub captured_at: DateTime<Utc>,
}

/// The contact form: five fields in declaration order plus a submit row
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [FormField; 5],
    /// 0..=4 are fields, 5 is the submit button row
    pub active_field_index: usize,
    /// Generic submission-failure notice, rendered in the message
    /// field's error slot
    pub failure_notice: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.map(FormField::new),
            active_field_index: 0,
            failure_notice: None,
        }
    }

    /// Fields plus the submit button row
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// The field that currently has focus, if the submit row doesn't
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[Self::index_of(id)]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[Self::index_of(id)]
    }

    /// Move focus forward, wrapping past the submit row
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move focus backward, wrapping onto the submit row
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Cycle the subject through the fixed option list
    pub fn cycle_subject(&mut self, forward: bool) {
        let subject = self.field_mut(FieldId::Subject);
        let current = SUBJECT_OPTIONS
            .iter()
            .position(|&o| o == subject.as_text());
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => SUBJECT_OPTIONS.len() - 1,
            (Some(i), true) => (i + 1) % SUBJECT_OPTIONS.len(),
            (Some(i), false) => (i + SUBJECT_OPTIONS.len() - 1) % SUBJECT_OPTIONS.len(),
        };
        subject.set_text(SUBJECT_OPTIONS[next].to_string());
    }

    /// Validate one field and update its error state.
    ///
    /// An empty optional field clears any existing error unconditionally
    /// and is valid. Only this field's display state is touched.
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        let field = self.field_mut(id);
        if !id.is_required() && field.as_text().trim().is_empty() {
            field.error = None;
            return true;
        }
        field.error = rules::check(id, &field.value);
        field.error.is_none()
    }

    /// Validate every field in declaration order, never short-circuited,
    /// so all violated rules surface at once
    pub fn validate_form(&mut self) -> bool {
        let mut all_valid = true;
        for id in FieldId::ALL {
            if !self.validate_field(id) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// First field currently marked invalid, in declaration order
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|&id| self.field(id).is_invalid())
    }

    /// Move focus to the first invalid field, if any
    pub fn focus_first_invalid(&mut self) {
        if let Some(id) = self.first_invalid() {
            self.set_active_field(Self::index_of(id));
        }
    }

    /// Capture current values for transmission
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.field(FieldId::Name).value.clone(),
            email: self.field(FieldId::Email).value.clone(),
            phone: self.field(FieldId::Phone).value.clone(),
            subject: self.field(FieldId::Subject).value.clone(),
            message: self.field(FieldId::Message).value.clone(),
            captured_at: Utc::now(),
        }
    }

    /// Reset all values, errors and notices; focus returns to the top
    pub fn clear_all(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.failure_notice = None;
        self.active_field_index = 0;
    }

    fn index_of(id: FieldId) -> usize {
        FieldId::ALL
            .iter()
            .position(|&f| f == id)
            .unwrap_or_default()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
