//! Form field value objects

use thiserror::Error;

/// The contact form's fields, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldId {
    /// All fields in declaration order (validation and focus order)
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone (optional)",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Whether an empty value is a validation error
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Phone)
    }

    /// Subject is cycled from a fixed option list rather than typed
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::Subject)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Per-field validation error, user-correctable and surfaced inline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Must be at most {max} characters")]
    TooLong { max: usize },
    #[error("Invalid format")]
    InvalidFormat,
}

/// Represents a single form field with its current value and error state
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
    pub error: Option<FieldError>,
}

impl FormField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            error: None,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Whether the invalid-marker is currently set
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and any error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.id.is_selection() && self.value.is_empty() {
            "(choose a subject)".to_string()
        } else {
            self.value.clone()
        }
    }
}
