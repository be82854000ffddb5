//! Form domain layer
//!
//! Field state, validation rules, the submission lifecycle machine and
//! the navigation-menu state, all independent of the terminal.

mod contact_form;
mod field;
mod machine;
mod nav;
mod rules;

pub use contact_form::{ContactForm, FormSnapshot};
pub use field::{FieldError, FieldId, FormField};
pub use machine::{transition, FormEvent, SubmissionState, SubmitOutcome, FAILURE_NOTICE};
pub use nav::NavState;
pub use rules::MESSAGE_MAX;
