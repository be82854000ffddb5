//! Pure validation rules for the contact form fields
//!
//! Each rule is a pure function of the raw string value. Length bounds
//! operate on the trimmed value; pattern checks see the raw value.

use super::field::{FieldError, FieldId};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 2000;

/// `local@domain.tld`-shaped, nothing stricter
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Digits, spaces, `+`, `-` and parentheses only
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 ()+\-]+$").expect("phone pattern"));

/// Apply the rule for one field to a raw value.
///
/// Returns `None` when the value is valid. An empty optional field is
/// always valid regardless of its pattern.
pub fn check(id: FieldId, raw: &str) -> Option<FieldError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return if id.is_required() {
            Some(FieldError::Required)
        } else {
            None
        };
    }

    match id {
        FieldId::Name => length_bounds(trimmed, NAME_MIN, NAME_MAX),
        FieldId::Email => pattern(&EMAIL_RE, raw),
        FieldId::Phone => pattern(&PHONE_RE, raw),
        FieldId::Subject => None,
        FieldId::Message => length_bounds(trimmed, MESSAGE_MIN, MESSAGE_MAX),
    }
}

fn length_bounds(trimmed: &str, min: usize, max: usize) -> Option<FieldError> {
    let len = trimmed.chars().count();
    if len < min {
        Some(FieldError::TooShort { min })
    } else if len > max {
        Some(FieldError::TooLong { max })
    } else {
        None
    }
}

fn pattern(re: &Regex, raw: &str) -> Option<FieldError> {
    if re.is_match(raw) {
        None
    } else {
        Some(FieldError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_reject_empty() {
        for id in [
            FieldId::Name,
            FieldId::Email,
            FieldId::Subject,
            FieldId::Message,
        ] {
            assert_eq!(check(id, ""), Some(FieldError::Required));
            assert_eq!(check(id, "   "), Some(FieldError::Required));
        }
    }

    #[test]
    fn test_phone_empty_is_valid() {
        assert_eq!(check(FieldId::Phone, ""), None);
        assert_eq!(check(FieldId::Phone, "  "), None);
    }

    #[test]
    fn test_name_length_boundaries() {
        assert_eq!(
            check(FieldId::Name, "J"),
            Some(FieldError::TooShort { min: 2 })
        );
        assert_eq!(check(FieldId::Name, "Jo"), None);
        assert_eq!(check(FieldId::Name, &"a".repeat(100)), None);
        assert_eq!(
            check(FieldId::Name, &"a".repeat(101)),
            Some(FieldError::TooLong { max: 100 })
        );
    }

    #[test]
    fn test_name_length_is_trimmed() {
        // One character padded with whitespace is still one character
        assert_eq!(
            check(FieldId::Name, "  J  "),
            Some(FieldError::TooShort { min: 2 })
        );
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(check(FieldId::Email, "a@b.c"), None);
        assert_eq!(check(FieldId::Email, "jo@x.com"), None);
        assert_eq!(
            check(FieldId::Email, "not-an-email"),
            Some(FieldError::InvalidFormat)
        );
        assert_eq!(
            check(FieldId::Email, "two@@signs.com"),
            Some(FieldError::InvalidFormat)
        );
        assert_eq!(
            check(FieldId::Email, "no-tld@host"),
            Some(FieldError::InvalidFormat)
        );
    }

    #[test]
    fn test_phone_charset() {
        assert_eq!(check(FieldId::Phone, "+1 (555) 123-4567"), None);
        assert_eq!(check(FieldId::Phone, "5551234567"), None);
        assert_eq!(
            check(FieldId::Phone, "call-me"),
            Some(FieldError::InvalidFormat)
        );
    }

    #[test]
    fn test_subject_any_non_empty_is_valid() {
        assert_eq!(check(FieldId::Subject, "General"), None);
    }

    #[test]
    fn test_message_length_boundaries() {
        assert_eq!(
            check(FieldId::Message, &"a".repeat(9)),
            Some(FieldError::TooShort { min: 10 })
        );
        assert_eq!(check(FieldId::Message, &"a".repeat(10)), None);
        assert_eq!(check(FieldId::Message, &"a".repeat(2000)), None);
        assert_eq!(
            check(FieldId::Message, &"a".repeat(2001)),
            Some(FieldError::TooLong { max: 2000 })
        );
    }

    #[test]
    fn test_rules_are_pure() {
        // Same input, same output, no state in between
        let first = check(FieldId::Email, "a@b.c");
        let second = check(FieldId::Email, "a@b.c");
        assert_eq!(first, second);
    }
}
