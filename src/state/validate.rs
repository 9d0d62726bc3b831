//! Field validation
//!
//! Validation failures are data, not faults: a pass over the current values
//! yields a [`FieldErrors`] map and nothing here can return `Err` or panic.

use super::values::{ContactValues, FieldId};
use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Per-field validation messages. A key is present iff that field is
/// currently failing; an empty map means the values are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldId, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    fn insert(&mut self, field: FieldId, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Check all three fields against the form contract.
///
/// Every rule runs on every call, so one failing field never masks another.
/// The email rule is intentionally just a `'@'` presence check.
pub fn validate(values: &ContactValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if values.name.trim().is_empty() {
        errors.insert(FieldId::Name, NAME_REQUIRED);
    }
    if !values.email.contains('@') {
        errors.insert(FieldId::Email, EMAIL_INVALID);
    }
    if values.message.trim().is_empty() {
        errors.insert(FieldId::Message, MESSAGE_REQUIRED);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(name: &str, email: &str, message: &str) -> ContactValues {
        ContactValues {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_values_produce_no_errors() {
        let errors = validate(&values("Ann", "a@b", "hi"));
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_empty_name_is_required() {
        let errors = validate(&values("", "a@b.com", "hi"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldId::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let errors = validate(&values("   ", "a@b.com", "hi"));
        assert_eq!(errors.get(FieldId::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_email_without_at_is_invalid() {
        let errors = validate(&values("Ann", "noatsign", "hi"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldId::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_lone_at_sign_is_accepted() {
        // the check is presence of '@' and nothing more
        let errors = validate(&values("Ann", "@", "hi"));
        assert!(errors.get(FieldId::Email).is_none());
    }

    #[test]
    fn test_whitespace_message_is_required() {
        let errors = validate(&values("Ann", "a@b", "  "));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldId::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_all_fields_checked_without_short_circuit() {
        let errors = validate(&values("", "nope", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FieldId::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FieldId::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(FieldId::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_validate_is_pure() {
        let input = values("Ann", "noatsign", "hi");
        assert_eq!(validate(&input), validate(&input));
    }
}
