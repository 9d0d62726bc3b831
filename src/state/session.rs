//! Form session state
//!
//! [`FormSession`] owns the three pieces of session-local state: current
//! input values, current validation errors, and the most recently accepted
//! submission. It is the only place any of them are mutated.

use super::validate::{validate, FieldErrors};
use super::values::{ContactValues, FieldId, SubmittedRecord};

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

#[derive(Debug, Default)]
pub struct FormSession {
    values: ContactValues,
    errors: FieldErrors,
    submitted: Option<SubmittedRecord>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        self.submitted.as_ref()
    }

    /// Replace a single field's value. The other fields, the current errors,
    /// and any prior submission are untouched; no validation runs here.
    pub fn set_field(&mut self, field: FieldId, value: String) {
        self.values = self.values.with_field(field, value);
    }

    /// Append one character to a field (keystroke input)
    pub fn push_char(&mut self, field: FieldId, c: char) {
        let mut value = self.values.get(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    /// Remove the last character from a field (backspace)
    pub fn backspace(&mut self, field: FieldId) {
        let mut value = self.values.get(field).to_string();
        value.pop();
        self.set_field(field, value);
    }

    /// Run validation over the current values and apply the outcome.
    ///
    /// Accepted: the values become the new submitted record, then values and
    /// errors reset to empty. Rejected: the errors are stored for display and
    /// the typed values stay in place for correction. Invalid input is a
    /// normal outcome, not a failure.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.values);
        if errors.is_empty() {
            self.submitted = Some(SubmittedRecord::new(self.values.clone()));
            self.values = ContactValues::default();
            self.errors = FieldErrors::default();
            SubmitOutcome::Accepted
        } else {
            self.errors = errors;
            SubmitOutcome::Rejected
        }
    }
}
