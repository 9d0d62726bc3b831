//! Contact form value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies one of the three contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }

    /// The message field accepts embedded newlines, the others are single-line
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldId::Message)
    }
}

/// Current input values, one entry per form field.
///
/// Updates go through [`ContactValues::with_field`], which produces a new
/// value with exactly one field replaced. The session swaps its copy
/// wholesale, so a field edit is atomic with respect to the next render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    /// Copy with a single field replaced; the other two are untouched
    pub fn with_field(&self, field: FieldId, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FieldId::Name => next.name = value,
            FieldId::Email => next.email = value,
            FieldId::Message => next.message = value,
        }
        next
    }
}

/// The most recently accepted submission. Overwritten on each success,
/// never accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    pub values: ContactValues,
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedRecord {
    pub fn new(values: ContactValues) -> Self {
        Self {
            values,
            submitted_at: Utc::now(),
        }
    }
}
