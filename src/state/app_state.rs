//! Application state definitions

use super::session::FormSession;
use super::values::FieldId;

/// Which control currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Message,
    SubmitButton,
}

impl Focus {
    /// Cycle forward (Tab)
    pub fn next(&self) -> Self {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Message,
            Focus::Message => Focus::SubmitButton,
            Focus::SubmitButton => Focus::Name,
        }
    }

    /// Cycle backward (Shift+Tab)
    pub fn prev(&self) -> Self {
        match self {
            Focus::Name => Focus::SubmitButton,
            Focus::Email => Focus::Name,
            Focus::Message => Focus::Email,
            Focus::SubmitButton => Focus::Message,
        }
    }

    /// The form field under focus, unless the Submit button holds it
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Focus::Name => Some(FieldId::Name),
            Focus::Email => Some(FieldId::Email),
            Focus::Message => Some(FieldId::Message),
            Focus::SubmitButton => None,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub session: FormSession,
    pub focus: Focus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_name() {
        assert_eq!(Focus::default(), Focus::Name);
    }

    #[test]
    fn test_next_cycles_through_all_controls() {
        let mut focus = Focus::Name;
        let mut seen = vec![focus];
        for _ in 0..3 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![Focus::Name, Focus::Email, Focus::Message, Focus::SubmitButton]
        );
        assert_eq!(focus.next(), Focus::Name); // wraps
    }

    #[test]
    fn test_prev_wraps_to_button() {
        assert_eq!(Focus::Name.prev(), Focus::SubmitButton);
        assert_eq!(Focus::SubmitButton.prev(), Focus::Message);
    }

    #[test]
    fn test_field_maps_focus_to_field_id() {
        assert_eq!(Focus::Name.field(), Some(FieldId::Name));
        assert_eq!(Focus::Email.field(), Some(FieldId::Email));
        assert_eq!(Focus::Message.field(), Some(FieldId::Message));
        assert_eq!(Focus::SubmitButton.field(), None);
    }
}
