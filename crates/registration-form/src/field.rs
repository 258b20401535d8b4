//! Field identity and per-field validation state.

use std::fmt;

/// Identifies one validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Full name text input.
    Name,
    /// Email text input.
    Email,
    /// Password input.
    Password,
    /// Password confirmation input.
    ConfirmPassword,
    /// Terms-and-conditions checkbox.
    Terms,
}

impl FieldKey {
    /// Every field, in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Terms,
    ];

    /// Stable identifier matching the form's input names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Terms => "terms",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Not yet validated (initial state, and after a successful submit).
    #[default]
    Unvalidated,
    /// The last validation passed.
    Valid,
    /// The last validation failed.
    Invalid,
}

/// Validity and message snapshot for one form field.
///
/// The snapshot is the rendered surface: a UI shows `message` in the field's
/// message area and applies its invalid visual/ARIA marker exactly when
/// [`FieldState::invalid_marker`] is true. Each validation call overwrites
/// both, so messages never accumulate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// Current raw input value (for the checkbox, `"true"` when checked).
    pub value: String,
    /// Result of the most recent validation.
    pub validity: Validity,
    /// Message to display next to the field.
    pub message: String,
}

impl FieldState {
    /// True when the last validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// True exactly when the field must carry its invalid visual/ARIA marker.
    #[must_use]
    pub fn invalid_marker(&self) -> bool {
        self.validity == Validity::Invalid
    }
}
